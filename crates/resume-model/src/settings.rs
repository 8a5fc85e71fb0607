//! Document-level presentation settings.

use serde::{Deserialize, Serialize};

/// Presentation settings that apply to the whole document.
///
/// These travel with every snapshot so that undoing a template or color
/// change works the same way as undoing a content edit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct DocumentSettings {
    /// Template identifier the renderer should use.
    pub template: String,
    /// Accent color as a CSS hex string.
    pub accent_color: String,
    pub font_family: String,
    pub font_size_pt: u8,
}

impl Default for DocumentSettings {
    fn default() -> Self {
        Self {
            template: "classic".to_string(),
            accent_color: "#2563eb".to_string(),
            font_family: "Inter".to_string(),
            font_size_pt: 11,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_populated() {
        let settings = DocumentSettings::default();
        assert_eq!(settings.template, "classic");
        assert!(settings.accent_color.starts_with('#'));
    }
}
