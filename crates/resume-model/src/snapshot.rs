//! Point-in-time document captures.

use serde::{Deserialize, Serialize};

use crate::document::ResumeDocument;
use crate::order::SectionOrder;
use crate::settings::DocumentSettings;

/// A deep, independent capture of the full editable state.
///
/// Snapshots are values: once taken, they share no structure with the live
/// document, so later edits can never retroactively alter them. The history
/// stacks and the persistence layer both store these.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResumeSnapshot {
    pub document: ResumeDocument,
    pub order: SectionOrder,
    pub settings: DocumentSettings,
}

impl ResumeSnapshot {
    pub fn new(
        document: ResumeDocument,
        order: SectionOrder,
        settings: DocumentSettings,
    ) -> Self {
        Self {
            document,
            order,
            settings,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snapshot_is_independent_of_source() {
        let mut document = ResumeDocument::default();
        document.personal_info.full_name = Some("Ada".to_string());

        let snapshot = ResumeSnapshot::new(
            document.clone(),
            SectionOrder::default_order(),
            DocumentSettings::default(),
        );

        document.personal_info.full_name = Some("Grace".to_string());
        assert_eq!(
            snapshot.document.personal_info.full_name.as_deref(),
            Some("Ada")
        );
    }
}
