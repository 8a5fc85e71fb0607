//! History configuration.

use std::time::Duration;

/// Tuning knobs for [`crate::HistoryManager`].
#[derive(Debug, Clone)]
pub struct HistoryConfig {
    /// Maximum number of undo steps kept. When `past` grows beyond this,
    /// the oldest entries are evicted and the undo baseline shifts forward.
    pub capacity: usize,

    /// Coalesce bursts of edits recorded within this window into a single
    /// history entry (per-keystroke typing produces one undo step, not one
    /// per character). `None` records every edit individually.
    ///
    /// Coalescing never merges across an undo/redo boundary: the first
    /// record after a replay always starts a fresh entry.
    pub coalesce_window: Option<Duration>,
}

impl Default for HistoryConfig {
    fn default() -> Self {
        Self {
            capacity: 100,
            coalesce_window: None,
        }
    }
}

impl HistoryConfig {
    /// Default config with burst coalescing enabled.
    pub fn with_coalescing(window: Duration) -> Self {
        Self {
            coalesce_window: Some(window),
            ..Self::default()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_records_every_edit() {
        let config = HistoryConfig::default();
        assert!(config.coalesce_window.is_none());
        assert_eq!(config.capacity, 100);
    }
}
