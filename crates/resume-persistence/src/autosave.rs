//! Auto-save timing: dirty tracking and debounce rules.
//!
//! Saves happen on discrete edits, but writing after every keystroke is
//! wasteful, so auto-save debounces: it waits for a quiet period after the
//! last change, with a ceiling on how long an unbroken burst of edits can
//! postpone a save.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// User settings for auto-save behavior.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AutoSaveConfig {
    /// Whether auto-save is enabled.
    pub enabled: bool,

    /// Quiet period after the most recent change before saving, in
    /// milliseconds. Each new change resets the timer.
    pub debounce_ms: u64,

    /// Ceiling, in milliseconds since the first unsaved change, after which
    /// a save is forced even if changes keep arriving.
    pub max_delay_ms: u64,
}

impl Default for AutoSaveConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            debounce_ms: 2000,
            max_delay_ms: 30_000,
        }
    }
}

impl AutoSaveConfig {
    /// Create a disabled auto-save config.
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Default::default()
        }
    }

    /// Whether a save should trigger given the elapsed times.
    pub fn should_save(&self, since_last_change_ms: u64, since_first_unsaved_ms: u64) -> bool {
        if !self.enabled {
            return false;
        }
        since_last_change_ms >= self.debounce_ms || since_first_unsaved_ms >= self.max_delay_ms
    }
}

/// Tracks unsaved changes for one open resume.
///
/// Backs both the debounced auto-save trigger and the "unsaved changes"
/// indicator in the editor chrome.
#[derive(Debug, Clone, Default)]
pub struct DirtyTracker {
    dirty: bool,
    /// When the most recent change was made.
    last_change: Option<Instant>,
    /// When the first change since the last successful save was made.
    first_unsaved_change: Option<Instant>,
    /// Whether a save is currently in flight.
    saving: bool,
}

impl DirtyTracker {
    /// A tracker with no unsaved changes.
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn is_dirty(&self) -> bool {
        self.dirty
    }

    #[inline]
    pub fn is_saving(&self) -> bool {
        self.saving
    }

    /// Record that the document changed.
    pub fn mark_dirty(&mut self) {
        let now = Instant::now();
        self.dirty = true;
        self.last_change = Some(now);
        if self.first_unsaved_change.is_none() {
            self.first_unsaved_change = Some(now);
        }
    }

    /// A save has started.
    pub fn start_save(&mut self) {
        self.saving = true;
    }

    /// A save completed and covered every change made so far.
    pub fn save_complete(&mut self) {
        self.dirty = false;
        self.saving = false;
        self.first_unsaved_change = None;
    }

    /// A save failed, or completed for an already-superseded state.
    /// The document stays dirty so a newer save follows.
    pub fn save_failed(&mut self) {
        self.saving = false;
    }

    /// Milliseconds since the most recent change.
    pub fn ms_since_last_change(&self) -> Option<u64> {
        self.last_change.map(|t| t.elapsed().as_millis() as u64)
    }

    /// Milliseconds since the first unsaved change.
    pub fn ms_since_first_unsaved(&self) -> Option<u64> {
        self.first_unsaved_change
            .map(|t| t.elapsed().as_millis() as u64)
    }

    /// Whether auto-save should trigger now under the given config.
    pub fn should_auto_save(&self, config: &AutoSaveConfig) -> bool {
        if !self.dirty || self.saving {
            return false;
        }
        match (self.ms_since_last_change(), self.ms_since_first_unsaved()) {
            (Some(since_last), Some(since_first)) => config.should_save(since_last, since_first),
            _ => false,
        }
    }
}
