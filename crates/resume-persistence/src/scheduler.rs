//! Version-stamped save scheduling.
//!
//! The scheduler sits between the editor (which reports "the document
//! changed") and whatever actually writes bytes (file, HTTP backend). It
//! owns the ordering problem: saves are asynchronous, an undo can supersede
//! a save that is still in flight, and a slow save must never overwrite a
//! later edit with an earlier one. Every change bumps a monotonic version;
//! a completion only counts as "everything saved" when its version is still
//! the latest.

use crate::autosave::{AutoSaveConfig, DirtyTracker};

/// A due save, stamped with the document version it should capture.
///
/// The caller takes the store snapshot at the moment it receives the
/// request, performs the save, and reports back with the same version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SaveRequest {
    pub version: u64,
}

/// Debounced, version-stamped save scheduler for one open resume.
#[derive(Debug)]
pub struct SaveScheduler {
    config: AutoSaveConfig,
    tracker: DirtyTracker,
    /// Monotonic document version; bumped on every change.
    version: u64,
    /// Version carried by the in-flight save, if any. One save at a time.
    in_flight: Option<u64>,
    /// Highest version known to be persisted.
    persisted: u64,
}

impl SaveScheduler {
    pub fn new(config: AutoSaveConfig) -> Self {
        Self {
            config,
            tracker: DirtyTracker::new(),
            version: 0,
            in_flight: None,
            persisted: 0,
        }
    }

    /// Report a document change.
    pub fn mark_changed(&mut self) {
        self.version += 1;
        self.tracker.mark_dirty();
    }

    pub fn is_dirty(&self) -> bool {
        self.tracker.is_dirty()
    }

    pub fn is_saving(&self) -> bool {
        self.in_flight.is_some()
    }

    /// Latest document version.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Highest version known to be persisted.
    pub fn persisted_version(&self) -> u64 {
        self.persisted
    }

    /// Ask whether a save is due under the debounce rules. At most one save
    /// is in flight at a time; a due save claims the current version.
    pub fn poll(&mut self) -> Option<SaveRequest> {
        if self.in_flight.is_some() || !self.config.enabled {
            return None;
        }
        if !self.tracker.should_auto_save(&self.config) {
            return None;
        }
        self.begin(self.version)
    }

    /// Request an immediate save (explicit "Save" action), bypassing the
    /// debounce. Returns `None` when clean or already saving.
    pub fn request_now(&mut self) -> Option<SaveRequest> {
        if self.in_flight.is_some() || !self.tracker.is_dirty() {
            return None;
        }
        self.begin(self.version)
    }

    fn begin(&mut self, version: u64) -> Option<SaveRequest> {
        self.tracker.start_save();
        self.in_flight = Some(version);
        tracing::debug!(version, "save scheduled");
        Some(SaveRequest { version })
    }

    /// Report a successful save of the given version.
    ///
    /// If edits arrived while the save was in flight, the completion is
    /// stale: the document stays dirty and the next [`SaveScheduler::poll`]
    /// schedules a save of the newer state. The persisted version only
    /// moves forward, so an out-of-order stale completion can never mask a
    /// newer persisted state.
    pub fn save_succeeded(&mut self, version: u64) {
        if self.in_flight == Some(version) {
            self.in_flight = None;
        }
        if version > self.persisted {
            self.persisted = version;
        }
        if version == self.version {
            self.tracker.save_complete();
            tracing::debug!(version, "save completed");
        } else {
            // Stale: keep dirty so the newer state gets saved.
            self.tracker.save_failed();
            tracing::debug!(
                version,
                latest = self.version,
                "stale save completed, resave pending"
            );
        }
    }

    /// Forget all change and save tracking (a different resume was opened
    /// into the same session).
    pub fn reset(&mut self) {
        self.tracker = DirtyTracker::new();
        self.version = 0;
        self.in_flight = None;
        self.persisted = 0;
    }

    /// Report a failed save attempt. The document stays dirty.
    pub fn save_failed(&mut self, version: u64) {
        if self.in_flight == Some(version) {
            self.in_flight = None;
        }
        self.tracker.save_failed();
        tracing::warn!(version, "save failed");
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn eager_config() -> AutoSaveConfig {
        // Zero debounce so polls are due immediately in tests.
        AutoSaveConfig {
            enabled: true,
            debounce_ms: 0,
            max_delay_ms: 0,
        }
    }

    #[test]
    fn clean_scheduler_has_nothing_to_save() {
        let mut scheduler = SaveScheduler::new(eager_config());
        assert_eq!(scheduler.poll(), None);
        assert_eq!(scheduler.request_now(), None);
    }

    #[test]
    fn change_then_poll_schedules_one_save() {
        let mut scheduler = SaveScheduler::new(eager_config());
        scheduler.mark_changed();

        let request = scheduler.poll().expect("save due");
        assert_eq!(request.version, 1);
        // Only one save in flight at a time.
        assert_eq!(scheduler.poll(), None);

        scheduler.save_succeeded(request.version);
        assert!(!scheduler.is_dirty());
        assert_eq!(scheduler.persisted_version(), 1);
    }

    #[test]
    fn stale_completion_keeps_document_dirty() {
        let mut scheduler = SaveScheduler::new(eager_config());
        scheduler.mark_changed();
        let first = scheduler.poll().expect("save due");

        // Edits arrive while the save is in flight.
        scheduler.mark_changed();
        scheduler.save_succeeded(first.version);

        // The stale completion recorded progress but did not clean the doc.
        assert_eq!(scheduler.persisted_version(), 1);
        assert!(scheduler.is_dirty());

        let second = scheduler.poll().expect("resave due");
        assert_eq!(second.version, 2);
        scheduler.save_succeeded(second.version);
        assert!(!scheduler.is_dirty());
        assert_eq!(scheduler.persisted_version(), 2);
    }

    #[test]
    fn persisted_version_is_monotonic() {
        let mut scheduler = SaveScheduler::new(eager_config());
        scheduler.mark_changed();
        scheduler.mark_changed();
        let request = scheduler.poll().expect("save due");
        scheduler.save_succeeded(request.version);

        // A late acknowledgment of an older version must not move it back.
        scheduler.save_succeeded(1);
        assert_eq!(scheduler.persisted_version(), 2);
    }

    #[test]
    fn failed_save_allows_retry() {
        let mut scheduler = SaveScheduler::new(eager_config());
        scheduler.mark_changed();
        let request = scheduler.poll().expect("save due");
        scheduler.save_failed(request.version);

        assert!(scheduler.is_dirty());
        let retry = scheduler.poll().expect("retry due");
        assert_eq!(retry.version, request.version);
    }

    #[test]
    fn request_now_bypasses_debounce() {
        let mut scheduler = SaveScheduler::new(AutoSaveConfig::default());
        scheduler.mark_changed();

        // Debounce (2s) has not elapsed, so poll is quiet...
        assert_eq!(scheduler.poll(), None);
        // ...but an explicit save goes through.
        let request = scheduler.request_now().expect("explicit save");
        assert_eq!(request.version, 1);
    }

    #[test]
    fn disabled_autosave_still_allows_explicit_save() {
        let mut scheduler = SaveScheduler::new(AutoSaveConfig::disabled());
        scheduler.mark_changed();
        assert_eq!(scheduler.poll(), None);
        assert!(scheduler.request_now().is_some());
    }
}
