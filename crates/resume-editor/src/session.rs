//! The editor session.

use std::cell::RefCell;
use std::rc::Rc;

use resume_history::{HistoryConfig, HistoryManager};
use resume_model::{ResumeSnapshot, SectionKey};
use resume_persistence::{AutoSaveConfig, SaveRequest, SaveScheduler};
use resume_store::{DocumentStore, Result as StoreResult};

/// One editing session over one resume document.
///
/// Owns the store and shares the history manager and save scheduler with
/// the store subscription installed at construction. Single-threaded, like
/// the UI event loop it models: all methods run on discrete event callbacks.
pub struct EditorSession {
    store: DocumentStore,
    history: Rc<HistoryManager>,
    scheduler: Rc<RefCell<SaveScheduler>>,
}

impl Default for EditorSession {
    fn default() -> Self {
        Self::new()
    }
}

impl EditorSession {
    /// A session over an empty document with default configs.
    pub fn new() -> Self {
        Self::with_configs(
            ResumeSnapshot::default(),
            HistoryConfig::default(),
            AutoSaveConfig::default(),
        )
    }

    /// A session seeded from a snapshot (e.g. a loaded resume).
    pub fn from_snapshot(snapshot: &ResumeSnapshot) -> Self {
        Self::with_configs(
            snapshot.clone(),
            HistoryConfig::default(),
            AutoSaveConfig::default(),
        )
    }

    pub fn with_configs(
        snapshot: ResumeSnapshot,
        history_config: HistoryConfig,
        autosave_config: AutoSaveConfig,
    ) -> Self {
        let mut store = DocumentStore::with_state(
            snapshot.document,
            snapshot.order,
            snapshot.settings,
        );
        let history = Rc::new(HistoryManager::with_config(store.snapshot(), history_config));
        let scheduler = Rc::new(RefCell::new(SaveScheduler::new(autosave_config)));

        // The one store subscription the session installs: record history
        // and mark the document dirty on every change. During undo/redo
        // replays the history refuses to record (its guard is engaged) but
        // the dirty mark still lands, so replays get persisted too.
        let recorder = Rc::clone(&history);
        let dirty = Rc::clone(&scheduler);
        store.subscribe(move |event| {
            recorder.save_state(event.snapshot.clone());
            dirty.borrow_mut().mark_changed();
        });

        Self {
            store,
            history,
            scheduler,
        }
    }

    /// The store, for reads and for mounting forms.
    pub fn store(&self) -> &DocumentStore {
        &self.store
    }

    pub fn store_mut(&mut self) -> &mut DocumentStore {
        &mut self.store
    }

    /// Run an edit against the store.
    pub fn edit(&mut self, f: impl FnOnce(&mut DocumentStore)) {
        f(&mut self.store);
    }

    pub fn snapshot(&self) -> ResumeSnapshot {
        self.store.snapshot()
    }

    pub fn can_undo(&self) -> bool {
        self.history.can_undo()
    }

    pub fn can_redo(&self) -> bool {
        self.history.can_redo()
    }

    /// Undo one step. Returns whether a step was applied; safe to call when
    /// nothing is undoable (the UI disabled-state can lag by a tick).
    pub fn undo(&mut self) -> StoreResult<bool> {
        let store = &mut self.store;
        self.history.undo(|snapshot| store.replace_with(snapshot))
    }

    /// Redo one step. Symmetric to [`EditorSession::undo`].
    pub fn redo(&mut self) -> StoreResult<bool> {
        let store = &mut self.store;
        self.history.redo(|snapshot| store.replace_with(snapshot))
    }

    /// Attach a section (make it visible at the end of the order).
    pub fn attach_section(&mut self, key: SectionKey) {
        self.store.attach_section(key);
    }

    /// Detach a section (hide it; data is kept and the change is undoable).
    pub fn detach_section(&mut self, key: SectionKey) {
        self.store.detach_section(key);
    }

    /// Move a section to a new position in the order.
    pub fn move_section(&mut self, key: SectionKey, index: usize) {
        self.store.move_section(key, index);
    }

    /// Whether there are unsaved changes.
    pub fn is_dirty(&self) -> bool {
        self.scheduler.borrow().is_dirty()
    }

    /// Poll the auto-save timer. When a save is due, returns the stamped
    /// request together with the snapshot to persist (taken now, so it is
    /// the latest known state).
    pub fn poll_auto_save(&mut self) -> Option<(SaveRequest, ResumeSnapshot)> {
        let request = self.scheduler.borrow_mut().poll()?;
        Some((request, self.store.snapshot()))
    }

    /// Explicit save action, bypassing the debounce.
    pub fn save_now(&mut self) -> Option<(SaveRequest, ResumeSnapshot)> {
        let request = self.scheduler.borrow_mut().request_now()?;
        Some((request, self.store.snapshot()))
    }

    /// Report the outcome of a save handed out by
    /// [`EditorSession::poll_auto_save`] or [`EditorSession::save_now`].
    pub fn save_succeeded(&mut self, request: SaveRequest) {
        self.scheduler.borrow_mut().save_succeeded(request.version);
    }

    pub fn save_failed(&mut self, request: SaveRequest) {
        self.scheduler.borrow_mut().save_failed(request.version);
    }

    /// Open a different resume into this session: replaces the store state,
    /// discards history (a loaded document is a fresh baseline, not an
    /// undoable edit), and clears save tracking.
    pub fn open(&mut self, snapshot: &ResumeSnapshot) -> StoreResult<()> {
        self.store.replace_with(snapshot)?;
        self.history.reset(self.store.snapshot());
        self.scheduler.borrow_mut().reset();
        tracing::debug!("session re-baselined on opened resume");
        Ok(())
    }
}
