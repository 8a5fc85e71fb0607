//! The history manager.

use std::cell::{Cell, RefCell};
use std::time::Instant;

use resume_model::ResumeSnapshot;

use crate::config::HistoryConfig;

/// The snapshot stacks. `current` always mirrors the store's live state;
/// `past` and `future` hold the states reachable by undo/redo.
struct Stacks {
    past: Vec<ResumeSnapshot>,
    current: ResumeSnapshot,
    future: Vec<ResumeSnapshot>,
    /// When the most recent edit was recorded (coalescing window anchor).
    last_record: Option<Instant>,
    /// Cleared after a replay or reset so coalescing never merges across an
    /// undo/redo boundary.
    coalesce_armed: bool,
}

/// Linear undo/redo over deep-copied document snapshots.
///
/// See the crate docs for the replay-guard contract. All methods take
/// `&self` so one instance can be shared (via `Rc`) between the store
/// subscription and the editor commands on a single thread.
pub struct HistoryManager {
    stacks: RefCell<Stacks>,
    replaying: Cell<bool>,
    config: HistoryConfig,
}

impl HistoryManager {
    /// Start a history whose baseline is the given (pre-edit) snapshot.
    pub fn new(baseline: ResumeSnapshot) -> Self {
        Self::with_config(baseline, HistoryConfig::default())
    }

    pub fn with_config(baseline: ResumeSnapshot, config: HistoryConfig) -> Self {
        Self {
            stacks: RefCell::new(Stacks {
                past: Vec::new(),
                current: baseline,
                future: Vec::new(),
                last_record: None,
                coalesce_armed: false,
            }),
            replaying: Cell::new(false),
            config,
        }
    }

    /// Whether an undo step is available.
    pub fn can_undo(&self) -> bool {
        !self.stacks.borrow().past.is_empty()
    }

    /// Whether a redo step is available.
    pub fn can_redo(&self) -> bool {
        !self.stacks.borrow().future.is_empty()
    }

    /// Number of undo steps available.
    pub fn depth(&self) -> usize {
        self.stacks.borrow().past.len()
    }

    /// Number of redo steps available.
    pub fn future_len(&self) -> usize {
        self.stacks.borrow().future.len()
    }

    /// The snapshot the manager believes the store currently holds.
    pub fn current(&self) -> ResumeSnapshot {
        self.stacks.borrow().current.clone()
    }

    /// Whether a replay (undo/redo apply) is currently in progress.
    pub fn is_replaying(&self) -> bool {
        self.replaying.get()
    }

    /// Record a new snapshot as the current state.
    ///
    /// The previous current moves onto `past` and `future` is cleared (a new
    /// edit collapses the redo branch). No-ops while a replay is in
    /// progress, and when the snapshot equals the current state — the store
    /// notifies once per real mutation, so neither case represents an edit.
    pub fn save_state(&self, snapshot: ResumeSnapshot) {
        if self.replaying.get() {
            tracing::trace!("replay in progress, not recording");
            return;
        }

        let mut stacks = self.stacks.borrow_mut();
        if snapshot == stacks.current {
            return;
        }

        let now = Instant::now();
        let coalesce = self.config.coalesce_window.is_some_and(|window| {
            stacks.coalesce_armed
                && stacks
                    .last_record
                    .is_some_and(|at| now.duration_since(at) <= window)
        });

        if coalesce {
            // Burst continuation: fold into the current entry.
            stacks.current = snapshot;
        } else {
            let displaced = std::mem::replace(&mut stacks.current, snapshot);
            stacks.past.push(displaced);
            let capacity = self.config.capacity;
            if stacks.past.len() > capacity {
                let excess = stacks.past.len() - capacity;
                stacks.past.drain(..excess);
            }
        }

        stacks.future.clear();
        stacks.last_record = Some(now);
        stacks.coalesce_armed = true;
        tracing::debug!(
            depth = stacks.past.len(),
            coalesced = coalesce,
            "edit recorded"
        );
    }

    /// Undo one step, replaying the restored snapshot through `apply`.
    ///
    /// Returns `Ok(false)` (leaving everything untouched) when there is
    /// nothing to undo. If `apply` fails the stacks are restored to their
    /// pre-attempt shape and the error is propagated; the replay guard is
    /// released on every exit path.
    pub fn undo<E>(
        &self,
        apply: impl FnOnce(&ResumeSnapshot) -> Result<(), E>,
    ) -> Result<bool, E> {
        let restored = {
            let mut stacks = self.stacks.borrow_mut();
            let Some(snapshot) = stacks.past.pop() else {
                return Ok(false);
            };
            let displaced = std::mem::replace(&mut stacks.current, snapshot.clone());
            stacks.future.push(displaced);
            snapshot
            // Borrow dropped here: `apply` triggers store notifications that
            // re-enter save_state, which must be free to borrow (and refuse).
        };

        let outcome = {
            let _guard = ReplayGuard::engage(&self.replaying);
            apply(&restored)
        };

        let mut stacks = self.stacks.borrow_mut();
        match outcome {
            Ok(()) => {
                stacks.coalesce_armed = false;
                tracing::debug!(depth = stacks.past.len(), "undo applied");
                Ok(true)
            }
            Err(e) => {
                if let Some(displaced) = stacks.future.pop() {
                    let snapshot = std::mem::replace(&mut stacks.current, displaced);
                    stacks.past.push(snapshot);
                }
                tracing::warn!("undo apply failed, history restored");
                Err(e)
            }
        }
    }

    /// Redo one step. Symmetric to [`HistoryManager::undo`] over `future`.
    pub fn redo<E>(
        &self,
        apply: impl FnOnce(&ResumeSnapshot) -> Result<(), E>,
    ) -> Result<bool, E> {
        let restored = {
            let mut stacks = self.stacks.borrow_mut();
            let Some(snapshot) = stacks.future.pop() else {
                return Ok(false);
            };
            let displaced = std::mem::replace(&mut stacks.current, snapshot.clone());
            stacks.past.push(displaced);
            snapshot
        };

        let outcome = {
            let _guard = ReplayGuard::engage(&self.replaying);
            apply(&restored)
        };

        let mut stacks = self.stacks.borrow_mut();
        match outcome {
            Ok(()) => {
                stacks.coalesce_armed = false;
                tracing::debug!(depth = stacks.past.len(), "redo applied");
                Ok(true)
            }
            Err(e) => {
                if let Some(displaced) = stacks.past.pop() {
                    let snapshot = std::mem::replace(&mut stacks.current, displaced);
                    stacks.future.push(snapshot);
                }
                tracing::warn!("redo apply failed, history restored");
                Err(e)
            }
        }
    }

    /// Discard all history and re-baseline on the given snapshot (used when
    /// a different resume is loaded into the same session).
    pub fn reset(&self, baseline: ResumeSnapshot) {
        let mut stacks = self.stacks.borrow_mut();
        stacks.past.clear();
        stacks.future.clear();
        stacks.current = baseline;
        stacks.last_record = None;
        stacks.coalesce_armed = false;
    }
}

/// Sets the replay flag for the lifetime of the value. Dropping releases it
/// unconditionally, so the flag cannot leak past a failed or panicking
/// apply function.
struct ReplayGuard<'a> {
    flag: &'a Cell<bool>,
}

impl<'a> ReplayGuard<'a> {
    fn engage(flag: &'a Cell<bool>) -> Self {
        flag.set(true);
        Self { flag }
    }
}

impl Drop for ReplayGuard<'_> {
    fn drop(&mut self) {
        self.flag.set(false);
    }
}
