//! Linear undo/redo history for Resume Studio.
//!
//! [`HistoryManager`] observes the document store (via a subscription that
//! forwards every notification's snapshot to [`HistoryManager::save_state`])
//! and maintains two stacks of deep-copied snapshots: `past` (oldest to most
//! recent) and `future`. Undo and redo replay a stored snapshot through an
//! apply function — typically the store's `replace_all` — without re-entering
//! themselves.
//!
//! # The replay guard
//!
//! Store notifications fire synchronously inside the mutating call, so the
//! apply function of an undo triggers the very subscription that feeds
//! `save_state`. Without protection every undo would immediately re-record
//! the state it just restored, making redo unreachable. The manager engages
//! a replay flag for the synchronous extent of the apply function (released
//! by an RAII guard on every exit path, including unwinding) and
//! `save_state` refuses to record while it is set. The guard suppresses
//! *recording only* — subscriptions in general still fire during replay,
//! which is what lets forms re-seed from the restored values.
//!
//! # Sharing
//!
//! One manager instance is shared between the store subscription and the
//! undo/redo commands, on a single thread. All methods take `&self`; state
//! lives behind `RefCell`/`Cell`, and no borrow is held across the apply
//! function.

mod config;
mod manager;

pub use config::HistoryConfig;
pub use manager::HistoryManager;
