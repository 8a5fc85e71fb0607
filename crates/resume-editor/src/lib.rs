//! Editing session wiring for Resume Studio.
//!
//! [`EditorSession`] assembles one editing session the way the editor UI
//! mounts it: it owns the [`resume_store::DocumentStore`], subscribes to it
//! once, and forwards every notification's snapshot to the history manager
//! (which records it) and to the save scheduler (which marks the document
//! dirty). Undo and redo run the history with the store's `replace_all` as
//! the apply function; auto-save is polled on a timer by the host and runs
//! outside the undo/redo critical path.
//!
//! ```text
//! form edit ──> store ──notify──> history.save_state (records)
//!                   └───────────> scheduler.mark_changed (dirty)
//! undo ──> history ──apply──> store.replace_all ──notify──> forms re-seed
//!                                   └── save_state suppressed by the guard
//! ```

mod session;

pub use session::EditorSession;
