//! Persistent storage for Resume Studio documents.
//!
//! This crate provides the save side of an editing session: debounced
//! auto-save scheduling and `.resume` file I/O.
//!
//! # Features
//!
//! - **Atomic writes** (temp file + rename) so a crash never corrupts a file
//! - **Debounced auto-save** with a forced-save ceiling for long bursts
//! - **Version-stamped scheduling**: every edit bumps a monotonic version,
//!   every save request carries the version it captured, and a completion
//!   for a superseded version never clears the dirty state — persistence
//!   always converges on the latest known document, regardless of which
//!   save finishes first
//!
//! # File Format
//!
//! `.resume` files use a simple binary framing:
//!
//! ```text
//! +-------------------+
//! | Magic: "RSM\x01"  | 4 bytes - file identification
//! +-------------------+
//! | Version: 1        | 4 bytes - u32 little-endian schema version
//! +-------------------+
//! | JSON payload      | Variable - serde_json-encoded ResumeFile
//! +-------------------+
//! ```
//!
//! Auto-save is deliberately decoupled from undo/redo: an in-flight save
//! may legitimately persist a state that an undo has just superseded; the
//! version stamp guarantees a newer save follows it.

mod autosave;
mod error;
mod io;
mod scheduler;
mod types;

pub use autosave::{AutoSaveConfig, DirtyTracker};
pub use error::{PersistenceError, Result};
pub use io::{load_resume, load_resume_async, save_resume, save_resume_async};
pub use scheduler::{SaveRequest, SaveScheduler};
pub use types::{CURRENT_SCHEMA_VERSION, MAGIC_BYTES, ResumeFile, ResumeMetadata};
