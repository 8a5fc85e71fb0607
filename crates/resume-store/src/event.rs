//! Store change notifications.

use resume_model::{ResumeSnapshot, SectionKey};

/// What part of the store a mutation touched.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreChange {
    /// One section's payload was replaced.
    Section(SectionKey),
    /// The section order (attachment, position, or titles) changed.
    Order,
    /// Document-level settings changed.
    Settings,
    /// The entire state was swapped atomically.
    ReplaceAll,
}

/// A change notification delivered to subscribers.
///
/// The snapshot is borrowed for the duration of the callback; subscribers
/// that retain state (the history manager, persistence) must clone it.
#[derive(Debug)]
pub struct StoreEvent<'a> {
    pub change: StoreChange,
    pub snapshot: &'a ResumeSnapshot,
}
