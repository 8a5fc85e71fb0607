//! Section ordering and visibility.
//!
//! The order is the single source of truth for which sections are visible:
//! a section renders if and only if its key appears in the order. Attaching
//! and detaching sections never touches the document payloads, so detached
//! data survives and reappears when the section is re-attached.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::section::SectionKey;

/// Order validation error.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum OrderError {
    /// The same section appears more than once.
    #[error("section '{0}' appears more than once in the order")]
    DuplicateSection(SectionKey),
}

/// One entry in the section order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SectionEntry {
    pub key: SectionKey,
    /// Display title; user-editable, seeded from [`SectionKey::default_title`].
    pub title: String,
}

impl SectionEntry {
    pub fn new(key: SectionKey) -> Self {
        Self {
            key,
            title: key.default_title().to_string(),
        }
    }
}

/// The ordered sequence of attached sections.
///
/// Invariant: every key is unique within the sequence. All constructors and
/// mutators uphold this; [`SectionOrder::validate`] re-checks it for orders
/// deserialized from untrusted data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionOrder {
    entries: Vec<SectionEntry>,
}

impl Default for SectionOrder {
    fn default() -> Self {
        Self::default_order()
    }
}

impl SectionOrder {
    /// An order with no sections attached.
    pub fn empty() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// The default new-resume order: personal info, work experience,
    /// education, and skills attached; everything else detached.
    pub fn default_order() -> Self {
        Self {
            entries: [
                SectionKey::PersonalInfo,
                SectionKey::WorkExperience,
                SectionKey::Education,
                SectionKey::Skills,
            ]
            .into_iter()
            .map(SectionEntry::new)
            .collect(),
        }
    }

    /// Build an order from entries, rejecting duplicates.
    pub fn from_entries(entries: Vec<SectionEntry>) -> Result<Self, OrderError> {
        let order = Self { entries };
        order.validate()?;
        Ok(order)
    }

    /// Re-check the uniqueness invariant.
    pub fn validate(&self) -> Result<(), OrderError> {
        for (i, entry) in self.entries.iter().enumerate() {
            if self.entries[..i].iter().any(|e| e.key == entry.key) {
                return Err(OrderError::DuplicateSection(entry.key));
            }
        }
        Ok(())
    }

    pub fn entries(&self) -> &[SectionEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Whether the section is attached — this *is* section visibility.
    pub fn contains(&self, key: SectionKey) -> bool {
        self.entries.iter().any(|e| e.key == key)
    }

    /// Position of the section in the order, if attached.
    pub fn position(&self, key: SectionKey) -> Option<usize> {
        self.entries.iter().position(|e| e.key == key)
    }

    /// Attach a section at the end of the order. No-op if already attached.
    /// Returns whether the order changed.
    pub fn attach(&mut self, key: SectionKey) -> bool {
        if self.contains(key) {
            return false;
        }
        self.entries.push(SectionEntry::new(key));
        true
    }

    /// Detach a section. Returns whether the order changed.
    pub fn detach(&mut self, key: SectionKey) -> bool {
        let before = self.entries.len();
        self.entries.retain(|e| e.key != key);
        self.entries.len() != before
    }

    /// Move an attached section to `index` (clamped to the end).
    /// Returns whether the order changed.
    pub fn move_section(&mut self, key: SectionKey, index: usize) -> bool {
        let Some(from) = self.position(key) else {
            return false;
        };
        let to = index.min(self.entries.len() - 1);
        if from == to {
            return false;
        }
        let entry = self.entries.remove(from);
        self.entries.insert(to, entry);
        true
    }

    /// Rename an attached section's display title.
    /// Returns whether the order changed.
    pub fn set_title(&mut self, key: SectionKey, title: impl Into<String>) -> bool {
        let Some(entry) = self.entries.iter_mut().find(|e| e.key == key) else {
            return false;
        };
        let title = title.into();
        if entry.title == title {
            return false;
        }
        entry.title = title;
        true
    }
}
