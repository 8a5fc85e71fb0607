//! Resume file types.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use resume_model::ResumeSnapshot;

/// File identification magic: "RSM" + format byte.
pub const MAGIC_BYTES: [u8; 4] = *b"RSM\x01";

/// Current on-disk schema version.
pub const CURRENT_SCHEMA_VERSION: u32 = 1;

/// Record-store metadata for one saved resume.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeMetadata {
    pub id: Uuid,
    /// Display name in the resume list ("Backend CV", "Academic CV", ...).
    pub name: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ResumeMetadata {
    pub fn new(name: impl Into<String>) -> Self {
        let now = Utc::now();
        Self {
            id: Uuid::new_v4(),
            name: name.into(),
            created_at: now,
            updated_at: now,
        }
    }
}

/// Everything that goes into one `.resume` file.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResumeFile {
    pub metadata: ResumeMetadata,
    pub snapshot: ResumeSnapshot,
}

impl ResumeFile {
    pub fn new(name: impl Into<String>, snapshot: ResumeSnapshot) -> Self {
        Self {
            metadata: ResumeMetadata::new(name),
            snapshot,
        }
    }

    /// Bump the updated-at timestamp. Called on every save.
    pub fn touch(&mut self) {
        self.metadata.updated_at = Utc::now();
    }
}
