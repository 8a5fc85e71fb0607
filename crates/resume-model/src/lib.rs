//! Document model for Resume Studio.
//!
//! This crate provides the typed representation of a resume document:
//!
//! - [`SectionKey`]: the closed set of section identifiers
//! - Section payload records ([`PersonalInfo`], [`WorkExperience`], ...)
//! - [`ResumeDocument`]: the full document, one payload slot per section
//! - [`SectionOrder`]: which sections are attached and in what order
//! - [`DocumentSettings`]: document-level presentation settings
//! - [`ResumeSnapshot`]: a deep, independent capture of all of the above
//!
//! # Design
//!
//! Every payload field is individually optional: partial, draft-quality
//! data is always a valid document. Section visibility has a single source
//! of truth — membership in the [`SectionOrder`]. There is no separate
//! `visible` flag to drift out of sync with the order.

pub mod document;
pub mod order;
pub mod payload;
pub mod section;
pub mod settings;
pub mod snapshot;

pub use document::ResumeDocument;
pub use order::{OrderError, SectionEntry, SectionOrder};
pub use payload::{
    Achievement, Award, Certification, Education, Goals, Language, PersonalInfo, Project,
    Publication, Reference, SectionPayload, Skill, SocialProfile, VoluntaryWork, WorkExperience,
};
pub use section::SectionKey;
pub use settings::DocumentSettings;
pub use snapshot::ResumeSnapshot;
