//! Form-store synchronization for Resume Studio.
//!
//! Every section form keeps a local draft of its section's payload — the
//! in-progress, per-keystroke state — and synchronizes it with the shared
//! [`resume_store::DocumentStore`] in both directions. Two feedback loops
//! have to be broken, and the draft is treated as a cache with explicit
//! invalidation flags rather than as directly mirrored state:
//!
//! 1. **Self-echo**: a form's own edit writes to the store, which notifies,
//!    which would re-seed the same form's draft mid-edit. A push flag is
//!    engaged around the write; [`SectionForm::handle_store_change`] ignores
//!    events while it is set.
//! 2. **External replacement**: when undo/redo (or a load) replaces the
//!    whole document, every form *must* re-seed from the restored snapshot.
//!    That re-seed runs under a syncing flag and always wins over a dirty
//!    draft — the external replacement is the authoritative truth.
//!
//! Per-field lifecycle: `Idle → Dirty → Idle` on user edits (the push to the
//! store completes synchronously), `Idle → Syncing → Idle` on external
//! replacement. The two never overlap within one tick.

mod form;
mod lens;

pub use form::{FormState, SectionForm};
pub use lens::{
    AchievementsLens, AwardsLens, CertificationsLens, EducationLens, GoalsLens, LanguagesLens,
    PersonalInfoLens, ProjectsLens, PublicationsLens, ReferencesLens, SectionLens, SkillsLens,
    SocialMediaLens, VoluntaryWorkLens, WorkExperienceLens,
};
