//! Per-section views over the document.
//!
//! A lens names one section and knows how to read its payload out of a
//! snapshot and wrap it back into a tagged [`SectionPayload`]. Forms are
//! generic over a lens, so the binding logic exists once while each of the
//! thirty-odd section forms stays a thin, typed instantiation.

use resume_model::{
    Achievement, Award, Certification, Education, Goals, Language, PersonalInfo, Project,
    Publication, Reference, ResumeSnapshot, SectionKey, SectionPayload, Skill, SocialProfile,
    VoluntaryWork, WorkExperience,
};

/// A typed view of one section's payload.
///
/// `'static` because forms are shared with store subscriptions, which are
/// boxed for the life of the store.
pub trait SectionLens: 'static {
    /// The section this lens addresses.
    const KEY: SectionKey;

    /// The payload type held in the form draft.
    type Payload: Clone + PartialEq + Default + 'static;

    /// Read the section's payload out of a snapshot (deep copy).
    fn read(snapshot: &ResumeSnapshot) -> Self::Payload;

    /// Wrap a draft payload for [`resume_store::DocumentStore::update_section`].
    fn wrap(payload: Self::Payload) -> SectionPayload;
}

macro_rules! section_lens {
    ($(#[$doc:meta])* $name:ident, $key:ident, $payload:ty, $field:ident) => {
        $(#[$doc])*
        #[derive(Debug, Clone, Copy)]
        pub struct $name;

        impl SectionLens for $name {
            const KEY: SectionKey = SectionKey::$key;
            type Payload = $payload;

            fn read(snapshot: &ResumeSnapshot) -> Self::Payload {
                snapshot.document.$field.clone()
            }

            fn wrap(payload: Self::Payload) -> SectionPayload {
                SectionPayload::$key(payload)
            }
        }
    };
}

section_lens!(
    /// Lens over the single personal-info record.
    PersonalInfoLens, PersonalInfo, PersonalInfo, personal_info
);
section_lens!(WorkExperienceLens, WorkExperience, Vec<WorkExperience>, work_experience);
section_lens!(EducationLens, Education, Vec<Education>, education);
section_lens!(SkillsLens, Skills, Vec<Skill>, skills);
section_lens!(AchievementsLens, Achievements, Vec<Achievement>, achievements);
section_lens!(AwardsLens, Awards, Vec<Award>, awards);
section_lens!(CertificationsLens, Certifications, Vec<Certification>, certifications);
section_lens!(GoalsLens, Goals, Goals, goals);
section_lens!(ReferencesLens, References, Vec<Reference>, references);
section_lens!(SocialMediaLens, SocialMedia, Vec<SocialProfile>, social_media);
section_lens!(VoluntaryWorkLens, VoluntaryWork, Vec<VoluntaryWork>, voluntary_work);
section_lens!(LanguagesLens, Languages, Vec<Language>, languages);
section_lens!(ProjectsLens, Projects, Vec<Project>, projects);
section_lens!(PublicationsLens, Publications, Vec<Publication>, publications);

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lens_round_trips_payload() {
        let mut snapshot = ResumeSnapshot::default();
        snapshot.document.skills.push(Skill {
            name: Some("Rust".to_string()),
            level: Some(5),
            keywords: Vec::new(),
        });

        let read = SkillsLens::read(&snapshot);
        assert_eq!(read.len(), 1);
        assert_eq!(
            SkillsLens::wrap(read).key(),
            SectionKey::Skills
        );
    }
}
