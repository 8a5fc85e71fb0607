//! The resume document.

use serde::{Deserialize, Serialize};

use crate::payload::{
    Achievement, Award, Certification, Education, Goals, Language, PersonalInfo, Project,
    Publication, Reference, SectionPayload, Skill, SocialProfile, VoluntaryWork, WorkExperience,
};
use crate::section::SectionKey;

/// A full resume document: one payload slot per section key.
///
/// Payloads exist for every section whether or not the section is attached
/// to the order; detaching a section hides it without discarding its data.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ResumeDocument {
    pub personal_info: PersonalInfo,
    pub work_experience: Vec<WorkExperience>,
    pub education: Vec<Education>,
    pub skills: Vec<Skill>,
    pub achievements: Vec<Achievement>,
    pub awards: Vec<Award>,
    pub certifications: Vec<Certification>,
    pub goals: Goals,
    pub references: Vec<Reference>,
    pub social_media: Vec<SocialProfile>,
    pub voluntary_work: Vec<VoluntaryWork>,
    pub languages: Vec<Language>,
    pub projects: Vec<Project>,
    pub publications: Vec<Publication>,
}

impl ResumeDocument {
    /// Read one section as a tagged payload (cloned out of the document).
    pub fn section(&self, key: SectionKey) -> SectionPayload {
        match key {
            SectionKey::PersonalInfo => SectionPayload::PersonalInfo(self.personal_info.clone()),
            SectionKey::WorkExperience => {
                SectionPayload::WorkExperience(self.work_experience.clone())
            }
            SectionKey::Education => SectionPayload::Education(self.education.clone()),
            SectionKey::Skills => SectionPayload::Skills(self.skills.clone()),
            SectionKey::Achievements => SectionPayload::Achievements(self.achievements.clone()),
            SectionKey::Awards => SectionPayload::Awards(self.awards.clone()),
            SectionKey::Certifications => {
                SectionPayload::Certifications(self.certifications.clone())
            }
            SectionKey::Goals => SectionPayload::Goals(self.goals.clone()),
            SectionKey::References => SectionPayload::References(self.references.clone()),
            SectionKey::SocialMedia => SectionPayload::SocialMedia(self.social_media.clone()),
            SectionKey::VoluntaryWork => {
                SectionPayload::VoluntaryWork(self.voluntary_work.clone())
            }
            SectionKey::Languages => SectionPayload::Languages(self.languages.clone()),
            SectionKey::Projects => SectionPayload::Projects(self.projects.clone()),
            SectionKey::Publications => SectionPayload::Publications(self.publications.clone()),
        }
    }

    /// Replace one section's payload. The target slot comes from the
    /// payload's own tag.
    pub fn apply_section(&mut self, payload: SectionPayload) {
        match payload {
            SectionPayload::PersonalInfo(v) => self.personal_info = v,
            SectionPayload::WorkExperience(v) => self.work_experience = v,
            SectionPayload::Education(v) => self.education = v,
            SectionPayload::Skills(v) => self.skills = v,
            SectionPayload::Achievements(v) => self.achievements = v,
            SectionPayload::Awards(v) => self.awards = v,
            SectionPayload::Certifications(v) => self.certifications = v,
            SectionPayload::Goals(v) => self.goals = v,
            SectionPayload::References(v) => self.references = v,
            SectionPayload::SocialMedia(v) => self.social_media = v,
            SectionPayload::VoluntaryWork(v) => self.voluntary_work = v,
            SectionPayload::Languages(v) => self.languages = v,
            SectionPayload::Projects(v) => self.projects = v,
            SectionPayload::Publications(v) => self.publications = v,
        }
    }
}
