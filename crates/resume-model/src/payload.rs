//! Section payload records.
//!
//! Every field is individually optional. A freshly attached section with no
//! data entered yet is a valid payload, and a half-filled entry is never an
//! error. Dates are free-form strings ("2021", "Mar 2021", "2021-03-01");
//! the model does not parse them.

use serde::{Deserialize, Serialize};

use crate::section::SectionKey;

/// Contact details and summary. Single record per document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PersonalInfo {
    pub full_name: Option<String>,
    pub job_title: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
    pub address: Option<String>,
    pub website: Option<String>,
    pub summary: Option<String>,
    pub photo_url: Option<String>,
}

/// One employment entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WorkExperience {
    pub company: Option<String>,
    pub position: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    /// Currently employed here; renderers show "Present" instead of an end date.
    pub current: bool,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Education {
    pub institution: Option<String>,
    pub degree: Option<String>,
    pub field_of_study: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub grade: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Skill {
    pub name: Option<String>,
    /// Proficiency from 1 to 5; `None` hides the level indicator.
    pub level: Option<u8>,
    pub keywords: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Achievement {
    pub title: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Award {
    pub title: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Certification {
    pub name: Option<String>,
    pub issuer: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
}

/// Career goals. Single record per document.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Goals {
    pub statement: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Reference {
    pub name: Option<String>,
    pub company: Option<String>,
    pub position: Option<String>,
    pub email: Option<String>,
    pub phone: Option<String>,
}

/// One social / online profile link.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SocialProfile {
    pub network: Option<String>,
    pub username: Option<String>,
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct VoluntaryWork {
    pub organization: Option<String>,
    pub role: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Language {
    pub name: Option<String>,
    pub proficiency: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Project {
    pub name: Option<String>,
    pub url: Option<String>,
    pub start_date: Option<String>,
    pub end_date: Option<String>,
    pub description: Option<String>,
    pub technologies: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Publication {
    pub title: Option<String>,
    pub publisher: Option<String>,
    pub date: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
}

/// The payload of exactly one section, tagged by its key.
///
/// `PersonalInfo` and `Goals` hold a single record; every other section is
/// an ordered list of records.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "section", content = "data", rename_all = "kebab-case")]
pub enum SectionPayload {
    PersonalInfo(PersonalInfo),
    WorkExperience(Vec<WorkExperience>),
    Education(Vec<Education>),
    Skills(Vec<Skill>),
    Achievements(Vec<Achievement>),
    Awards(Vec<Award>),
    Certifications(Vec<Certification>),
    Goals(Goals),
    References(Vec<Reference>),
    SocialMedia(Vec<SocialProfile>),
    VoluntaryWork(Vec<VoluntaryWork>),
    Languages(Vec<Language>),
    Projects(Vec<Project>),
    Publications(Vec<Publication>),
}

impl SectionPayload {
    /// The section this payload belongs to.
    pub fn key(&self) -> SectionKey {
        match self {
            SectionPayload::PersonalInfo(_) => SectionKey::PersonalInfo,
            SectionPayload::WorkExperience(_) => SectionKey::WorkExperience,
            SectionPayload::Education(_) => SectionKey::Education,
            SectionPayload::Skills(_) => SectionKey::Skills,
            SectionPayload::Achievements(_) => SectionKey::Achievements,
            SectionPayload::Awards(_) => SectionKey::Awards,
            SectionPayload::Certifications(_) => SectionKey::Certifications,
            SectionPayload::Goals(_) => SectionKey::Goals,
            SectionPayload::References(_) => SectionKey::References,
            SectionPayload::SocialMedia(_) => SectionKey::SocialMedia,
            SectionPayload::VoluntaryWork(_) => SectionKey::VoluntaryWork,
            SectionPayload::Languages(_) => SectionKey::Languages,
            SectionPayload::Projects(_) => SectionKey::Projects,
            SectionPayload::Publications(_) => SectionKey::Publications,
        }
    }

    /// An empty payload for the given section.
    pub fn empty(key: SectionKey) -> Self {
        match key {
            SectionKey::PersonalInfo => SectionPayload::PersonalInfo(PersonalInfo::default()),
            SectionKey::WorkExperience => SectionPayload::WorkExperience(Vec::new()),
            SectionKey::Education => SectionPayload::Education(Vec::new()),
            SectionKey::Skills => SectionPayload::Skills(Vec::new()),
            SectionKey::Achievements => SectionPayload::Achievements(Vec::new()),
            SectionKey::Awards => SectionPayload::Awards(Vec::new()),
            SectionKey::Certifications => SectionPayload::Certifications(Vec::new()),
            SectionKey::Goals => SectionPayload::Goals(Goals::default()),
            SectionKey::References => SectionPayload::References(Vec::new()),
            SectionKey::SocialMedia => SectionPayload::SocialMedia(Vec::new()),
            SectionKey::VoluntaryWork => SectionPayload::VoluntaryWork(Vec::new()),
            SectionKey::Languages => SectionPayload::Languages(Vec::new()),
            SectionKey::Projects => SectionPayload::Projects(Vec::new()),
            SectionKey::Publications => SectionPayload::Publications(Vec::new()),
        }
    }
}
