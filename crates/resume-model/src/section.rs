//! Section identifiers.
//!
//! Sections form a fixed, closed set: every resume is composed from these
//! keys and no others. Using an enum (rather than free strings) makes
//! unknown keys unrepresentable, so order entries never need key
//! validation beyond uniqueness.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Identifier of one resume section.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SectionKey {
    /// Name, contact details, and summary. Always a single record.
    PersonalInfo,
    /// Employment history entries.
    WorkExperience,
    /// Degrees and schooling.
    Education,
    /// Skill entries with optional proficiency and keyword tags.
    Skills,
    Achievements,
    Awards,
    Certifications,
    /// Career goals. A single record.
    Goals,
    References,
    /// Social / online profiles.
    SocialMedia,
    VoluntaryWork,
    Languages,
    Projects,
    Publications,
}

impl SectionKey {
    /// All section keys, in the default render order.
    pub const ALL: [SectionKey; 14] = [
        SectionKey::PersonalInfo,
        SectionKey::WorkExperience,
        SectionKey::Education,
        SectionKey::Skills,
        SectionKey::Projects,
        SectionKey::Achievements,
        SectionKey::Awards,
        SectionKey::Certifications,
        SectionKey::Publications,
        SectionKey::VoluntaryWork,
        SectionKey::Languages,
        SectionKey::SocialMedia,
        SectionKey::Goals,
        SectionKey::References,
    ];

    /// Returns the canonical key string used in serialized documents.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionKey::PersonalInfo => "personal-info",
            SectionKey::WorkExperience => "work-experience",
            SectionKey::Education => "education",
            SectionKey::Skills => "skills",
            SectionKey::Achievements => "achievements",
            SectionKey::Awards => "awards",
            SectionKey::Certifications => "certifications",
            SectionKey::Goals => "goals",
            SectionKey::References => "references",
            SectionKey::SocialMedia => "social-media",
            SectionKey::VoluntaryWork => "voluntary-work",
            SectionKey::Languages => "languages",
            SectionKey::Projects => "projects",
            SectionKey::Publications => "publications",
        }
    }

    /// Returns the default human-readable section title.
    ///
    /// Order entries carry their own (user-editable) title; this is the
    /// seed value used when a section is first attached.
    pub fn default_title(&self) -> &'static str {
        match self {
            SectionKey::PersonalInfo => "Personal Information",
            SectionKey::WorkExperience => "Work Experience",
            SectionKey::Education => "Education",
            SectionKey::Skills => "Skills",
            SectionKey::Achievements => "Achievements",
            SectionKey::Awards => "Awards",
            SectionKey::Certifications => "Certifications",
            SectionKey::Goals => "Goals",
            SectionKey::References => "References",
            SectionKey::SocialMedia => "Social Media",
            SectionKey::VoluntaryWork => "Voluntary Work",
            SectionKey::Languages => "Languages",
            SectionKey::Projects => "Projects",
            SectionKey::Publications => "Publications",
        }
    }
}

impl fmt::Display for SectionKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for SectionKey {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|key| key.as_str() == s)
            .ok_or_else(|| format!("unknown section key: {s}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_through_str() {
        for key in SectionKey::ALL {
            assert_eq!(key.as_str().parse::<SectionKey>(), Ok(key));
        }
    }

    #[test]
    fn rejects_unknown_key() {
        assert!("hobbies".parse::<SectionKey>().is_err());
    }

    #[test]
    fn all_keys_are_distinct() {
        for (i, a) in SectionKey::ALL.iter().enumerate() {
            for b in &SectionKey::ALL[i + 1..] {
                assert_ne!(a, b);
            }
        }
    }
}
