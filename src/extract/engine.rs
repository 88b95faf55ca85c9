//! Field extraction engine composing every extractor into one record.

use super::certifications::extract_certifications;
use super::contact::{extract_email, extract_location, extract_name, extract_phone, extract_urls};
use super::education::extract_education;
use super::experience::extract_experience;
use super::skills::SkillMatcher;
use super::tenure::extract_years_of_experience;
use crate::error::Result;
use crate::model::StructuredResume;
use crate::taxonomy::SkillTaxonomy;

/// Turns acquired resume text into a [`StructuredResume`].
///
/// The extractor holds only the compiled skill matcher, which is read-only,
/// so one instance can serve any number of threads.
///
/// # Example
///
/// ```
/// use unresume::ResumeExtractor;
///
/// let extractor = ResumeExtractor::default();
/// let resume = extractor.extract_all("Jane Doe\njane@example.com\nRust, Docker");
/// assert_eq!(resume.name.as_deref(), Some("Jane Doe"));
/// assert_eq!(resume.skills, vec!["docker", "rust"]);
/// ```
#[derive(Debug, Clone)]
pub struct ResumeExtractor {
    skills: SkillMatcher,
}

impl ResumeExtractor {
    /// Create an extractor matching skills from `taxonomy`.
    pub fn new(taxonomy: &SkillTaxonomy) -> Result<Self> {
        Ok(Self {
            skills: SkillMatcher::new(taxonomy)?,
        })
    }

    /// Create an extractor over the built-in skill catalog.
    pub fn with_builtin_taxonomy() -> Self {
        Self {
            skills: SkillMatcher::builtin(),
        }
    }

    /// Skills found in `text`, sorted and deduplicated.
    pub fn extract_skills(&self, text: &str) -> Vec<String> {
        self.skills.find(text)
    }

    /// Run every field extractor over `text`.
    pub fn extract_all(&self, text: &str) -> StructuredResume {
        let resume = StructuredResume {
            name: extract_name(text),
            email: extract_email(text),
            phone: extract_phone(text),
            location: extract_location(text),
            skills: self.extract_skills(text),
            education: extract_education(text),
            experience: extract_experience(text),
            certifications: extract_certifications(text),
            urls: extract_urls(text),
            years_of_experience: extract_years_of_experience(text),
        };
        log::debug!(
            "Extracted {} skills, {} education, {} experience, {} certification entries",
            resume.skills.len(),
            resume.education.len(),
            resume.experience.len(),
            resume.certifications.len()
        );
        resume
    }
}

impl Default for ResumeExtractor {
    fn default() -> Self {
        Self::with_builtin_taxonomy()
    }
}
