//! Whole-word, case-insensitive skill matching.

use once_cell::sync::Lazy;
use regex::{RegexSet, RegexSetBuilder};

use crate::error::{Error, Result};
use crate::taxonomy::SkillTaxonomy;

const SET_SIZE_LIMIT: usize = 64 * (1 << 20);

static BUILTIN: Lazy<SkillMatcher> =
    Lazy::new(|| SkillMatcher::new(&SkillTaxonomy::builtin()).unwrap());

/// Matches every taxonomy entry against a text in a single pass.
///
/// Each skill becomes one `\b<skill>\b` pattern of a [`RegexSet`], so the
/// text is scanned once no matter how large the taxonomy is.
#[derive(Debug, Clone)]
pub struct SkillMatcher {
    skills: Vec<String>,
    set: RegexSet,
}

impl SkillMatcher {
    /// Compile a matcher for `taxonomy`.
    pub fn new(taxonomy: &SkillTaxonomy) -> Result<Self> {
        let skills = taxonomy.skills().to_vec();
        let patterns = skills
            .iter()
            .map(|skill| format!(r"\b{}\b", regex::escape(skill)));
        let set = RegexSetBuilder::new(patterns)
            .case_insensitive(true)
            .size_limit(SET_SIZE_LIMIT)
            .build()
            .map_err(|e| Error::Taxonomy(e.to_string()))?;
        Ok(Self { skills, set })
    }

    /// Matcher over the built-in catalog.
    pub fn builtin() -> Self {
        BUILTIN.clone()
    }

    /// Number of skills the matcher knows.
    pub fn len(&self) -> usize {
        self.skills.len()
    }

    /// Whether the matcher has no skills.
    pub fn is_empty(&self) -> bool {
        self.skills.is_empty()
    }

    /// Skills found in `text`, sorted and deduplicated.
    pub fn find(&self, text: &str) -> Vec<String> {
        if self.skills.is_empty() || text.is_empty() {
            return Vec::new();
        }
        // The taxonomy is already sorted and unique, and the set reports
        // matches in pattern order.
        self.set
            .matches(text)
            .into_iter()
            .map(|index| self.skills[index].clone())
            .collect()
    }
}

/// Skills from `taxonomy` found in `text`.
pub fn extract_skills(text: &str, taxonomy: &SkillTaxonomy) -> Result<Vec<String>> {
    Ok(SkillMatcher::new(taxonomy)?.find(text))
}
