//! Parse report: the structured resume plus text statistics.

use serde::{Deserialize, Serialize};

use crate::acquire::{AcquiredText, TextSource};
use crate::error::Result;
use crate::model::StructuredResume;

use super::json::{to_json, JsonFormat};

/// Characters of text kept in [`ResumeReport::raw_text`].
pub const PREVIEW_CHARS: usize = 2000;

/// Everything produced for one parsed resume.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResumeReport {
    /// Extracted fields
    #[serde(flatten)]
    pub resume: StructuredResume,

    /// Number of skills found
    pub total_skills: usize,

    /// Leading part of the text, for previews
    pub raw_text: String,

    /// Complete acquired text
    pub full_text: String,

    /// Length of the text in characters
    pub text_length: usize,

    /// Number of whitespace-separated tokens
    pub word_count: usize,

    /// Where the text came from
    pub source: TextSource,

    /// Number of pages in the document
    pub page_count: u32,
}

impl ResumeReport {
    /// Combine acquired text with the fields extracted from it.
    pub fn new(acquired: AcquiredText, resume: StructuredResume) -> Self {
        let text = acquired.text;
        Self {
            total_skills: resume.total_skills(),
            resume,
            raw_text: text.chars().take(PREVIEW_CHARS).collect(),
            text_length: text.chars().count(),
            word_count: text.split_whitespace().count(),
            full_text: text,
            source: acquired.source,
            page_count: acquired.page_count,
        }
    }

    /// Serialize the report.
    pub fn to_json(&self, format: JsonFormat) -> Result<String> {
        to_json(self, format)
    }
}
