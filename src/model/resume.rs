//! Structured resume record.

use serde::{Deserialize, Serialize};

/// Everything extracted from one resume.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StructuredResume {
    /// Candidate name
    pub name: Option<String>,

    /// Contact email
    pub email: Option<String>,

    /// Contact phone number, as written
    pub phone: Option<String>,

    /// City, optionally followed by state or country
    pub location: Option<String>,

    /// Taxonomy skills found in the text, sorted and deduplicated
    pub skills: Vec<String>,

    /// Education entries in document order
    pub education: Vec<Education>,

    /// Work history entries in document order
    pub experience: Vec<Experience>,

    /// Certifications in document order
    pub certifications: Vec<Certification>,

    /// Profile links
    pub urls: ProfileLinks,

    /// Stated or estimated years of experience
    pub years_of_experience: Option<u32>,
}

impl StructuredResume {
    /// Number of skills found.
    pub fn total_skills(&self) -> usize {
        self.skills.len()
    }
}

/// One education entry. Unknown fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Education {
    pub degree: String,
    pub institution: String,
    pub field: String,
    pub year: String,
}

/// One work history entry. Unknown fields are empty strings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Experience {
    pub position: String,
    pub company: String,
    pub duration: String,
}

/// One certification.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Certification {
    /// The certification line as written
    pub name: String,
    /// Issuing program, when the certification is a well-known one
    pub issuer: Option<String>,
}

/// Profile links. Only links that were found are serialized.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLinks {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub linkedin: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub github: Option<String>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<String>,
}

impl ProfileLinks {
    /// Whether no link was found.
    pub fn is_empty(&self) -> bool {
        self.linkedin.is_none() && self.github.is_none() && self.portfolio.is_none()
    }
}
