//! Heuristic field extraction from layout-less resume text.
//!
//! Every extractor is a pure function of the text. Contact fields are
//! pattern matches over the whole document; education, experience and
//! certifications go through the line-oriented [`section`] scanner.

pub mod certifications;
pub mod contact;
pub mod education;
pub mod engine;
pub mod experience;
pub mod section;
pub mod skills;
pub mod tenure;

pub use certifications::extract_certifications;
pub use contact::{extract_email, extract_location, extract_name, extract_phone, extract_urls};
pub use education::extract_education;
pub use engine::ResumeExtractor;
pub use experience::extract_experience;
pub use skills::{extract_skills, SkillMatcher};
pub use tenure::extract_years_of_experience;
