//! Certifications section.

use super::section::{scan, Entries, SectionHandler, SectionKeywords, SectionLine};
use crate::model::Certification;

const SECTION: SectionKeywords = SectionKeywords {
    start: &["certification", "certificate", "certified", "license"],
    stop: &["experience", "education", "skills", "projects"],
};

/// Well-known certification programs.
const PROGRAMS: &[&str] = &[
    "AWS Certified",
    "Azure",
    "Google Cloud",
    "PMP",
    "CISSP",
    "CompTIA",
    "Scrum Master",
    "Six Sigma",
    "ITIL",
    "Oracle Certified",
];

/// Shorter lines are taken to be noise.
const MIN_GENERIC_LEN: usize = 5;

struct CertificationSection;

impl SectionHandler for CertificationSection {
    type Entry = Certification;

    fn keywords(&self) -> SectionKeywords {
        SECTION
    }

    fn on_line(&self, line: SectionLine<'_>, entries: &mut Entries<Certification>) {
        let known = PROGRAMS
            .iter()
            .find(|program| line.lower.contains(&program.to_lowercase()));

        match known {
            Some(program) => entries.push(Certification {
                name: line.text.to_string(),
                issuer: program.split_whitespace().next().map(str::to_string),
            }),
            None if line.text.chars().count() > MIN_GENERIC_LEN => entries.push(Certification {
                name: line.text.to_string(),
                issuer: None,
            }),
            None => {}
        }
    }
}

/// Certifications in document order.
pub fn extract_certifications(text: &str) -> Vec<Certification> {
    scan(text, &CertificationSection)
}
