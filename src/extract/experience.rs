//! Work history section: position, company, duration.

use once_cell::sync::Lazy;
use regex::Regex;

use super::section::{scan, Entries, SectionHandler, SectionKeywords, SectionLine};
use crate::model::Experience;

const SECTION: SectionKeywords = SectionKeywords {
    start: &[
        "experience",
        "work history",
        "employment",
        "professional background",
    ],
    stop: &[
        "education",
        "skills",
        "projects",
        "certifications",
        "achievements",
    ],
};

const POSITION_KEYWORDS: &[&str] = &[
    "engineer",
    "developer",
    "analyst",
    "manager",
    "intern",
    "consultant",
    "designer",
    "lead",
    "architect",
    "specialist",
];

const MONTH: &str = r"(?:Jan|Feb|Mar|Apr|May|Jun|Jul|Aug|Sep|Oct|Nov|Dec)[a-z]*\.?\s+";

/// "2019 - 2021", "Jan 2020 – Present", "Mar. 2018 to Dec 2019", or a bare
/// "Present"/"Current".
static DATE_RANGE: Lazy<Regex> = Lazy::new(|| {
    let range = format!(
        r"\b(?:{m})?\d{{4}}\s*(?:[-–—]|\bto\b)\s*(?:(?:{m})?\d{{4}}\b|Present\b|Current\b|Now\b)",
        m = MONTH
    );
    Regex::new(&format!(r"(?i){}|\bPresent\b|\bCurrent\b", range)).unwrap()
});

static COMPANY: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?:\bat|@)\s+([A-Z][a-zA-Z\s&.,]+)").unwrap());

struct ExperienceSection;

impl SectionHandler for ExperienceSection {
    type Entry = Experience;

    fn keywords(&self) -> SectionKeywords {
        SECTION
    }

    fn on_line(&self, line: SectionLine<'_>, entries: &mut Entries<Experience>) {
        if let Some(duration) = DATE_RANGE.find(line.text) {
            entries.begin(Experience {
                duration: duration.as_str().to_string(),
                ..Default::default()
            });
        }

        let Some(entry) = entries.pending_mut() else {
            return;
        };

        if entry.position.is_empty()
            && POSITION_KEYWORDS
                .iter()
                .any(|keyword| line.lower.contains(keyword))
        {
            entry.position = line.text.to_string();
        }

        if let Some(caps) = COMPANY.captures(line.text) {
            entry.company = caps[1].trim().trim_end_matches(',').trim_end().to_string();
        }
    }
}

/// Work history entries in document order.
pub fn extract_experience(text: &str) -> Vec<Experience> {
    scan(text, &ExperienceSection)
}
