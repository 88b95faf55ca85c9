//! Education section: degree, institution, field of study, year.

use once_cell::sync::Lazy;
use regex::Regex;

use super::section::{scan, Entries, SectionHandler, SectionKeywords, SectionLine};
use crate::model::Education;

const SECTION: SectionKeywords = SectionKeywords {
    start: &["education", "academic", "qualification", "degree"],
    stop: &[
        "experience",
        "work history",
        "projects",
        "skills",
        "certifications",
    ],
};

/// Recognized degrees, tried in order; the first match on a line wins.
static DEGREES: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"\b(B\.?Tech|Bachelor of Technology)\b",
        r"\b(B\.?E\.?|Bachelor of Engineering)\b",
        r"\b(M\.?Tech|Master of Technology)\b",
        r"\b(M\.?E\.?|Master of Engineering)\b",
        r"\b(B\.?Sc\.?|Bachelor of Science)\b",
        r"\b(M\.?Sc\.?|Master of Science)\b",
        r"\b(B\.?A\.?|Bachelor of Arts)\b",
        r"\b(M\.?A\.?|Master of Arts)\b",
        r"\b(MBA|Master of Business Administration)\b",
        r"\b(BBA|Bachelor of Business Administration)\b",
        r"\b(Ph\.?D\.?|Doctorate)\b",
        r"\b(B\.?Com\.?|Bachelor of Commerce)\b",
        r"\b(M\.?Com\.?|Master of Commerce)\b",
    ]
    .iter()
    .map(|p| Regex::new(&format!("(?i){}", p)).unwrap())
    .collect()
});

static FIELD: Lazy<Regex> = Lazy::new(|| Regex::new(r"\bin\s+([A-Z][a-zA-Z\s&]+)").unwrap());

static YEAR: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

/// Three or more capitalized words, allowing lowercase connectors between
/// them ("Institute of Technology").
static INSTITUTION: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"[A-Z][A-Za-z&.'-]*(?:\s+(?:(?:of|and|for|the|&)\s+)?[A-Z][A-Za-z&.'-]*){2,}")
        .unwrap()
});

struct EducationSection;

impl SectionHandler for EducationSection {
    type Entry = Education;

    fn keywords(&self) -> SectionKeywords {
        SECTION
    }

    fn on_line(&self, line: SectionLine<'_>, entries: &mut Entries<Education>) {
        if let Some(degree) = DEGREES.iter().find_map(|re| re.find(line.text)) {
            let field = FIELD
                .captures(line.text)
                .map(|caps| caps[1].trim().to_string())
                .unwrap_or_default();
            entries.begin(Education {
                degree: degree.as_str().to_string(),
                field,
                ..Default::default()
            });
        }

        let Some(entry) = entries.pending_mut() else {
            return;
        };

        if let Some(year) = YEAR.find(line.text) {
            entry.year = year.as_str().to_string();
        }

        if entry.institution.is_empty() {
            if let Some(institution) = INSTITUTION
                .find_iter(line.text)
                .map(|m| m.as_str())
                .find(|name| !name.contains(entry.degree.as_str()))
            {
                entry.institution = institution.to_string();
            }
        }
    }
}

/// Education entries in document order.
pub fn extract_education(text: &str) -> Vec<Education> {
    scan(text, &EducationSection)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_degree_line() {
        let text = "Education\nB.Tech in Computer Science, ABC Institute of Technology, 2020";
        let entries = extract_education(text);
        assert_eq!(
            entries,
            vec![Education {
                degree: "B.Tech".to_string(),
                institution: "ABC Institute of Technology".to_string(),
                field: "Computer Science".to_string(),
                year: "2020".to_string(),
            }]
        );
    }

    #[test]
    fn test_details_on_following_lines() {
        let text = "\
EDUCATION
Master of Science in Data Science
Delhi Technological University
2019 - 2021
Bachelor of Commerce
Shri Ram College Commerce
2016
Experience
Data Analyst at Acme";
        let entries = extract_education(text);
        assert_eq!(entries.len(), 2);

        assert_eq!(entries[0].degree, "Master of Science");
        assert_eq!(entries[0].field, "Data Science");
        assert_eq!(entries[0].institution, "Delhi Technological University");
        assert_eq!(entries[0].year, "2019");

        assert_eq!(entries[1].degree, "Bachelor of Commerce");
        assert_eq!(entries[1].institution, "Shri Ram College Commerce");
        assert_eq!(entries[1].year, "2016");
        assert_eq!(entries[1].field, "");
    }

    #[test]
    fn test_stop_keyword_commits_pending_entry() {
        let text = "Academic Background\nMBA 2018\nSkills\nB.Tech 2014";
        let entries = extract_education(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "MBA");
        assert_eq!(entries[0].year, "2018");
    }

    #[test]
    fn test_lines_before_first_degree_are_ignored() {
        let text = "Education\nGraduated with honours 2012\nPh.D 2015";
        let entries = extract_education(text);
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "Ph.D");
        assert_eq!(entries[0].year, "2015");
    }

    #[test]
    fn test_start_keyword_line_inside_section_is_read() {
        // "degree" opens the section, but inside it the line is an entry
        let entries = extract_education("Education\nBachelor of Science degree in Physics, 2017");
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].degree, "Bachelor of Science");
        assert_eq!(entries[0].field, "Physics");
        assert_eq!(entries[0].year, "2017");
    }

    #[test]
    fn test_no_section() {
        assert!(extract_education("B.Tech 2020").is_empty());
        assert!(extract_education("").is_empty());
    }
}
