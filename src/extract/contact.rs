//! Identity and contact fields: name, email, phone, location, profile links.

use once_cell::sync::Lazy;
use regex::Regex;

use crate::model::ProfileLinks;

static EMAIL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b[A-Za-z0-9._%+-]+@[A-Za-z0-9.-]+\.[A-Za-z]{2,}\b").unwrap());

/// Embedded file names look like addresses ("logo@2x.png").
const IMAGE_SUFFIXES: &[&str] = &[".png", ".jpg", ".jpeg", ".gif", ".svg", ".webp"];

/// Regional phone formats in priority order.
static PHONE_PATTERNS: Lazy<Vec<Regex>> = Lazy::new(|| {
    [
        r"[\+]?91[-\s]?[6-9]\d{9}",
        r"[6-9]\d{9}",
        r"\(\d{3}\)[-\s]?\d{3}[-\s]?\d{4}",
        r"\d{3}[-\s]\d{3}[-\s]\d{4}",
        r"\+\d{1,3}[-\s]?\d{3}[-\s]?\d{3}[-\s]?\d{4}",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
});

static PROPER_NAME: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^[A-Z][a-z]+(\s[A-Z][a-z.]+)+$").unwrap());

const NAME_SCAN_LINES: usize = 5;
const NAME_BOILERPLATE: &[&str] = &["resume", "curriculum vitae", "cv", "page", "contact"];

const CITIES: &[&str] = &[
    "Mumbai",
    "Delhi",
    "Bangalore",
    "Bengaluru",
    "Hyderabad",
    "Chennai",
    "Kolkata",
    "Pune",
    "Ahmedabad",
    "Jaipur",
    "Surat",
    "Lucknow",
    "Kanpur",
    "Nagpur",
    "Indore",
    "Thane",
    "Bhopal",
    "Visakhapatnam",
    "Patna",
    "Vadodara",
    "Ghaziabad",
    "Ludhiana",
    "Agra",
    "Nashik",
    "Noida",
    "Gurugram",
    "Gurgaon",
];

struct CityPattern {
    name: &'static str,
    word: Regex,
    with_region: Regex,
}

static CITY_PATTERNS: Lazy<Vec<CityPattern>> = Lazy::new(|| {
    CITIES
        .iter()
        .map(|&name| CityPattern {
            name,
            word: Regex::new(&format!(r"(?i)\b{}\b", name)).unwrap(),
            // Region must follow on the same line and start with a capital.
            with_region: Regex::new(&format!(r"(?i:\b{})[,\t ]+[A-Z][a-zA-Z \t]*", name))
                .unwrap(),
        })
        .collect()
});

static LINKEDIN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)linkedin\.com/in/[\w-]+").unwrap());
static GITHUB: Lazy<Regex> = Lazy::new(|| Regex::new(r"(?i)github\.com/[\w-]+").unwrap());
static WEB_URL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)https?://(?:www\.)?[\w\.-]+\.\w+/?[\w\.-]*").unwrap());

/// First email address in `text` that is not an image file name.
pub fn extract_email(text: &str) -> Option<String> {
    EMAIL
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|candidate| {
            let lower = candidate.to_lowercase();
            !IMAGE_SUFFIXES.iter().any(|suffix| lower.ends_with(suffix))
        })
        .map(str::to_string)
}

/// First phone number of the highest-priority format present in `text`.
pub fn extract_phone(text: &str) -> Option<String> {
    PHONE_PATTERNS
        .iter()
        .find_map(|pattern| pattern.find(text))
        .map(|m| m.as_str().to_string())
}

/// Candidate name from the first lines of the document.
pub fn extract_name(text: &str) -> Option<String> {
    text.trim()
        .lines()
        .take(NAME_SCAN_LINES)
        .map(str::trim)
        .filter(|line| {
            let lower = line.to_lowercase();
            !NAME_BOILERPLATE.iter().any(|token| lower.contains(token))
        })
        .find(|line| is_proper_name(line))
        .map(str::to_string)
}

fn is_proper_name(line: &str) -> bool {
    let words = line.split_whitespace().count();
    (2..=4).contains(&words)
        && line.chars().next().is_some_and(char::is_uppercase)
        && PROPER_NAME.is_match(line)
}

/// First known city in `text`, with the region that follows it when present.
pub fn extract_location(text: &str) -> Option<String> {
    let city = CITY_PATTERNS.iter().find(|city| city.word.is_match(text))?;
    match city.with_region.find(text) {
        Some(m) => Some(m.as_str().trim().to_string()),
        None => Some(city.name.to_string()),
    }
}

/// LinkedIn, GitHub and portfolio links found in `text`.
pub fn extract_urls(text: &str) -> ProfileLinks {
    let linkedin = LINKEDIN
        .find(text)
        .map(|m| format!("https://{}", m.as_str()));
    let github = GITHUB.find(text).map(|m| format!("https://{}", m.as_str()));
    let portfolio = WEB_URL
        .find_iter(text)
        .map(|m| m.as_str())
        .find(|url| {
            let lower = url.to_lowercase();
            !lower.contains("linkedin.com") && !lower.contains("github.com")
        })
        .map(str::to_string);

    ProfileLinks {
        linkedin,
        github,
        portfolio,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const HEADER: &str =
        "John Smith\nSoftware Engineer\njohn.smith@email.com | +91 9876543210\nSkills: Python, React, AWS";

    #[test]
    fn test_email() {
        assert_eq!(extract_email(HEADER).as_deref(), Some("john.smith@email.com"));
        assert_eq!(extract_email("no address here"), None);
    }

    #[test]
    fn test_email_skips_image_names() {
        let text = "banner@2x.PNG\ncontact: jane_doe+jobs@mail.example.org";
        assert_eq!(
            extract_email(text).as_deref(),
            Some("jane_doe+jobs@mail.example.org")
        );
        assert_eq!(extract_email("icon@3x.svg"), None);
    }

    #[test]
    fn test_phone_indian_with_prefix() {
        assert_eq!(extract_phone(HEADER).as_deref(), Some("+91 9876543210"));
        assert_eq!(extract_phone("Call 9123456780").as_deref(), Some("9123456780"));
    }

    #[test]
    fn test_phone_priority() {
        // the Indian format wins even when a US number comes first
        let text = "Office (555) 123-4567, mobile 8765432109";
        assert_eq!(extract_phone(text).as_deref(), Some("8765432109"));

        assert_eq!(
            extract_phone("Tel: (555) 123-4567").as_deref(),
            Some("(555) 123-4567")
        );
        assert_eq!(
            extract_phone("Tel: 555-123-4567").as_deref(),
            Some("555-123-4567")
        );
        assert_eq!(extract_phone("no digits"), None);
    }

    #[test]
    fn test_name() {
        assert_eq!(extract_name(HEADER).as_deref(), Some("John Smith"));
        assert_eq!(
            extract_name("  \nRESUME\nMary Jane Watson\n").as_deref(),
            Some("Mary Jane Watson")
        );
        assert_eq!(extract_name("Dr. A. P. J. Kalam").as_deref(), None);
    }

    #[test]
    fn test_name_only_first_five_lines() {
        let text = "a\nb\nc\nd\ne\nJohn Smith";
        assert_eq!(extract_name(text), None);
    }

    #[test]
    fn test_name_rejects_single_word_and_lowercase() {
        assert_eq!(extract_name("Jane\njane doe\nJANE DOE"), None);
    }

    #[test]
    fn test_location_with_region() {
        let text = "Jane Doe\nBangalore, Karnataka\njane@example.com";
        assert_eq!(
            extract_location(text).as_deref(),
            Some("Bangalore, Karnataka")
        );
    }

    #[test]
    fn test_location_region_on_next_line_is_not_captured() {
        assert_eq!(extract_location("Pune\nMaharashtra").as_deref(), Some("Pune"));
        assert_eq!(
            extract_location("Chennai,\nTamil Nadu").as_deref(),
            Some("Chennai")
        );
    }

    #[test]
    fn test_location_bare_city() {
        assert_eq!(
            extract_location("based in pune.").as_deref(),
            Some("Pune")
        );
        assert_eq!(extract_location("Agrawal Industries"), None);
        assert_eq!(extract_location("San Francisco, CA"), None);
    }

    #[test]
    fn test_location_list_order() {
        // Mumbai precedes Delhi in the city list
        let text = "Delhi office, later Mumbai";
        assert_eq!(extract_location(text).as_deref(), Some("Mumbai"));
    }

    #[test]
    fn test_urls() {
        let text = "linkedin.com/in/jane-doe | github.com/janedoe | https://janedoe.dev/blog";
        let links = extract_urls(text);
        assert_eq!(
            links.linkedin.as_deref(),
            Some("https://linkedin.com/in/jane-doe")
        );
        assert_eq!(links.github.as_deref(), Some("https://github.com/janedoe"));
        assert_eq!(links.portfolio.as_deref(), Some("https://janedoe.dev/blog"));
    }

    #[test]
    fn test_portfolio_excludes_profile_hosts() {
        let text = "https://www.linkedin.com/in/jane https://github.com/jane";
        let links = extract_urls(text);
        assert!(links.linkedin.is_some());
        assert!(links.github.is_some());
        assert_eq!(links.portfolio, None);
        assert!(extract_urls("nothing").is_empty());
    }
}
