//! Years of professional experience.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;

static STATED_YEARS: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)(\d+)[\s\-+]+years?\s+(?:of\s+)?experience").unwrap());

static YEAR_TOKEN: Lazy<Regex> = Lazy::new(|| Regex::new(r"\b(?:19|20)\d{2}\b").unwrap());

/// Stated years of experience, or the span between the earliest and latest
/// year mentioned when nothing is stated.
pub fn extract_years_of_experience(text: &str) -> Option<u32> {
    stated_years(text).or_else(|| year_span(text))
}

fn stated_years(text: &str) -> Option<u32> {
    STATED_YEARS
        .captures_iter(text)
        .filter_map(|caps| caps[1].parse::<u32>().ok())
        .max()
}

fn year_span(text: &str) -> Option<u32> {
    let years: BTreeSet<u32> = YEAR_TOKEN
        .find_iter(text)
        .filter_map(|m| m.as_str().parse().ok())
        .collect();
    if years.len() < 2 {
        return None;
    }
    let first = years.iter().next()?;
    let last = years.iter().next_back()?;
    Some(last - first)
}
