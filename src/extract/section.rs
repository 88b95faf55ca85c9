//! Line-oriented scanner isolating one resume section.
//!
//! The scanner starts in [`ScanState::SeekingSection`] and enters
//! [`ScanState::InSection`] on the first line containing one of the
//! section's start keywords; that heading line is consumed. While in the
//! section, a line containing any stop keyword ends the scan, and every
//! other non-blank line is handed to a [`SectionHandler`]. Whatever entry
//! is still pending when the section ends, or the text runs out, is
//! committed exactly once.

/// Keyword sets delimiting a section. Keywords are lowercase and matched
/// as substrings of the lowercased line.
#[derive(Debug, Clone, Copy)]
pub struct SectionKeywords {
    pub start: &'static [&'static str],
    pub stop: &'static [&'static str],
}

impl SectionKeywords {
    fn starts(&self, lower: &str) -> bool {
        contains_any(lower, self.start)
    }

    fn stops(&self, lower: &str) -> bool {
        contains_any(lower, self.stop)
    }
}

fn contains_any(lower: &str, keywords: &[&str]) -> bool {
    keywords.iter().any(|keyword| lower.contains(keyword))
}

/// Scanner states.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ScanState {
    SeekingSection,
    InSection,
}

/// A line inside the section, trimmed, with its lowercase form.
#[derive(Debug, Clone, Copy)]
pub struct SectionLine<'a> {
    pub text: &'a str,
    pub lower: &'a str,
}

/// Entries collected from a section, with at most one pending entry.
#[derive(Debug)]
pub struct Entries<E> {
    done: Vec<E>,
    pending: Option<E>,
}

impl<E> Entries<E> {
    fn new() -> Self {
        Self {
            done: Vec::new(),
            pending: None,
        }
    }

    /// Start a new entry, committing the pending one first.
    pub fn begin(&mut self, entry: E) {
        self.commit();
        self.pending = Some(entry);
    }

    /// The entry currently being filled in.
    pub fn pending_mut(&mut self) -> Option<&mut E> {
        self.pending.as_mut()
    }

    /// Record a complete entry immediately.
    pub fn push(&mut self, entry: E) {
        self.done.push(entry);
    }

    fn commit(&mut self) {
        if let Some(entry) = self.pending.take() {
            self.done.push(entry);
        }
    }

    fn finish(mut self) -> Vec<E> {
        self.commit();
        self.done
    }
}

/// Per-section entry heuristics.
pub trait SectionHandler {
    type Entry;

    /// Keywords delimiting the section.
    fn keywords(&self) -> SectionKeywords;

    /// Handle one non-blank line inside the section.
    fn on_line(&self, line: SectionLine<'_>, entries: &mut Entries<Self::Entry>);
}

/// Run `handler` over the section of `text` it describes.
pub fn scan<H: SectionHandler>(text: &str, handler: &H) -> Vec<H::Entry> {
    let keywords = handler.keywords();
    let mut state = ScanState::SeekingSection;
    let mut entries = Entries::new();

    for raw in text.lines() {
        let line = raw.trim();
        if line.is_empty() {
            continue;
        }
        let lower = line.to_lowercase();

        match state {
            ScanState::SeekingSection => {
                if keywords.starts(&lower) {
                    state = ScanState::InSection;
                }
            }
            ScanState::InSection => {
                if keywords.stops(&lower) {
                    break;
                }
                handler.on_line(
                    SectionLine {
                        text: line,
                        lower: &lower,
                    },
                    &mut entries,
                );
            }
        }
    }

    entries.finish()
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Collects each "* item" line as a new entry and appends other lines to it.
    struct Bullets;

    impl SectionHandler for Bullets {
        type Entry = Vec<String>;

        fn keywords(&self) -> SectionKeywords {
            SectionKeywords {
                start: &["projects"],
                stop: &["education", "skills"],
            }
        }

        fn on_line(&self, line: SectionLine<'_>, entries: &mut Entries<Vec<String>>) {
            if let Some(item) = line.text.strip_prefix("* ") {
                entries.begin(vec![item.to_string()]);
            } else if let Some(entry) = entries.pending_mut() {
                entry.push(line.text.to_string());
            }
        }
    }

    #[test]
    fn test_scan_stops_at_next_section_and_commits_pending() {
        let text = "Jane Doe\nPROJECTS\n* Compiler\n  written in Rust\n\n* Parser\nSkills\n* Ignored";
        let entries = scan(text, &Bullets);
        assert_eq!(
            entries,
            vec![
                vec!["Compiler".to_string(), "written in Rust".to_string()],
                vec!["Parser".to_string()],
            ]
        );
    }

    #[test]
    fn test_scan_flushes_at_end_of_text() {
        let entries = scan("Projects\n* Search engine", &Bullets);
        assert_eq!(entries, vec![vec!["Search engine".to_string()]]);
    }

    #[test]
    fn test_lines_before_any_entry_are_handler_defined() {
        let entries = scan("Projects\nstray line\n* Kernel", &Bullets);
        assert_eq!(entries, vec![vec!["Kernel".to_string()]]);
    }

    #[test]
    fn test_no_section_yields_nothing() {
        assert!(scan("Jane Doe\n* Compiler", &Bullets).is_empty());
        assert!(scan("", &Bullets).is_empty());
    }
}
