//! Header/footer/boilerplate noise filtering.

use std::collections::{HashMap, HashSet};

use regex::Regex;

use super::pattern::KNOWN_HEADINGS;
use crate::parser::TextLine;

/// Lines repeating on at least this many distinct pages are treated as
/// running headers/footers.
const REPEAT_PAGE_THRESHOLD: usize = 3;

/// Short-fragment cutoffs for stray page numbers, bullets, field labels.
const MAX_SHORT_TOKENS: usize = 2;
const SHORT_LINE_CHARS: usize = 15;

/// Classifies lines as header/footer/boilerplate noise, excluded from
/// heading consideration.
///
/// Built per document: besides fixed boilerplate patterns it records
/// which exact line texts recur across pages, so document-specific
/// running headers are suppressed too.
pub struct NoiseFilter {
    patterns: Vec<Regex>,
    numbered: Regex,
    repeated: HashSet<String>,
}

impl NoiseFilter {
    /// Build a filter for one document's assembled lines.
    pub fn for_document(lines: &[TextLine]) -> Self {
        let mut pages_by_text: HashMap<&str, HashSet<u32>> = HashMap::new();
        for line in lines {
            pages_by_text
                .entry(line.text.as_str())
                .or_default()
                .insert(line.page);
        }
        let repeated = pages_by_text
            .into_iter()
            .filter(|(_, pages)| pages.len() >= REPEAT_PAGE_THRESHOLD)
            .map(|(text, _)| text.to_string())
            .collect();

        Self {
            patterns: boilerplate_patterns(),
            numbered: Regex::new(r"^\d+(\.\d+)*[.)]?\s+\S").unwrap(),
            repeated,
        }
    }

    /// A filter with no document context (boilerplate patterns only).
    pub fn empty() -> Self {
        Self {
            patterns: boilerplate_patterns(),
            numbered: Regex::new(r"^\d+(\.\d+)*[.)]?\s+\S").unwrap(),
            repeated: HashSet::new(),
        }
    }

    /// Decide whether a line is noise.
    pub fn is_noise(&self, line: &TextLine) -> bool {
        let text = line.text.trim();
        if text.is_empty() {
            return true;
        }
        if self.repeated.contains(text) {
            return true;
        }
        if self.patterns.iter().any(|p| p.is_match(text)) {
            return true;
        }

        // Short-fragment rule: stray page numbers, bullets, single
        // words. Numbered section headings and lexicon entries are
        // exempt, short as they may be ("1.1 Background", "References").
        if self.numbered.is_match(text) || KNOWN_HEADINGS.iter().any(|h| text.contains(h)) {
            return false;
        }
        text.split_whitespace().count() <= MAX_SHORT_TOKENS
            && text.chars().count() < SHORT_LINE_CHARS
    }
}

fn boilerplate_patterns() -> Vec<Regex> {
    [
        // Page-number footers: "Page 3", "Page 1 of 10", "3 / 10"
        r"(?i)^page\s+\d+(\s+of\s+\d+)?$",
        r"^\d+\s*/\s*\d+$",
        // Bare or dash-decorated page numbers: "12", "- 12 -"
        r"^[-–—]?\s*\d+\s*[-–—]?$",
        // Copyright lines
        r"(?i)^(copyright|©|\(c\))\s",
        r"(?i)all rights reserved",
        // Version strings: "Version 1.2", "v2.0.1"
        r"(?i)^(version|v\.?)\s*\d+(\.\d+)*$",
        // Short date strings: "21 May 2014", "May 21, 2014", "2014-05-21"
        r"(?i)^\d{1,2}\s+(january|february|march|april|may|june|july|august|september|october|november|december)\s+\d{4}$",
        r"(?i)^(january|february|march|april|may|june|july|august|september|october|november|december)\s+\d{1,2},?\s+\d{4}$",
        r"^\d{4}-\d{2}-\d{2}$",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::{assemble_lines, TextSpan};

    fn line(text: &str, page: u32) -> TextLine {
        let span = TextSpan::new(text.to_string(), 40.0, 700.0, 11.0, "Helvetica", page);
        assemble_lines(&[span]).remove(0)
    }

    #[test]
    fn test_page_footers_are_noise() {
        let filter = NoiseFilter::empty();
        assert!(filter.is_noise(&line("Page 1 of 10", 1)));
        assert!(filter.is_noise(&line("page 7", 7)));
        assert!(filter.is_noise(&line("- 12 -", 12)));
        assert!(filter.is_noise(&line("3 / 10", 3)));
    }

    #[test]
    fn test_copyright_and_version_are_noise() {
        let filter = NoiseFilter::empty();
        assert!(filter.is_noise(&line("Copyright 2014 International Board", 1)));
        assert!(filter.is_noise(&line("Version 1.2", 1)));
        assert!(filter.is_noise(&line("v2.0.1", 1)));
    }

    #[test]
    fn test_date_strings_are_noise() {
        let filter = NoiseFilter::empty();
        assert!(filter.is_noise(&line("21 May 2014", 1)));
        assert!(filter.is_noise(&line("May 21, 2014", 1)));
        assert!(filter.is_noise(&line("2014-05-21", 1)));
    }

    #[test]
    fn test_short_fragments_are_noise() {
        let filter = NoiseFilter::empty();
        assert!(filter.is_noise(&line("Name:", 1)));
        assert!(filter.is_noise(&line("ISTQB", 1)));
        assert!(filter.is_noise(&line("• item", 1)));
    }

    #[test]
    fn test_numbered_headings_exempt_from_short_rule() {
        let filter = NoiseFilter::empty();
        assert!(!filter.is_noise(&line("1.1 Background", 2)));
        assert!(!filter.is_noise(&line("2. Scope", 3)));
    }

    #[test]
    fn test_lexicon_entries_exempt_from_short_rule() {
        let filter = NoiseFilter::empty();
        assert!(!filter.is_noise(&line("References", 9)));
    }

    #[test]
    fn test_ordinary_prose_is_not_noise() {
        let filter = NoiseFilter::empty();
        assert!(!filter.is_noise(&line("The heuristics in this chapter", 2)));
    }

    #[test]
    fn test_running_header_detected_across_pages() {
        let mut lines: Vec<TextLine> = (1..=5)
            .map(|p| line("Foundation Level Syllabus", p))
            .collect();
        lines.push(line("Unique heading about testing", 2));

        let filter = NoiseFilter::for_document(&lines);
        assert!(filter.is_noise(&lines[0]));
        assert!(!filter.is_noise(&lines[5]));
    }

    #[test]
    fn test_two_page_repeat_is_kept() {
        let lines = vec![line("Revision History", 2), line("Revision History", 30)];
        let filter = NoiseFilter::for_document(&lines);
        assert!(!filter.is_noise(&lines[0]));
    }
}
