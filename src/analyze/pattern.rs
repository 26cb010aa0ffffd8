//! Pattern/lexicon heading classification (the alternate strategy).

use regex::Regex;

use super::HeadingCandidate;
use crate::model::HeadingLevel;
use crate::parser::TextLine;

/// Section names that are headings regardless of typography.
pub const KNOWN_HEADINGS: &[&str] = &[
    "Revision History",
    "Table of Contents",
    "Acknowledgements",
    "References",
];

/// Maximum accepted heading length in characters.
const MAX_LENGTH: usize = 200;

/// Classifies lines by explicit regex patterns and a known-heading
/// lexicon, assigning the level directly from the matching rule.
///
/// This strategy never emits H3; deeper numbering has no rule of its
/// own. Known asymmetry, kept deliberately.
pub struct PatternClassifier {
    numbered_h1: Regex,
    numbered_h2: Regex,
    title_case: Regex,
}

impl PatternClassifier {
    /// Create a classifier with its patterns compiled.
    pub fn new() -> Self {
        Self {
            numbered_h1: Regex::new(r"^\d+\.\s+").unwrap(),
            numbered_h2: Regex::new(r"^\d+\.\d+\s+").unwrap(),
            title_case: Regex::new(r"^[A-Z][a-z]+(\s+[A-Z][a-z]+)*\s*:?\s*$").unwrap(),
        }
    }

    /// Classify a line, producing a candidate with its level already
    /// assigned when a rule matches.
    pub fn classify(&self, line: &TextLine) -> Option<HeadingCandidate> {
        let text = line.text.trim();
        if text.chars().count() > MAX_LENGTH {
            return None;
        }

        let level = if self.numbered_h1.is_match(text)
            || KNOWN_HEADINGS.iter().any(|h| text.contains(h))
        {
            HeadingLevel::H1
        } else if self.numbered_h2.is_match(text) || self.title_case.is_match(text) {
            HeadingLevel::H2
        } else {
            return None;
        };

        Some(HeadingCandidate {
            text: text.to_string(),
            page: line.page,
            font_size: line.font_size,
            score: 1.0,
            level: Some(level),
        })
    }
}

impl Default for PatternClassifier {
    fn default() -> Self {
        Self::new()
    }
}
