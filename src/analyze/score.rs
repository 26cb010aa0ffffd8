//! Weighted heading scoring (the default strategy).

use regex::Regex;

use super::HeadingCandidate;
use crate::options::{ExtractOptions, ScoreWeights};
use crate::parser::{TextLine, TextSpan};

/// Fixed baseline for the position sub-score. Left alignment turned out
/// not to be discriminative for the targeted document styles, so the
/// weight is currently spent on a constant.
const POSITION_BASELINE: f32 = 0.7;

/// Scores candidate lines against the document's typography.
///
/// Five sub-scores in [0, 1] (relative font size, boldness, position,
/// textual pattern, length) are combined by the configured weights;
/// a line becomes a heading candidate when the weighted sum reaches the
/// configured minimum.
pub struct WeightedScorer {
    weights: ScoreWeights,
    min_score: f32,
    min_length: usize,
    max_length: usize,
    median_size: f32,
    patterns: Vec<Regex>,
}

impl WeightedScorer {
    /// Create a scorer for a document with the given median span font size.
    pub fn new(options: &ExtractOptions, median_size: f32) -> Self {
        Self {
            weights: options.weights,
            min_score: options.min_heading_score,
            min_length: options.min_heading_length,
            max_length: options.max_heading_length,
            // Guard against degenerate documents
            median_size: if median_size > 0.0 { median_size } else { 12.0 },
            patterns: heading_patterns(),
        }
    }

    /// Score a line's heading likelihood, in [0, 1].
    pub fn score(&self, line: &TextLine) -> f32 {
        let size_score = (line.font_size / self.median_size).min(2.0) / 2.0;
        let bold_score = if line.bold { 1.0 } else { 0.0 };
        let pattern_score = if self.patterns.iter().any(|p| p.is_match(&line.text)) {
            1.0
        } else {
            0.0
        };
        let chars = line.text.chars().count();
        let length_score = if (self.min_length..=self.max_length).contains(&chars) {
            1.0
        } else {
            0.0
        };

        let total = size_score * self.weights.size
            + bold_score * self.weights.bold
            + POSITION_BASELINE * self.weights.position
            + pattern_score * self.weights.pattern
            + length_score * self.weights.length;

        total.min(1.0)
    }

    /// Classify a line, producing a candidate when it scores at or
    /// above the minimum. Levels are assigned later by font-size
    /// clustering.
    pub fn classify(&self, line: &TextLine) -> Option<HeadingCandidate> {
        let score = self.score(line);
        if score < self.min_score {
            return None;
        }
        Some(HeadingCandidate {
            text: line.text.clone(),
            page: line.page,
            font_size: line.font_size,
            score,
            level: None,
        })
    }
}

/// Textual patterns that mark a line as heading-shaped.
fn heading_patterns() -> Vec<Regex> {
    [
        r"^\d+\.\s+",          // "1. Introduction"
        r"^\d+\.\d+\s+",       // "1.1 Background"
        r"^\d+\.\d+\.\d+\s+",  // "1.1.1 Details"
        r"^[A-Z][A-Z\s]+$",    // ALL CAPS lines
        r"(?i)^(Chapter|Section|Part)\s+\d+",
    ]
    .iter()
    .map(|p| Regex::new(p).unwrap())
    .collect()
}

/// Median of all span font sizes in the document: the "body text"
/// baseline headings are judged against.
pub fn median_font_size(spans: &[TextSpan]) -> f32 {
    if spans.is_empty() {
        return 12.0;
    }
    let mut sizes: Vec<f32> = spans.iter().map(|s| s.font_size).collect();
    sizes.sort_by(|a, b| a.partial_cmp(b).unwrap_or(std::cmp::Ordering::Equal));

    let mid = sizes.len() / 2;
    if sizes.len() % 2 == 1 {
        sizes[mid]
    } else {
        (sizes[mid - 1] + sizes[mid]) / 2.0
    }
}
