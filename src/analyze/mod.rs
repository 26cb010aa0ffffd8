//! Heading detection heuristics.

mod levels;
mod noise;
mod pattern;
mod score;
mod title;

pub use levels::assign_levels;
pub use noise::NoiseFilter;
pub use pattern::{PatternClassifier, KNOWN_HEADINGS};
pub use score::{median_font_size, WeightedScorer};
pub use title::extract_title;

use crate::model::HeadingLevel;
use crate::options::{ExtractOptions, Strategy};
use crate::parser::TextLine;

/// A line that passed the noise filter and was accepted as a heading.
#[derive(Debug, Clone)]
pub struct HeadingCandidate {
    /// Line text (not yet normalized)
    pub text: String,
    /// 1-based page number
    pub page: u32,
    /// Representative font size of the line
    pub font_size: f32,
    /// Heading likelihood in [0, 1]; 1.0 for pattern matches
    pub score: f32,
    /// Level when the strategy assigns one directly; `None` until
    /// font-size clustering otherwise
    pub level: Option<HeadingLevel>,
}

/// Heading classifier, dispatching to the configured strategy.
pub enum Classifier {
    /// Multi-criteria weighted scoring
    Weighted(WeightedScorer),
    /// Regex pattern + lexicon rules
    Pattern(PatternClassifier),
}

impl Classifier {
    /// Build the classifier selected by the options. The median span
    /// font size is only used by the weighted strategy.
    pub fn from_options(options: &ExtractOptions, median_size: f32) -> Self {
        match options.strategy {
            Strategy::Weighted => Classifier::Weighted(WeightedScorer::new(options, median_size)),
            Strategy::Pattern => Classifier::Pattern(PatternClassifier::new()),
        }
    }

    /// Classify one line, producing a candidate if it is heading-like.
    pub fn classify(&self, line: &TextLine) -> Option<HeadingCandidate> {
        match self {
            Classifier::Weighted(scorer) => scorer.classify(line),
            Classifier::Pattern(patterns) => patterns.classify(line),
        }
    }
}
