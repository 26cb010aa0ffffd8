//! Extraction options and configuration.
//!
//! All heuristic tuning lives in an explicit, immutable [`ExtractOptions`]
//! value handed to the extractor at construction time. There is no ambient
//! global configuration.

/// Which heading-detection strategy the extractor runs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    /// Multi-criteria weighted scoring against the document's median
    /// font size (the default).
    #[default]
    Weighted,
    /// Regex pattern + known-heading lexicon classification. Assigns
    /// levels directly from the matching rule and never emits H3.
    Pattern,
}

/// Weights for the sub-scores of the weighted strategy.
///
/// The defaults sum to 1.0; the final score is clamped to at most 1.0
/// either way.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScoreWeights {
    /// Font size relative to the document median
    pub size: f32,
    /// Bold formatting
    pub bold: f32,
    /// Position on the page (currently a constant baseline)
    pub position: f32,
    /// Textual pattern match (numbered sections, all caps, "Chapter N")
    pub pattern: f32,
    /// Text length within heading bounds
    pub length: f32,
}

impl Default for ScoreWeights {
    fn default() -> Self {
        Self {
            size: 0.35,
            bold: 0.25,
            position: 0.15,
            pattern: 0.15,
            length: 0.10,
        }
    }
}

/// Options for outline extraction.
#[derive(Debug, Clone)]
pub struct ExtractOptions {
    /// Heading-detection strategy
    pub strategy: Strategy,

    /// Sub-score weights for [`Strategy::Weighted`]
    pub weights: ScoreWeights,

    /// Minimum weighted score for a line to count as a heading
    pub min_heading_score: f32,

    /// Minimum heading text length in characters
    pub min_heading_length: usize,

    /// Maximum heading text length in characters
    pub max_heading_length: usize,

    /// Title used when neither the first page nor the document metadata
    /// yields one. When unset, the input filename stem is used instead.
    pub title_placeholder: Option<String>,
}

impl ExtractOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the heading-detection strategy.
    pub fn with_strategy(mut self, strategy: Strategy) -> Self {
        self.strategy = strategy;
        self
    }

    /// Set the sub-score weights for the weighted strategy.
    pub fn with_weights(mut self, weights: ScoreWeights) -> Self {
        self.weights = weights;
        self
    }

    /// Set the minimum heading score.
    pub fn with_min_heading_score(mut self, score: f32) -> Self {
        self.min_heading_score = score;
        self
    }

    /// Set the accepted heading length bounds in characters.
    pub fn with_heading_length_bounds(mut self, min: usize, max: usize) -> Self {
        self.min_heading_length = min;
        self.max_heading_length = max;
        self
    }

    /// Set the fallback title placeholder.
    pub fn with_title_placeholder(mut self, title: impl Into<String>) -> Self {
        self.title_placeholder = Some(title.into());
        self
    }
}

impl Default for ExtractOptions {
    fn default() -> Self {
        Self {
            strategy: Strategy::Weighted,
            weights: ScoreWeights::default(),
            min_heading_score: 0.3,
            min_heading_length: 3,
            max_heading_length: 200,
            title_placeholder: None,
        }
    }
}
