//! Text normalization applied to heading and title texts.

use regex::Regex;
use unicode_normalization::UnicodeNormalization;

/// Normalizes extracted text before it enters the outline.
///
/// The pipeline is idempotent: applying [`TextCleaner::normalize`] to
/// already-normalized text is a no-op.
pub struct TextCleaner {
    whitespace: Regex,
    artifacts: Regex,
}

impl TextCleaner {
    /// Create a new cleaner with its patterns compiled.
    pub fn new() -> Self {
        Self {
            whitespace: Regex::new(r"\s+").unwrap(),
            // Keeps word characters (Unicode-aware), whitespace and common
            // punctuation; drops rendering artifacts like stray glyphs.
            artifacts: Regex::new(r#"[^\w\s\-.,():'"!?]"#).unwrap(),
        }
    }

    /// Normalize a piece of extracted text.
    ///
    /// Applies NFC normalization, strips control characters and
    /// artifact glyphs, collapses whitespace runs to single spaces and
    /// trims the ends.
    pub fn normalize(&self, text: &str) -> String {
        let nfc: String = text.nfc().collect();
        let printable: String = nfc.chars().filter(|c| !c.is_control()).collect();
        let stripped = self.artifacts.replace_all(&printable, "");
        self.whitespace
            .replace_all(&stripped, " ")
            .trim()
            .to_string()
    }
}

impl Default for TextCleaner {
    fn default() -> Self {
        Self::new()
    }
}

/// Truncate a string to at most `max_chars` characters, on a char boundary.
pub fn truncate_chars(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => text[..idx].trim_end().to_string(),
        None => text.to_string(),
    }
}
