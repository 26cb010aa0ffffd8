//! Title reconstruction from the first page.

use super::noise::NoiseFilter;
use crate::clean::{truncate_chars, TextCleaner};
use crate::parser::TextLine;

/// Titles longer than this are cut off.
const MAX_TITLE_CHARS: usize = 200;

/// The largest-type share of the page considered part of the title.
const SIZE_RATIO: f32 = 0.8;

/// Reconstruct the document title from the first page's lines.
///
/// Takes every non-noise line whose font size is within 80% of the
/// page's largest, in top-to-bottom order, and joins them into one
/// string. Returns `None` when the page yields no usable candidates;
/// the caller then falls back to document metadata, the configured
/// placeholder, or the filename stem.
pub fn extract_title(
    first_page_lines: &[TextLine],
    noise: &NoiseFilter,
    cleaner: &TextCleaner,
) -> Option<String> {
    let candidates: Vec<&TextLine> = first_page_lines
        .iter()
        .filter(|l| !noise.is_noise(l))
        .collect();

    let max_size = candidates
        .iter()
        .map(|l| l.font_size)
        .fold(f32::NEG_INFINITY, f32::max);
    if !max_size.is_finite() {
        return None;
    }

    // Lines arrive in top-to-bottom order from the assembler.
    let joined = candidates
        .iter()
        .filter(|l| l.font_size >= SIZE_RATIO * max_size)
        .map(|l| l.text.as_str())
        .collect::<Vec<_>>()
        .join(" ");

    let title = cleaner.normalize(&joined);
    if title.is_empty() {
        return None;
    }
    Some(truncate_chars(&title, MAX_TITLE_CHARS))
}
