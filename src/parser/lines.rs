//! Line assembly: grouping text spans into visual lines.

use std::collections::BTreeMap;

use super::span::{Rect, TextSpan};

/// One or more spans on the same page judged to lie on the same visual
/// text line, merged into one text unit.
#[derive(Debug, Clone)]
pub struct TextLine {
    /// Fragment texts joined with single spaces, whitespace-normalized
    pub text: String,
    /// Bounding box of the first fragment in horizontal order
    pub bbox: Rect,
    /// Font size of the first fragment in horizontal order
    pub font_size: f32,
    /// Bold flag of the first fragment in horizontal order
    pub bold: bool,
    /// 1-based page number
    pub page: u32,
    /// Baseline vertical position of the line
    pub y: f32,
}

/// Group spans into lines by vertical position.
///
/// Spans are bucketed by their baseline rounded to the nearest integer
/// point; within a bucket they are sorted left-to-right by `x0` and
/// their texts joined with single spaces. The representative font size,
/// bold flag and bbox come from the first fragment in horizontal order,
/// not a blend across the bucket. Lines are emitted top-to-bottom per
/// page (descending PDF `y`), pages in ascending page order.
pub fn assemble_lines(spans: &[TextSpan]) -> Vec<TextLine> {
    if spans.is_empty() {
        return Vec::new();
    }

    // Key: (page, negated rounded y) so BTreeMap iteration yields pages
    // ascending and lines top-to-bottom within a page.
    let mut buckets: BTreeMap<(u32, i64), Vec<&TextSpan>> = BTreeMap::new();
    for span in spans {
        let y_key = span.bbox.y0.round() as i64;
        buckets.entry((span.page, -y_key)).or_default().push(span);
    }

    let mut lines = Vec::with_capacity(buckets.len());
    for ((page, _), mut bucket) in buckets {
        bucket.sort_by(|a, b| {
            a.bbox
                .x0
                .partial_cmp(&b.bbox.x0)
                .unwrap_or(std::cmp::Ordering::Equal)
        });

        let joined = bucket
            .iter()
            .map(|s| s.text.as_str())
            .collect::<Vec<_>>()
            .join(" ");
        let text = normalize_ws(&joined);
        if text.is_empty() {
            continue;
        }

        let first = bucket[0];
        lines.push(TextLine {
            text,
            bbox: first.bbox,
            font_size: first.font_size,
            bold: first.bold,
            page,
            y: first.bbox.y0,
        });
    }

    lines
}

/// Collapse whitespace runs to single spaces and trim.
fn normalize_ws(text: &str) -> String {
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}
