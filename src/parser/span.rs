//! Text span (fragment) types produced by the reader.

/// Axis-aligned bounding box in PDF user space.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rect {
    /// Left edge
    pub x0: f32,
    /// Bottom edge (PDF y grows upward)
    pub y0: f32,
    /// Right edge
    pub x1: f32,
    /// Top edge
    pub y1: f32,
}

impl Rect {
    /// Create a new rectangle.
    pub fn new(x0: f32, y0: f32, x1: f32, y1: f32) -> Self {
        Self { x0, y0, x1, y1 }
    }
}

/// A contiguous run of text sharing one font and size, as reported by
/// the underlying PDF text extraction.
#[derive(Debug, Clone)]
pub struct TextSpan {
    /// The text content
    pub text: String,
    /// Bounding box in PDF user space
    pub bbox: Rect,
    /// Effective font size in points
    pub font_size: f32,
    /// Whether the font appears to be bold
    pub bold: bool,
    /// 1-based page number
    pub page: u32,
}

impl TextSpan {
    /// Create a span at a baseline position, deriving boldness from the
    /// base font name and estimating the advance width from glyph count.
    pub fn new(text: String, x: f32, y: f32, font_size: f32, font_name: &str, page: u32) -> Self {
        let lower = font_name.to_lowercase();
        let bold =
            lower.contains("bold") || lower.contains("black") || lower.contains("heavy");
        // Rough advance estimate; exact glyph metrics are not needed for
        // line grouping.
        let width = text.chars().count() as f32 * font_size * 0.5;

        Self {
            text,
            bbox: Rect::new(x, y, x + width, y + font_size),
            font_size,
            bold,
            page,
        }
    }
}
