//! # outpdf
//!
//! Heuristic PDF outline extraction for Rust.
//!
//! outpdf reads a PDF's text layout (font sizes, boldness, positions)
//! and reconstructs a document outline: title plus H1/H2/H3 headings
//! with page numbers, without relying on embedded bookmarks or tags,
//! which many PDFs simply don't have.
//!
//! ## Quick Start
//!
//! ```no_run
//! use outpdf::{extract_outline, render, JsonFormat};
//!
//! fn main() -> outpdf::Result<()> {
//!     let outline = extract_outline("manual.pdf")?;
//!     println!("{}", render::to_json(&outline, JsonFormat::Pretty)?);
//!     Ok(())
//! }
//! ```
//!
//! ## How it works
//!
//! Text spans are read per page, grouped into visual lines, and passed
//! through a noise filter that drops running headers, page numbers and
//! other boilerplate. Surviving lines are scored against the document's
//! median font size (or matched against explicit patterns, depending on
//! the configured [`Strategy`]), clustered into heading levels by font
//! size, and assembled into a deduplicated, page-ordered outline. The
//! title comes from the largest type on the first page.
//!
//! The heuristics are tuned for numbered technical manuals; documents
//! with unconventional typography may misclassify. Scanned, image-only
//! pages yield empty outlines; there is no OCR here.

pub mod analyze;
pub mod clean;
pub mod detect;
pub mod error;
pub mod extract;
pub mod model;
pub mod options;
pub mod parser;
pub mod render;

// Re-export commonly used types
pub use error::{Error, Result};
pub use extract::OutlineExtractor;
pub use model::{DocumentOutline, Heading, HeadingLevel};
pub use options::{ExtractOptions, ScoreWeights, Strategy};
pub use parser::{LopdfBackend, PdfBackend};
pub use render::JsonFormat;

use std::path::Path;

/// Extract the outline of a PDF file with default options.
///
/// # Example
///
/// ```no_run
/// let outline = outpdf::extract_outline("document.pdf").unwrap();
/// println!("{} headings", outline.len());
/// ```
pub fn extract_outline<P: AsRef<Path>>(path: P) -> Result<DocumentOutline> {
    OutlineExtractor::default().extract_path(path)
}

/// Extract the outline of a PDF file with custom options.
///
/// # Example
///
/// ```no_run
/// use outpdf::{extract_outline_with_options, ExtractOptions, Strategy};
///
/// let options = ExtractOptions::new().with_strategy(Strategy::Pattern);
/// let outline = extract_outline_with_options("document.pdf", options).unwrap();
/// ```
pub fn extract_outline_with_options<P: AsRef<Path>>(
    path: P,
    options: ExtractOptions,
) -> Result<DocumentOutline> {
    OutlineExtractor::new(options).extract_path(path)
}

/// Extract the outline of a PDF held in memory.
pub fn extract_outline_bytes(data: &[u8]) -> Result<DocumentOutline> {
    OutlineExtractor::default().extract_bytes(data)
}

/// Extract the outline of in-memory PDF data with custom options.
pub fn extract_outline_bytes_with_options(
    data: &[u8],
    options: ExtractOptions,
) -> Result<DocumentOutline> {
    OutlineExtractor::new(options).extract_bytes(data)
}
