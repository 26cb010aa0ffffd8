//! Error types for the outpdf library.

use std::io;
use thiserror::Error;

/// Result type alias for outpdf operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur during outline extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// I/O error when reading or writing files.
    #[error("I/O error: {0}")]
    Io(#[from] io::Error),

    /// The file format is not recognized as PDF.
    #[error("Unknown file format: not a valid PDF")]
    UnknownFormat,

    /// The PDF version header is malformed.
    #[error("Unsupported PDF version: {0}")]
    UnsupportedVersion(String),

    /// Error parsing PDF structure.
    #[error("PDF parsing error: {0}")]
    PdfParse(String),

    /// The PDF document is encrypted beyond read access.
    #[error("Document is encrypted")]
    Encrypted,

    /// Failure extracting the text layout of a single page.
    ///
    /// Recovered locally by the extractor: the page is logged and
    /// skipped, the rest of the document is still processed.
    #[error("Failed to extract page {page}: {reason}")]
    PageExtract {
        /// 1-based page number
        page: u32,
        /// Underlying cause
        reason: String,
    },

    /// Error serializing the outline to JSON.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        match err {
            lopdf::Error::IO(e) => Error::Io(e),
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::PdfParse(err.to_string()),
        }
    }
}
