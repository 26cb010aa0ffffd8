//! PDF format detection and validation.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use crate::error::{Error, Result};

/// PDF magic bytes: %PDF-
const PDF_MAGIC: &[u8] = b"%PDF-";
const VERSION_LEN: usize = 3; // e.g. "1.7"

/// Validate the PDF header of a file and return its version string.
///
/// Reads only the first few bytes; fails with [`Error::UnknownFormat`]
/// for non-PDF files, [`Error::UnsupportedVersion`] for a malformed
/// version marker.
pub fn pdf_version_from_path<P: AsRef<Path>>(path: P) -> Result<String> {
    let file = File::open(path)?;
    let mut reader = BufReader::new(file);
    let mut header = [0u8; 16];
    let n = reader.read(&mut header)?;
    pdf_version_from_bytes(&header[..n])
}

/// Validate a PDF header from raw bytes and return the version string.
pub fn pdf_version_from_bytes(data: &[u8]) -> Result<String> {
    if data.len() < PDF_MAGIC.len() + VERSION_LEN {
        return Err(Error::UnknownFormat);
    }
    if !data.starts_with(PDF_MAGIC) {
        return Err(Error::UnknownFormat);
    }

    let version_bytes = &data[PDF_MAGIC.len()..PDF_MAGIC.len() + VERSION_LEN];
    let version = String::from_utf8_lossy(version_bytes).to_string();

    if !is_valid_version(&version) {
        return Err(Error::UnsupportedVersion(version));
    }

    Ok(version)
}

/// Version strings look like "1.0" through "2.0".
fn is_valid_version(version: &str) -> bool {
    let bytes = version.as_bytes();
    bytes.len() == 3
        && bytes[0].is_ascii_digit()
        && bytes[1] == b'.'
        && bytes[2].is_ascii_digit()
}

/// Check if a file carries a valid PDF header.
pub fn is_pdf<P: AsRef<Path>>(path: P) -> bool {
    pdf_version_from_path(path).is_ok()
}
