//! Outline output types and assembly.

use std::collections::HashSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Rank of a detected heading, outermost first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum HeadingLevel {
    H1,
    H2,
    H3,
}

impl fmt::Display for HeadingLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HeadingLevel::H1 => write!(f, "H1"),
            HeadingLevel::H2 => write!(f, "H2"),
            HeadingLevel::H3 => write!(f, "H3"),
        }
    }
}

/// A single detected heading.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Heading {
    /// Heading rank (H1, H2 or H3)
    pub level: HeadingLevel,

    /// Normalized heading text
    pub text: String,

    /// 1-based page number the heading appears on
    pub page: u32,
}

impl Heading {
    /// Create a new heading.
    pub fn new(level: HeadingLevel, text: impl Into<String>, page: u32) -> Self {
        Self {
            level,
            text: text.into(),
            page,
        }
    }
}

/// The extracted outline of one document.
///
/// Constructed once per document and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DocumentOutline {
    /// Document title
    pub title: String,

    /// Detected headings, ascending by page
    pub outline: Vec<Heading>,
}

impl DocumentOutline {
    /// An outline with a title and no headings.
    pub fn empty(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            outline: Vec::new(),
        }
    }

    /// Assemble the final outline from detected headings.
    ///
    /// Duplicate `(text, page)` pairs keep their first occurrence only;
    /// the result is ordered ascending by page with the original
    /// detection order preserved within a page.
    pub fn assemble(title: impl Into<String>, headings: Vec<Heading>) -> Self {
        let mut seen: HashSet<(String, u32)> = HashSet::new();
        let mut unique: Vec<Heading> = Vec::with_capacity(headings.len());

        for heading in headings {
            let key = (heading.text.clone(), heading.page);
            if seen.insert(key) {
                unique.push(heading);
            }
        }

        unique.sort_by_key(|h| h.page);

        Self {
            title: title.into(),
            outline: unique,
        }
    }

    /// Number of headings in the outline.
    pub fn len(&self) -> usize {
        self.outline.len()
    }

    /// Check if the outline has no headings.
    pub fn is_empty(&self) -> bool {
        self.outline.is_empty()
    }
}
