//! The per-document extraction pipeline.

use std::path::Path;

use crate::analyze::{
    assign_levels, extract_title, median_font_size, Classifier, HeadingCandidate, NoiseFilter,
};
use crate::clean::TextCleaner;
use crate::detect;
use crate::error::Result;
use crate::model::DocumentOutline;
use crate::options::ExtractOptions;
use crate::parser::{assemble_lines, LopdfBackend, PdfBackend, TextLine, TextSpan};

/// Extracts a structured outline from one document at a time.
///
/// The extractor holds only immutable configuration and may be reused
/// across documents; each call reads the whole document into memory,
/// runs the heading pipeline once top to bottom, and returns a fresh
/// [`DocumentOutline`]. A failure reading a single page is logged and
/// that page skipped; only failures opening the document surface as
/// errors.
pub struct OutlineExtractor {
    options: ExtractOptions,
    cleaner: TextCleaner,
}

impl OutlineExtractor {
    /// Create an extractor with the given options.
    pub fn new(options: ExtractOptions) -> Self {
        Self {
            options,
            cleaner: TextCleaner::new(),
        }
    }

    /// Extract the outline of a PDF file.
    pub fn extract_path<P: AsRef<Path>>(&self, path: P) -> Result<DocumentOutline> {
        let path = path.as_ref();
        detect::pdf_version_from_path(path)?;

        let backend = LopdfBackend::load_file(path)?;
        let stem = path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned());
        self.extract_from_source(&backend, stem.as_deref())
    }

    /// Extract the outline of a PDF held in memory.
    pub fn extract_bytes(&self, data: &[u8]) -> Result<DocumentOutline> {
        detect::pdf_version_from_bytes(data)?;
        let backend = LopdfBackend::load_bytes(data)?;
        self.extract_from_source(&backend, None)
    }

    /// Run the pipeline against any opened document source.
    ///
    /// `filename_stem` participates in the title fallback chain:
    /// metadata title, then the configured placeholder, then the stem.
    pub fn extract_from_source(
        &self,
        source: &dyn PdfBackend,
        filename_stem: Option<&str>,
    ) -> Result<DocumentOutline> {
        let spans = self.read_all_spans(source);

        if spans.is_empty() {
            log::info!("document has no extractable text");
            return Ok(DocumentOutline::empty(
                self.fallback_title(source.metadata_title(), filename_stem),
            ));
        }

        let median_size = median_font_size(&spans);
        let lines = assemble_lines(&spans);
        let noise = NoiseFilter::for_document(&lines);
        let classifier = Classifier::from_options(&self.options, median_size);

        let candidates: Vec<HeadingCandidate> = lines
            .iter()
            .filter(|line| !noise.is_noise(line))
            .filter_map(|line| classifier.classify(line))
            .collect();
        log::debug!(
            "{} candidate headings from {} lines (median font size {:.1})",
            candidates.len(),
            lines.len(),
            median_size
        );

        let first_page_lines: Vec<TextLine> =
            lines.iter().filter(|l| l.page == 1).cloned().collect();
        let title = extract_title(&first_page_lines, &noise, &self.cleaner)
            .unwrap_or_else(|| self.fallback_title(source.metadata_title(), filename_stem));

        let headings = assign_levels(&candidates, &self.cleaner);
        let outline = DocumentOutline::assemble(title, headings);
        log::info!("extracted {} headings", outline.len());

        Ok(outline)
    }

    /// Read every page's spans, skipping pages that fail to extract.
    fn read_all_spans(&self, source: &dyn PdfBackend) -> Vec<TextSpan> {
        let mut spans = Vec::new();
        for page in 1..=source.page_count() {
            match source.page_spans(page) {
                Ok(page_spans) => spans.extend(page_spans),
                Err(e) => log::warn!("skipping page {}: {}", page, e),
            }
        }
        spans
    }

    /// Title fallback chain: metadata, placeholder, filename stem.
    fn fallback_title(&self, metadata_title: Option<String>, stem: Option<&str>) -> String {
        metadata_title
            .filter(|t| !t.trim().is_empty())
            .or_else(|| self.options.title_placeholder.clone())
            .or_else(|| stem.map(str::to_string))
            .unwrap_or_default()
    }
}

impl Default for OutlineExtractor {
    fn default() -> Self {
        Self::new(ExtractOptions::default())
    }
}
