//! Integration tests for the outline extraction pipeline.
//!
//! These drive the full pipeline through an in-memory document source,
//! so the heuristics are exercised without fixture PDFs.

use outpdf::parser::{PdfBackend, TextSpan};
use outpdf::render::{to_json, JsonFormat};
use outpdf::{
    DocumentOutline, Error, ExtractOptions, HeadingLevel, OutlineExtractor, Strategy,
};

/// In-memory document source: one Vec of spans per page.
struct StaticSource {
    pages: Vec<Vec<TextSpan>>,
    title: Option<String>,
    failing_page: Option<u32>,
}

impl StaticSource {
    fn new(pages: Vec<Vec<TextSpan>>) -> Self {
        Self {
            pages,
            title: None,
            failing_page: None,
        }
    }

    fn with_metadata_title(mut self, title: &str) -> Self {
        self.title = Some(title.to_string());
        self
    }

    fn with_failing_page(mut self, page: u32) -> Self {
        self.failing_page = Some(page);
        self
    }
}

impl PdfBackend for StaticSource {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_spans(&self, page: u32) -> outpdf::Result<Vec<TextSpan>> {
        if self.failing_page == Some(page) {
            return Err(Error::PageExtract {
                page,
                reason: "synthetic failure".to_string(),
            });
        }
        Ok(self.pages[(page - 1) as usize].clone())
    }

    fn metadata_title(&self) -> Option<String> {
        self.title.clone()
    }
}

fn span(text: &str, y: f32, size: f32, font: &str, page: u32) -> TextSpan {
    TextSpan::new(text.to_string(), 60.0, y, size, font, page)
}

fn body(seed: &str, y: f32, page: u32) -> TextSpan {
    // Long enough to fall outside the heading length bounds
    let text = format!("{} ", seed).repeat(40);
    span(&text, y, 11.0, "Helvetica", page)
}

/// The 3-page numbered-manual scenario.
fn numbered_manual() -> StaticSource {
    StaticSource::new(vec![
        vec![
            span("1. Introduction", 700.0, 18.0, "Helvetica-Bold", 1),
            body("opening prose about the subject", 500.0, 1),
        ],
        vec![
            span("1.1 Background", 700.0, 14.0, "Helvetica-Bold", 2),
            body("further prose with plenty of words", 500.0, 2),
        ],
        vec![body("closing prose that keeps going", 500.0, 3)],
    ])
}

fn extract(source: &StaticSource) -> DocumentOutline {
    OutlineExtractor::default()
        .extract_from_source(source, None)
        .unwrap()
}

#[test]
fn numbered_manual_yields_leveled_outline() {
    let outline = extract(&numbered_manual());

    assert_eq!(outline.title, "1. Introduction");
    assert_eq!(outline.outline.len(), 2);
    assert_eq!(outline.outline[0].level, HeadingLevel::H1);
    assert_eq!(outline.outline[0].text, "1. Introduction");
    assert_eq!(outline.outline[0].page, 1);
    assert_eq!(outline.outline[1].level, HeadingLevel::H2);
    assert_eq!(outline.outline[1].text, "1.1 Background");
    assert_eq!(outline.outline[1].page, 2);
}

#[test]
fn extraction_is_deterministic() {
    let source = numbered_manual();
    let a = to_json(&extract(&source), JsonFormat::Pretty).unwrap();
    let b = to_json(&extract(&source), JsonFormat::Pretty).unwrap();
    assert_eq!(a, b);
}

#[test]
fn running_header_and_footer_are_excluded() {
    let pages: Vec<Vec<TextSpan>> = (1..=10)
        .map(|p| {
            vec![
                span("ISTQB", 800.0, 11.0, "Helvetica", p),
                span("Page 1 of 10", 30.0, 9.0, "Helvetica", p),
            ]
        })
        .collect();
    let outline = extract(&StaticSource::new(pages));

    assert!(outline
        .outline
        .iter()
        .all(|h| h.text != "ISTQB" && h.text != "Page 1 of 10"));
    assert!(outline.is_empty());
}

#[test]
fn form_document_yields_empty_outline() {
    let outline = extract(&StaticSource::new(vec![vec![
        span("Name:", 700.0, 11.0, "Helvetica", 1),
        span("Date:", 650.0, 11.0, "Helvetica", 1),
        span("Signature", 600.0, 11.0, "Helvetica", 1),
    ]]));
    assert!(outline.is_empty());
}

#[test]
fn empty_document_falls_back_to_filename_stem() {
    let source = StaticSource::new(vec![vec![], vec![]]);
    let outline = OutlineExtractor::default()
        .extract_from_source(&source, Some("report7"))
        .unwrap();
    assert_eq!(outline.title, "report7");
    assert!(outline.is_empty());
}

#[test]
fn empty_document_prefers_configured_placeholder() {
    let source = StaticSource::new(vec![vec![]]);
    let extractor = OutlineExtractor::new(
        ExtractOptions::new().with_title_placeholder("Untitled Document"),
    );
    let outline = extractor
        .extract_from_source(&source, Some("report7"))
        .unwrap();
    assert_eq!(outline.title, "Untitled Document");
}

#[test]
fn empty_document_prefers_metadata_title() {
    let source = StaticSource::new(vec![vec![]]).with_metadata_title("The Real Title");
    let outline = OutlineExtractor::default()
        .extract_from_source(&source, Some("report7"))
        .unwrap();
    assert_eq!(outline.title, "The Real Title");
}

#[test]
fn duplicate_headings_on_one_page_collapse() {
    let outline = extract(&StaticSource::new(vec![vec![
        span("2. Methods", 700.0, 18.0, "Helvetica-Bold", 1),
        span("2. Methods", 300.0, 18.0, "Helvetica-Bold", 1),
        body("some body text to anchor the median", 500.0, 1),
    ]]));

    let matches: Vec<_> = outline
        .outline
        .iter()
        .filter(|h| h.text == "2. Methods")
        .collect();
    assert_eq!(matches.len(), 1);
}

#[test]
fn outline_pages_are_non_decreasing_and_levels_valid() {
    let pages = vec![
        vec![
            span("1. One", 700.0, 18.0, "Helvetica-Bold", 1),
            span("1.1 One One", 400.0, 14.0, "Helvetica-Bold", 1),
            body("padding text for the median size", 200.0, 1),
        ],
        vec![
            span("2. Two", 700.0, 18.0, "Helvetica-Bold", 2),
            body("padding text for the median size too", 200.0, 2),
        ],
        vec![
            span("2.1 Two One", 700.0, 14.0, "Helvetica-Bold", 3),
            body("and once more for good measure here", 200.0, 3),
        ],
    ];
    let outline = extract(&StaticSource::new(pages));

    assert!(!outline.is_empty());
    let mut last_page = 0;
    for heading in &outline.outline {
        assert!(heading.page >= last_page);
        last_page = heading.page;
        assert!(matches!(
            heading.level,
            HeadingLevel::H1 | HeadingLevel::H2 | HeadingLevel::H3
        ));
    }
}

#[test]
fn failing_page_is_skipped_not_fatal() {
    let source = numbered_manual().with_failing_page(2);
    let outline = extract(&source);

    // Page 2's heading is gone, page 1's survives
    assert_eq!(outline.outline.len(), 1);
    assert_eq!(outline.outline[0].text, "1. Introduction");
}

#[test]
fn pattern_strategy_assigns_levels_from_rules() {
    let pages = vec![vec![
        span("1. Introduction", 700.0, 11.0, "Helvetica", 1),
        span("1.1 Background", 650.0, 11.0, "Helvetica", 1),
        span("References", 600.0, 11.0, "Helvetica", 1),
        span("Testing Principles", 550.0, 11.0, "Helvetica", 1),
    ]];
    let extractor =
        OutlineExtractor::new(ExtractOptions::new().with_strategy(Strategy::Pattern));
    let outline = extractor
        .extract_from_source(&StaticSource::new(pages), None)
        .unwrap();

    let find = |text: &str| {
        outline
            .outline
            .iter()
            .find(|h| h.text == text)
            .unwrap_or_else(|| panic!("missing heading {:?}", text))
    };
    assert_eq!(find("1. Introduction").level, HeadingLevel::H1);
    assert_eq!(find("References").level, HeadingLevel::H1);
    assert_eq!(find("1.1 Background").level, HeadingLevel::H2);
    assert_eq!(find("Testing Principles").level, HeadingLevel::H2);
    assert!(outline
        .outline
        .iter()
        .all(|h| h.level != HeadingLevel::H3));
}

#[test]
fn json_output_shape() {
    let json = to_json(&extract(&numbered_manual()), JsonFormat::Pretty).unwrap();

    assert!(json.contains("\"title\": \"1. Introduction\""));
    assert!(json.contains("\"level\": \"H1\""));
    assert!(json.contains("\"text\": \"1.1 Background\""));
    assert!(json.contains("\"page\": 2"));
}
