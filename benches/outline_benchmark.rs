//! Benchmarks for the heading-detection pipeline.

use criterion::{black_box, criterion_group, criterion_main, Criterion};

use outpdf::analyze::{median_font_size, WeightedScorer};
use outpdf::parser::{assemble_lines, PdfBackend, TextSpan};
use outpdf::{ExtractOptions, OutlineExtractor};

/// Synthetic 50-page document: one heading plus body lines per page.
fn synthetic_pages() -> Vec<Vec<TextSpan>> {
    (1..=50u32)
        .map(|page| {
            let mut spans = vec![TextSpan::new(
                format!("{}. Heading For Page {}", page, page),
                60.0,
                760.0,
                16.0,
                "Helvetica-Bold",
                page,
            )];
            for i in 0..30u32 {
                spans.push(TextSpan::new(
                    format!("Body line {} with a handful of ordinary words on page {}", i, page),
                    60.0,
                    720.0 - (i as f32) * 14.0,
                    11.0,
                    "Helvetica",
                    page,
                ));
            }
            spans
        })
        .collect()
}

struct BenchSource {
    pages: Vec<Vec<TextSpan>>,
}

impl PdfBackend for BenchSource {
    fn page_count(&self) -> u32 {
        self.pages.len() as u32
    }

    fn page_spans(&self, page: u32) -> outpdf::Result<Vec<TextSpan>> {
        Ok(self.pages[(page - 1) as usize].clone())
    }

    fn metadata_title(&self) -> Option<String> {
        None
    }
}

fn bench_line_assembly(c: &mut Criterion) {
    let spans: Vec<TextSpan> = synthetic_pages().into_iter().flatten().collect();
    c.bench_function("assemble_lines 1550 spans", |b| {
        b.iter(|| assemble_lines(black_box(&spans)))
    });
}

fn bench_scoring(c: &mut Criterion) {
    let spans: Vec<TextSpan> = synthetic_pages().into_iter().flatten().collect();
    let lines = assemble_lines(&spans);
    let scorer = WeightedScorer::new(&ExtractOptions::default(), median_font_size(&spans));

    c.bench_function("score 1550 lines", |b| {
        b.iter(|| {
            lines
                .iter()
                .map(|line| scorer.score(black_box(line)))
                .sum::<f32>()
        })
    });
}

fn bench_full_pipeline(c: &mut Criterion) {
    let source = BenchSource {
        pages: synthetic_pages(),
    };
    let extractor = OutlineExtractor::default();

    c.bench_function("extract 50-page document", |b| {
        b.iter(|| extractor.extract_from_source(black_box(&source), None).unwrap())
    });
}

criterion_group!(
    benches,
    bench_line_assembly,
    bench_scoring,
    bench_full_pipeline
);
criterion_main!(benches);
