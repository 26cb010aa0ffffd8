//! PDF backend abstraction layer.
//!
//! Provides a trait-based interface for reading text spans out of a
//! document, isolating the concrete PDF library (lopdf) from the
//! heading heuristics. Tests substitute an in-memory source.

use std::collections::BTreeMap;

use lopdf::{Dictionary, Document as LopdfDocument, Object};

use super::span::TextSpan;
use crate::error::{Error, Result};

/// Abstract interface for an opened document.
///
/// Page numbers are 1-based throughout.
pub trait PdfBackend {
    /// Number of pages in the document.
    fn page_count(&self) -> u32;

    /// Text spans of one page, in content-stream order. Fragments that
    /// are empty after control-character stripping are already dropped.
    fn page_spans(&self, page: u32) -> Result<Vec<TextSpan>>;

    /// Title from the document information dictionary, if present.
    fn metadata_title(&self) -> Option<String>;
}

/// Concrete [`PdfBackend`] backed by `lopdf::Document`.
pub struct LopdfBackend {
    doc: LopdfDocument,
}

impl LopdfBackend {
    /// Load from a file path.
    pub fn load_file<P: AsRef<std::path::Path>>(path: P) -> Result<Self> {
        let doc = LopdfDocument::load(path).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;
        Ok(Self { doc })
    }

    /// Load from an in-memory byte slice.
    pub fn load_bytes(data: &[u8]) -> Result<Self> {
        let doc = LopdfDocument::load_mem(data).map_err(|e| match e {
            lopdf::Error::Decryption(_) => Error::Encrypted,
            _ => Error::from(e),
        })?;
        Ok(Self { doc })
    }

    /// Check if the document is encrypted.
    pub fn is_encrypted(&self) -> bool {
        self.doc.is_encrypted()
    }

    /// PDF version string.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    /// Raw (decompressed) content stream bytes for a page.
    fn page_content(&self, page_id: lopdf::ObjectId) -> Result<Vec<u8>> {
        let page_dict = self
            .doc
            .get_dictionary(page_id)
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        let contents = page_dict
            .get(b"Contents")
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        match contents {
            Object::Reference(r) => {
                if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                    return s
                        .decompressed_content()
                        .map_err(|e| Error::PdfParse(e.to_string()));
                }
                Err(Error::PdfParse("Invalid content stream".to_string()))
            }
            Object::Array(arr) => {
                let mut content = Vec::new();
                for obj in arr {
                    if let Object::Reference(r) = obj {
                        if let Ok(Object::Stream(s)) = self.doc.get_object(*r) {
                            if let Ok(data) = s.decompressed_content() {
                                content.extend_from_slice(&data);
                                content.push(b' ');
                            }
                        }
                    }
                }
                Ok(content)
            }
            _ => Err(Error::PdfParse("Invalid content stream".to_string())),
        }
    }

    /// Walk a page's content stream and collect positioned text spans.
    fn extract_spans(&self, page: u32) -> Result<Vec<TextSpan>> {
        let pages = self.doc.get_pages();
        let page_id = *pages
            .get(&page)
            .ok_or_else(|| Error::PdfParse(format!("page {} not in page tree", page)))?;

        let fonts = self
            .doc
            .get_page_fonts(page_id)
            .map_err(|e| Error::PdfParse(e.to_string()))?;
        let base_fonts = base_font_names(&fonts);

        let raw = self.page_content(page_id)?;
        let content = lopdf::content::Content::decode(&raw)
            .map_err(|e| Error::PdfParse(e.to_string()))?;

        let mut spans = Vec::new();
        let mut current_font_name: Vec<u8> = Vec::new();
        let mut current_font_size: f32 = 12.0;
        let mut matrix = TextMatrix::default();
        let mut in_text_block = false;

        for op in content.operations {
            match op.operator.as_str() {
                "BT" => {
                    in_text_block = true;
                    matrix = TextMatrix::default();
                }
                "ET" => {
                    in_text_block = false;
                }
                "Tf" => {
                    if op.operands.len() >= 2 {
                        if let Object::Name(name) = &op.operands[0] {
                            current_font_name = name.clone();
                        }
                        current_font_size = get_number(&op.operands[1]).unwrap_or(12.0);
                    }
                }
                "Td" | "TD" => {
                    if op.operands.len() >= 2 {
                        let tx = get_number(&op.operands[0]).unwrap_or(0.0);
                        let ty = get_number(&op.operands[1]).unwrap_or(0.0);
                        matrix.translate(tx, ty);
                    }
                }
                "Tm" => {
                    if op.operands.len() >= 6 {
                        matrix.set(
                            get_number(&op.operands[0]).unwrap_or(1.0),
                            get_number(&op.operands[1]).unwrap_or(0.0),
                            get_number(&op.operands[2]).unwrap_or(0.0),
                            get_number(&op.operands[3]).unwrap_or(1.0),
                            get_number(&op.operands[4]).unwrap_or(0.0),
                            get_number(&op.operands[5]).unwrap_or(0.0),
                        );
                    }
                }
                "T*" => {
                    matrix.next_line();
                }
                "Tj" | "TJ" => {
                    if !in_text_block {
                        continue;
                    }
                    let text = match op.operator.as_str() {
                        "TJ" => self.decode_tj_array(&op.operands, &fonts, &current_font_name),
                        _ => match op.operands.first() {
                            Some(Object::String(bytes, _)) => {
                                self.decode_string(bytes, &fonts, &current_font_name)
                            }
                            _ => String::new(),
                        },
                    };
                    self.push_span(
                        &mut spans,
                        text,
                        &matrix,
                        current_font_size,
                        &base_fonts,
                        &current_font_name,
                        page,
                    );
                }
                "'" | "\"" => {
                    matrix.next_line();
                    if !in_text_block {
                        continue;
                    }
                    let text_idx = if op.operator == "\"" { 2 } else { 0 };
                    if let Some(Object::String(bytes, _)) = op.operands.get(text_idx) {
                        let text = self.decode_string(bytes, &fonts, &current_font_name);
                        self.push_span(
                            &mut spans,
                            text,
                            &matrix,
                            current_font_size,
                            &base_fonts,
                            &current_font_name,
                            page,
                        );
                    }
                }
                _ => {}
            }
        }

        Ok(spans)
    }

    #[allow(clippy::too_many_arguments)]
    fn push_span(
        &self,
        spans: &mut Vec<TextSpan>,
        text: String,
        matrix: &TextMatrix,
        font_size: f32,
        base_fonts: &BTreeMap<Vec<u8>, String>,
        font_name: &[u8],
        page: u32,
    ) {
        let printable: String = text.chars().filter(|c| !c.is_control()).collect();
        if printable.trim().is_empty() {
            return;
        }
        let (x, y) = matrix.position();
        let effective_size = font_size * matrix.scale();
        let base_font = base_fonts
            .get(font_name)
            .map(String::as_str)
            .unwrap_or("Unknown");
        spans.push(TextSpan::new(printable, x, y, effective_size, base_font, page));
    }

    /// Decode a TJ operand array: strings interleaved with kerning
    /// adjustments in 1/1000 text-space units. Adjustments beyond the
    /// word-space threshold become spaces.
    fn decode_tj_array(
        &self,
        operands: &[Object],
        fonts: &BTreeMap<Vec<u8>, &Dictionary>,
        font_name: &[u8],
    ) -> String {
        const SPACE_THRESHOLD: f32 = 200.0;

        let Some(Object::Array(arr)) = operands.first() else {
            return String::new();
        };

        let mut combined = String::new();
        for item in arr {
            match item {
                Object::String(bytes, _) => {
                    combined.push_str(&self.decode_string(bytes, fonts, font_name));
                }
                Object::Integer(n) => {
                    if -(*n as f32) > SPACE_THRESHOLD && !combined.ends_with(' ') {
                        combined.push(' ');
                    }
                }
                Object::Real(n) => {
                    if -n > SPACE_THRESHOLD && !combined.ends_with(' ') {
                        combined.push(' ');
                    }
                }
                _ => {}
            }
        }
        combined
    }

    /// Decode a text string through the current font's encoding, with a
    /// simple byte-level fallback.
    fn decode_string(
        &self,
        bytes: &[u8],
        fonts: &BTreeMap<Vec<u8>, &Dictionary>,
        font_name: &[u8],
    ) -> String {
        if let Some(font_dict) = fonts.get(font_name) {
            if let Ok(enc) = font_dict.get_font_encoding(&self.doc) {
                if let Ok(text) = LopdfDocument::decode_text(&enc, bytes) {
                    return text;
                }
            }
        }
        decode_text_simple(bytes)
    }
}

impl PdfBackend for LopdfBackend {
    fn page_count(&self) -> u32 {
        self.doc.get_pages().len() as u32
    }

    fn page_spans(&self, page: u32) -> Result<Vec<TextSpan>> {
        self.extract_spans(page).map_err(|e| Error::PageExtract {
            page,
            reason: e.to_string(),
        })
    }

    fn metadata_title(&self) -> Option<String> {
        let info = self.doc.trailer.get(b"Info").ok()?;
        let info_ref = info.as_reference().ok()?;
        let info_dict = self.doc.get_dictionary(info_ref).ok()?;
        pdf_string(info_dict, b"Title").filter(|t| !t.trim().is_empty())
    }
}

/// Resolve each page font's BaseFont name, for bold detection.
fn base_font_names(fonts: &BTreeMap<Vec<u8>, &Dictionary>) -> BTreeMap<Vec<u8>, String> {
    let mut names = BTreeMap::new();
    for (name, font_dict) in fonts {
        let base_font = font_dict
            .get(b"BaseFont")
            .ok()
            .and_then(|o| o.as_name().ok())
            .map(|n| String::from_utf8_lossy(n).to_string())
            .unwrap_or_else(|| "Unknown".to_string());
        names.insert(name.clone(), base_font);
    }
    names
}

/// Read a string value out of a PDF dictionary, handling UTF-16BE,
/// UTF-8 and Latin-1 encodings.
fn pdf_string(dict: &Dictionary, key: &[u8]) -> Option<String> {
    match dict.get(key).ok()? {
        Object::String(bytes, _) => Some(decode_text_simple(bytes)),
        Object::Name(bytes) => String::from_utf8(bytes.clone()).ok(),
        _ => None,
    }
}

/// Simple text decoding fallback when no encoding is available.
fn decode_text_simple(bytes: &[u8]) -> String {
    // UTF-16BE with BOM
    if bytes.len() >= 2 && bytes[0] == 0xFE && bytes[1] == 0xFF {
        let utf16: Vec<u16> = bytes[2..]
            .chunks(2)
            .filter_map(|c| {
                if c.len() == 2 {
                    Some(u16::from_be_bytes([c[0], c[1]]))
                } else {
                    None
                }
            })
            .collect();
        return String::from_utf16(&utf16).unwrap_or_default();
    }

    if let Ok(s) = String::from_utf8(bytes.to_vec()) {
        return s;
    }

    // Latin-1 fallback
    bytes.iter().map(|&b| b as char).collect()
}

/// Helper to extract a number from a PDF object.
fn get_number(obj: &Object) -> Option<f32> {
    match obj {
        Object::Integer(i) => Some(*i as f32),
        Object::Real(r) => Some(*r),
        _ => None,
    }
}

/// Text matrix bookkeeping for content stream position tracking.
#[derive(Debug, Clone)]
struct TextMatrix {
    a: f32,
    b: f32,
    c: f32,
    d: f32,
    e: f32, // X translation
    f: f32, // Y translation
}

impl Default for TextMatrix {
    fn default() -> Self {
        Self {
            a: 1.0,
            b: 0.0,
            c: 0.0,
            d: 1.0,
            e: 0.0,
            f: 0.0,
        }
    }
}

impl TextMatrix {
    fn set(&mut self, a: f32, b: f32, c: f32, d: f32, e: f32, f: f32) {
        self.a = a;
        self.b = b;
        self.c = c;
        self.d = d;
        self.e = e;
        self.f = f;
    }

    fn translate(&mut self, tx: f32, ty: f32) {
        self.e += tx * self.a + ty * self.c;
        self.f += tx * self.b + ty * self.d;
    }

    fn next_line(&mut self) {
        // Default leading; a TL operator would refine this
        self.f -= 12.0 * self.d;
    }

    fn position(&self) -> (f32, f32) {
        (self.e, self.f)
    }

    fn scale(&self) -> f32 {
        (self.a * self.a + self.c * self.c).sqrt()
    }
}
