//! PDF backend abstraction layer.
//!
//! Provides a trait-based interface for the PDF operations the extractor
//! and the formatting analyzer need, isolating the concrete PDF library
//! (lopdf) from the analysis logic.

use std::collections::BTreeMap;
use std::path::Path;

use lopdf::{Document as LopdfDocument, Object, Stream};

use crate::error::{Error, Result};

/// Page identifier: (object number, generation number).
pub type PageId = (u32, u16);

/// Font information returned by the backend.
#[derive(Debug, Clone, PartialEq)]
pub struct BackendFontInfo {
    /// Font resource name (key in the page's font dictionary, e.g. `F1`).
    pub name: Vec<u8>,
    /// Base font name (e.g., "Helvetica-Bold"), if the dictionary has one.
    pub base_font: Option<String>,
}

/// A value from a PDF content stream operand.
#[derive(Debug, Clone, PartialEq)]
pub enum PdfValue {
    Integer(i64),
    Real(f32),
    Name(Vec<u8>),
    Str(Vec<u8>),
    Array(Vec<PdfValue>),
    Other,
}

/// A single operation from a PDF content stream.
#[derive(Debug, Clone, PartialEq)]
pub struct ContentOp {
    pub operator: String,
    pub operands: Vec<PdfValue>,
}

impl ContentOp {
    pub fn new(operator: impl Into<String>, operands: Vec<PdfValue>) -> Self {
        Self {
            operator: operator.into(),
            operands,
        }
    }
}

/// Abstract interface for PDF document access.
///
/// Implementations provide page enumeration, font info, content stream
/// decoding and per-page text, without exposing any concrete PDF library types.
pub trait PdfBackend {
    /// Return all pages as (page_number → PageId), in physical page order.
    fn pages(&self) -> BTreeMap<u32, PageId>;

    /// Return font info for a given page.
    fn page_fonts(&self, page: PageId) -> Result<Vec<BackendFontInfo>>;

    /// Return the raw (decompressed) content stream bytes for a page.
    fn page_content(&self, page: PageId) -> Result<Vec<u8>>;

    /// Parse raw content stream bytes into a sequence of operations.
    fn decode_content(&self, data: &[u8]) -> Result<Vec<ContentOp>>;

    /// Reconstruct the visible text of a page from its show-text operators.
    fn page_text(&self, page_num: u32) -> Result<String>;

    /// Decoded operations of a page's content stream.
    fn page_operations(&self, page: PageId) -> Result<Vec<ContentOp>> {
        let content = self.page_content(page)?;
        self.decode_content(&content)
    }
}

// ---------------------------------------------------------------------------
// LopdfBackend: concrete implementation backed by lopdf
// ---------------------------------------------------------------------------

/// Concrete [`PdfBackend`] backed by `lopdf::Document`.
pub struct LopdfBackend {
    doc: LopdfDocument,
}

impl LopdfBackend {
    /// Load from a file path.
    ///
    /// lopdf reads the whole file and closes the handle before returning.
    pub fn load_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let doc = LopdfDocument::load(path)?;
        if doc.is_encrypted() {
            log::warn!("PDF is encrypted; text and fonts may be unreadable");
        }
        Ok(Self { doc })
    }

    fn resolve_contents(&self, contents: &Object, out: &mut Vec<u8>) -> Result<()> {
        match contents {
            Object::Reference(r) => {
                let target = self.doc.get_object(*r)?;
                self.resolve_contents(target, out)
            }
            Object::Stream(s) => {
                out.extend_from_slice(&stream_bytes(s)?);
                out.push(b' ');
                Ok(())
            }
            Object::Array(arr) => {
                for obj in arr {
                    self.resolve_contents(obj, out)?;
                }
                Ok(())
            }
            _ => Err(Error::ExtractionFailed(
                "PDF: invalid content stream".to_string(),
            )),
        }
    }
}

impl PdfBackend for LopdfBackend {
    fn pages(&self) -> BTreeMap<u32, PageId> {
        self.doc.get_pages()
    }

    fn page_fonts(&self, page: PageId) -> Result<Vec<BackendFontInfo>> {
        let lopdf_fonts = self.doc.get_page_fonts(page)?;

        let mut result = Vec::with_capacity(lopdf_fonts.len());
        for (name, font_dict) in &lopdf_fonts {
            let base_font = font_dict
                .get(b"BaseFont")
                .ok()
                .and_then(|o| o.as_name().ok())
                .map(|n| String::from_utf8_lossy(n).to_string());
            result.push(BackendFontInfo {
                name: name.clone(),
                base_font,
            });
        }
        Ok(result)
    }

    fn page_content(&self, page_id: PageId) -> Result<Vec<u8>> {
        let page_dict = self.doc.get_dictionary(page_id)?;

        // A page without /Contents is blank, not broken.
        let contents = match page_dict.get(b"Contents") {
            Ok(contents) => contents,
            Err(_) => return Ok(Vec::new()),
        };

        let mut content = Vec::new();
        self.resolve_contents(contents, &mut content)?;
        Ok(content)
    }

    fn decode_content(&self, data: &[u8]) -> Result<Vec<ContentOp>> {
        let content = lopdf::content::Content::decode(data)?;

        Ok(content
            .operations
            .into_iter()
            .map(|op| ContentOp {
                operator: op.operator,
                operands: op.operands.iter().map(convert_object).collect(),
            })
            .collect())
    }

    fn page_text(&self, page_num: u32) -> Result<String> {
        self.doc
            .extract_text(&[page_num])
            .map_err(|e| Error::ExtractionFailed(format!("PDF page {}: {}", page_num, e)))
    }
}

/// Stream payload, decompressed when the stream declares a filter.
fn stream_bytes(stream: &Stream) -> Result<Vec<u8>> {
    if stream.dict.has(b"Filter") {
        Ok(stream.decompressed_content()?)
    } else {
        Ok(stream.content.clone())
    }
}

/// Convert a `lopdf::Object` to [`PdfValue`].
fn convert_object(obj: &Object) -> PdfValue {
    match obj {
        Object::Integer(i) => PdfValue::Integer(*i),
        Object::Real(r) => PdfValue::Real(*r),
        Object::Name(n) => PdfValue::Name(n.clone()),
        Object::String(b, _) => PdfValue::Str(b.clone()),
        Object::Array(arr) => PdfValue::Array(arr.iter().map(convert_object).collect()),
        _ => PdfValue::Other,
    }
}

/// Helper: extract a number from a [`PdfValue`].
pub fn get_number_from_value(val: &PdfValue) -> Option<f32> {
    match val {
        PdfValue::Integer(i) => Some(*i as f32),
        PdfValue::Real(r) => Some(*r),
        _ => None,
    }
}
