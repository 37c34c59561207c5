//! Text extraction over PDF and DOCX documents.
//!
//! Each document kind has one extractor variant; both produce a single
//! flattened string with one line-terminated fragment per page (PDF) or
//! per paragraph (DOCX). Any container, XML or content-stream failure
//! surfaces as [`Error::ExtractionFailed`](crate::Error::ExtractionFailed).

use std::path::Path;

use unicode_normalization::UnicodeNormalization;

use crate::error::Result;
use crate::model::{Document, DocumentKind};
use crate::options::AnalyzeOptions;
use crate::parser::{DocxPackage, LopdfBackend, PdfBackend};

/// Text extractor, one variant per document kind.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TextExtractor {
    Pdf,
    Docx,
}

impl TextExtractor {
    /// Select the extractor for a document kind.
    pub fn for_kind(kind: DocumentKind) -> Self {
        match kind {
            DocumentKind::Pdf => TextExtractor::Pdf,
            DocumentKind::Docx => TextExtractor::Docx,
        }
    }

    /// Extract the flattened text of the file at `path`.
    ///
    /// The file is opened for the duration of this call only.
    pub fn extract(&self, path: &Path) -> Result<String> {
        match self {
            TextExtractor::Pdf => {
                let backend = LopdfBackend::load_file(path)?;
                extract_pdf_text(&backend)
            }
            TextExtractor::Docx => {
                let mut package = DocxPackage::open(path)?;
                package.body_text()
            }
        }
    }
}

/// Extract the flattened text of a document, NFC-normalized.
///
/// # Example
///
/// ```no_run
/// use resume_analyzer::{extract::extract_text, Document};
///
/// let doc = Document::open("resume.docx").unwrap();
/// let text = extract_text(&doc).unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text(doc: &Document) -> Result<String> {
    extract_text_with_options(doc, &AnalyzeOptions::default())
}

/// Extract the flattened text of a document with custom options.
pub fn extract_text_with_options(doc: &Document, options: &AnalyzeOptions) -> Result<String> {
    let text = TextExtractor::for_kind(doc.kind()).extract(doc.path())?;
    log::debug!(
        "Extracted {} chars from {} {}",
        text.len(),
        doc.kind(),
        doc.path().display()
    );

    if options.normalize_unicode {
        Ok(text.nfc().collect())
    } else {
        Ok(text)
    }
}

/// Concatenate page texts in ascending page order, one line break after each page.
pub fn extract_pdf_text<B: PdfBackend>(backend: &B) -> Result<String> {
    let mut text = String::new();
    for page_num in backend.pages().keys() {
        let page_text = backend.page_text(*page_num)?;
        log::debug!("Page {}: {} chars", page_num, page_text.len());
        text.push_str(&page_text);
        text.push('\n');
    }
    Ok(text)
}
