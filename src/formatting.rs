//! Formatting-consistency analysis.
//!
//! Collects a [`StyleSignature`] straight from the container (fonts and
//! font sizes selected by `Tf` operators for PDF, paragraph styles of the
//! style catalog for DOCX) and flags excess variety. The thresholds are
//! fixed constants and not configurable.

use std::collections::BTreeSet;

use crate::error::Result;
use crate::model::{Document, DocumentKind};
use crate::parser::{
    get_number_from_value, BackendFontInfo, ContentOp, DocxPackage, LopdfBackend, PageId,
    PdfBackend, PdfValue, StyleEntry,
};

/// Maximum distinct fonts before a PDF is flagged.
pub const MAX_FONTS: usize = 3;

/// Maximum distinct font sizes before a PDF is flagged.
pub const MAX_FONT_SIZES: usize = 4;

/// Maximum distinct paragraph styles before a DOCX is flagged.
pub const MAX_PARAGRAPH_STYLES: usize = 5;

/// The single message reported when no threshold is exceeded.
pub const GOOD_FORMATTING: &str = "Good formatting consistency";

/// A font size, kept in hundredths of a point so it can be compared and ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct FontSize(i64);

impl FontSize {
    pub fn from_points(points: f32) -> Self {
        FontSize((f64::from(points) * 100.0).round() as i64)
    }
}

/// Distinct fonts and font sizes observed across a PDF.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PdfStyleSignature {
    pub fonts: BTreeSet<String>,
    pub font_sizes: BTreeSet<FontSize>,
}

/// Distinct paragraph style identifiers defined in a DOCX.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DocxStyleSignature {
    pub paragraph_styles: BTreeSet<String>,
}

/// Style attributes observed across a whole document.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StyleSignature {
    Pdf(PdfStyleSignature),
    Docx(DocxStyleSignature),
}

impl StyleSignature {
    /// One message per exceeded threshold; empty when none is exceeded.
    pub fn findings(&self) -> Vec<String> {
        let mut errors = Vec::new();
        match self {
            StyleSignature::Pdf(sig) => {
                if sig.fonts.len() > MAX_FONTS {
                    errors.push(format!(
                        "Too many fonts ({}) - Use maximum 2-3 fonts",
                        sig.fonts.len()
                    ));
                }
                if sig.font_sizes.len() > MAX_FONT_SIZES {
                    errors.push(format!(
                        "Too many font sizes ({}) - Use 2-3 sizes max",
                        sig.font_sizes.len()
                    ));
                }
            }
            StyleSignature::Docx(sig) => {
                if sig.paragraph_styles.len() > MAX_PARAGRAPH_STYLES {
                    errors.push(format!(
                        "Too many paragraph styles ({}) - Simplify formatting",
                        sig.paragraph_styles.len()
                    ));
                }
            }
        }
        errors
    }

    /// Findings, or the single positive message when there are none.
    pub fn report(&self) -> Vec<String> {
        let errors = self.findings();
        if errors.is_empty() {
            vec![GOOD_FORMATTING.to_string()]
        } else {
            errors
        }
    }
}

/// Analyze a document's formatting consistency.
///
/// # Example
///
/// ```no_run
/// use resume_analyzer::{formatting::analyze_formatting, Document};
///
/// let doc = Document::open("resume.pdf").unwrap();
/// for message in analyze_formatting(&doc).unwrap() {
///     println!("{}", message);
/// }
/// ```
pub fn analyze_formatting(doc: &Document) -> Result<Vec<String>> {
    Ok(style_signature(doc)?.report())
}

/// Build the style signature of a document.
pub fn style_signature(doc: &Document) -> Result<StyleSignature> {
    match doc.kind() {
        DocumentKind::Pdf => {
            let backend = LopdfBackend::load_file(doc.path())?;
            Ok(StyleSignature::Pdf(scan_pdf(&backend)?))
        }
        DocumentKind::Docx => {
            let mut package = DocxPackage::open(doc.path())?;
            Ok(StyleSignature::Docx(scan_docx_styles(&package.styles()?)))
        }
    }
}

/// Fold every page's font selections into one signature.
///
/// A page that cannot be scanned fails the whole scan.
pub fn scan_pdf<B: PdfBackend>(backend: &B) -> Result<PdfStyleSignature> {
    let signature = backend
        .pages()
        .into_iter()
        .try_fold(PdfStyleSignature::default(), |sig, (page_num, page_id)| {
            log::debug!("Scanning fonts on page {}", page_num);
            scan_page(backend, page_id, sig)
        })?;

    log::debug!(
        "PDF style signature: {} fonts, {} sizes",
        signature.fonts.len(),
        signature.font_sizes.len()
    );
    Ok(signature)
}

fn scan_page<B: PdfBackend>(
    backend: &B,
    page: PageId,
    signature: PdfStyleSignature,
) -> Result<PdfStyleSignature> {
    let fonts = backend.page_fonts(page)?;
    let ops = backend.page_operations(page)?;

    Ok(ops
        .iter()
        .filter_map(font_selection)
        .fold(signature, |mut sig, (resource, size)| {
            sig.fonts.insert(resolve_font_name(&fonts, resource));
            match size {
                Some(size) => {
                    sig.font_sizes.insert(FontSize::from_points(size));
                }
                None => log::warn!("Tf operator without a numeric size"),
            }
            sig
        }))
}

/// Font resource name and size of a `Tf` operator.
fn font_selection(op: &ContentOp) -> Option<(&[u8], Option<f32>)> {
    if op.operator != "Tf" || op.operands.len() < 2 {
        return None;
    }
    match &op.operands[0] {
        PdfValue::Name(name) if !name.is_empty() => {
            Some((name.as_slice(), get_number_from_value(&op.operands[1])))
        }
        _ => None,
    }
}

/// Base font behind a resource name, falling back to the resource name itself.
fn resolve_font_name(fonts: &[BackendFontInfo], resource: &[u8]) -> String {
    fonts
        .iter()
        .find(|f| f.name == resource)
        .and_then(|f| f.base_font.as_deref())
        .map(|base| strip_subset_prefix(base).to_string())
        .unwrap_or_else(|| String::from_utf8_lossy(resource).to_string())
}

/// Drop an embedded-subset tag such as `ABCDEF+` from a font name.
fn strip_subset_prefix(name: &str) -> &str {
    match name.split_once('+') {
        Some((tag, rest))
            if tag.len() == 6 && tag.bytes().all(|b| b.is_ascii_uppercase()) && !rest.is_empty() =>
        {
            rest
        }
        _ => name,
    }
}

/// Distinct non-empty style ids of a style catalog, whatever their `w:type`.
pub fn scan_docx_styles(entries: &[StyleEntry]) -> DocxStyleSignature {
    let paragraph_styles: BTreeSet<String> = entries
        .iter()
        .filter(|entry| !entry.id.is_empty())
        .map(|entry| entry.id.clone())
        .collect();

    log::debug!("DOCX style signature: {} paragraph styles", paragraph_styles.len());
    DocxStyleSignature { paragraph_styles }
}
