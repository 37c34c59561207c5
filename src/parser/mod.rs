//! Container parsing: the PDF backend seam and the DOCX package reader.

mod backend;
mod docx;

pub use backend::{
    get_number_from_value, BackendFontInfo, ContentOp, LopdfBackend, PageId, PdfBackend, PdfValue,
};
pub use docx::{DocxPackage, StyleEntry};
