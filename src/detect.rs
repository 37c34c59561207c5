//! Document format detection and validation.
//!
//! The format is decided by file extension alone; content is never sniffed.

use crate::error::{Error, Result};
use crate::model::DocumentKind;
use std::path::Path;

/// Detect the document kind of a file path.
///
/// # Returns
/// * `Ok(DocumentKind)` if the file exists and ends in `.pdf` or `.docx` (any case)
/// * `Err(Error::NotFound)` if the path is not an existing file
/// * `Err(Error::UnsupportedFormat)` for any other extension
///
/// # Example
/// ```no_run
/// use resume_analyzer::detect::detect_kind;
///
/// let kind = detect_kind("resume.PDF").unwrap();
/// println!("format: {}", kind);
/// ```
pub fn detect_kind<P: AsRef<Path>>(path: P) -> Result<DocumentKind> {
    let path = path.as_ref();

    if !path.is_file() {
        return Err(Error::NotFound(path.to_path_buf()));
    }

    detect_kind_from_extension(path)
}

/// Map a path's extension to a document kind without touching the filesystem.
pub fn detect_kind_from_extension<P: AsRef<Path>>(path: P) -> Result<DocumentKind> {
    let ext = path
        .as_ref()
        .extension()
        .and_then(|e| e.to_str())
        .unwrap_or_default();

    DocumentKind::from_extension(ext).ok_or_else(|| {
        if ext.is_empty() {
            Error::UnsupportedFormat("(none)".to_string())
        } else {
            Error::UnsupportedFormat(format!(".{}", ext))
        }
    })
}
