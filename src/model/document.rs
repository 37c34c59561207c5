//! Document-level types.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::path::{Path, PathBuf};

use crate::detect::detect_kind;
use crate::error::Result;

/// Supported document container formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DocumentKind {
    /// Portable Document Format (paged binary container)
    Pdf,
    /// Office Open XML word-processing package
    Docx,
}

impl DocumentKind {
    /// Map a file extension (without the dot, any case) to a kind.
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "pdf" => Some(DocumentKind::Pdf),
            "docx" => Some(DocumentKind::Docx),
            _ => None,
        }
    }
}

impl fmt::Display for DocumentKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DocumentKind::Pdf => write!(f, "PDF"),
            DocumentKind::Docx => write!(f, "DOCX"),
        }
    }
}

/// A resume file that passed format detection.
///
/// Holding a `Document` does not keep the file open; every extraction or
/// analysis call opens it read-only and releases it before returning.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Document {
    path: PathBuf,
    kind: DocumentKind,
}

impl Document {
    /// Validate `path` and wrap it as a document.
    ///
    /// Fails with `NotFound` or `UnsupportedFormat`; nothing is read yet.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let kind = detect_kind(path)?;
        Ok(Self {
            path: path.to_path_buf(),
            kind,
        })
    }

    /// Path of the underlying file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Container format.
    pub fn kind(&self) -> DocumentKind {
        self.kind
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_kind_from_extension() {
        assert_eq!(DocumentKind::from_extension("pdf"), Some(DocumentKind::Pdf));
        assert_eq!(DocumentKind::from_extension("PDF"), Some(DocumentKind::Pdf));
        assert_eq!(
            DocumentKind::from_extension("DocX"),
            Some(DocumentKind::Docx)
        );
        assert_eq!(DocumentKind::from_extension("doc"), None);
        assert_eq!(DocumentKind::from_extension(""), None);
    }

    #[test]
    fn test_kind_display() {
        assert_eq!(DocumentKind::Pdf.to_string(), "PDF");
        assert_eq!(DocumentKind::Docx.to_string(), "DOCX");
    }
}
