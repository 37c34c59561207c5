//! Error types for resume-analyzer.

use std::io;
use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for resume-analyzer operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Error types that can occur while analyzing a resume.
#[derive(Error, Debug)]
pub enum Error {
    /// The input path does not point to an existing file.
    #[error("File not found: {}", .0.display())]
    NotFound(PathBuf),

    /// The file extension is neither `.pdf` nor `.docx`.
    #[error("Unsupported file format '{0}': only PDF and DOCX files are supported")]
    UnsupportedFormat(String),

    /// The document container, XML part or content stream could not be read.
    #[error("Failed to extract text: {0}")]
    ExtractionFailed(String),

    /// The requested operation name is not one the dispatcher knows.
    #[error("Invalid command: {0}")]
    UnknownOperation(String),

    /// Command-line arguments could not be interpreted.
    #[error("{0}")]
    InvalidArguments(String),

    /// Error while serializing a report.
    #[error("Rendering error: {0}")]
    Render(String),
}

impl Error {
    /// Stable name of the error kind, used as the prefix of the wire `error` field.
    pub fn kind(&self) -> &'static str {
        match self {
            Error::NotFound(_) => "NotFound",
            Error::UnsupportedFormat(_) => "UnsupportedFormat",
            Error::ExtractionFailed(_) => "ExtractionFailed",
            Error::UnknownOperation(_) => "UnknownOperation",
            Error::InvalidArguments(_) => "InvalidArguments",
            Error::Render(_) => "RenderFailed",
        }
    }
}

impl From<io::Error> for Error {
    fn from(err: io::Error) -> Self {
        Error::ExtractionFailed(err.to_string())
    }
}

impl From<lopdf::Error> for Error {
    fn from(err: lopdf::Error) -> Self {
        Error::ExtractionFailed(format!("PDF: {}", err))
    }
}

impl From<zip::result::ZipError> for Error {
    fn from(err: zip::result::ZipError) -> Self {
        Error::ExtractionFailed(format!("DOCX package: {}", err))
    }
}

impl From<quick_xml::Error> for Error {
    fn from(err: quick_xml::Error) -> Self {
        Error::ExtractionFailed(format!("DOCX XML: {}", err))
    }
}

impl From<quick_xml::events::attributes::AttrError> for Error {
    fn from(err: quick_xml::events::attributes::AttrError) -> Self {
        Error::ExtractionFailed(format!("DOCX XML attribute: {}", err))
    }
}
