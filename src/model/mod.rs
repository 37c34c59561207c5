//! Document model types.
//!
//! A [`Document`] is a validated handle to a resume file on disk; a
//! [`Section`] names one of the resume regions the segmenter looks for.

mod document;
mod section;

pub use document::{Document, DocumentKind};
pub use section::Section;
