//! # resume-analyzer
//!
//! Resume analysis for PDF and DOCX documents.
//!
//! This library extracts the text of a resume, segments it into
//! experience, education, skills and summary sections, checks formatting
//! consistency straight from the document's styling metadata, and applies
//! a few shallow grammar heuristics.
//!
//! ## Quick Start
//!
//! ```no_run
//! use resume_analyzer::{run, Operation};
//!
//! fn main() -> resume_analyzer::Result<()> {
//!     let report = run(Operation::Parse, "resume.pdf")?;
//!     for (section, items) in &report.sections {
//!         println!("{}: {:?}", section, items);
//!     }
//!     Ok(())
//! }
//! ```
//!
//! ## Pipeline
//!
//! - [`detect`]: accepts `.pdf` / `.docx` paths that exist
//! - [`extract`]: flattens a document into one text string
//! - [`sections`]: finds section headers and splits their items
//! - [`formatting`]: counts fonts, font sizes or paragraph styles
//! - [`grammar`]: word count and first-person checks
//! - [`report`]: dispatches operations and renders the JSON report

pub mod detect;
pub mod error;
pub mod extract;
pub mod formatting;
pub mod grammar;
pub mod model;
pub mod options;
pub mod parser;
pub mod report;
pub mod sections;

// Re-export commonly used types
pub use error::{Error, Result};
pub use model::{Document, DocumentKind, Section};
pub use options::AnalyzeOptions;
pub use report::{
    run, run_to_report, run_with_options, to_json, AnalysisReport, JsonFormat, Operation,
};
pub use sections::SectionMap;

use std::path::Path;

/// Extract the flattened text of a PDF or DOCX file.
///
/// # Example
///
/// ```no_run
/// use resume_analyzer::extract_text;
///
/// let text = extract_text("resume.docx").unwrap();
/// println!("{}", text);
/// ```
pub fn extract_text<P: AsRef<Path>>(path: P) -> Result<String> {
    let doc = Document::open(path)?;
    extract::extract_text(&doc)
}

/// Segment a file into its four sections.
///
/// # Example
///
/// ```no_run
/// use resume_analyzer::parse_sections;
///
/// let sections = parse_sections("resume.pdf").unwrap();
/// println!("{:?}", sections["skills"]);
/// ```
pub fn parse_sections<P: AsRef<Path>>(path: P) -> Result<SectionMap> {
    let text = extract_text(path)?;
    Ok(sections::segment(&text))
}

/// Items of one section of a file, looked up by name.
///
/// Accepts `experience`, `education`, `skills`, `summary` or `objective`
/// in any case; other names are `InvalidArguments`.
///
/// # Example
///
/// ```no_run
/// use resume_analyzer::parse_section;
///
/// let skills = parse_section("resume.docx", "Skills").unwrap();
/// println!("{:?}", skills);
/// ```
pub fn parse_section<P: AsRef<Path>>(path: P, name: &str) -> Result<Vec<String>> {
    let section: Section = name.parse()?;
    let text = extract_text(path)?;
    Ok(sections::extract_section(&text, section))
}

/// Formatting findings for a file, or the single positive message.
pub fn validate_formatting<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let doc = Document::open(path)?;
    formatting::analyze_formatting(&doc)
}

/// Grammar heuristics over a file's text.
pub fn check_grammar<P: AsRef<Path>>(path: P) -> Result<Vec<String>> {
    let text = extract_text(path)?;
    Ok(grammar::check_grammar(&text))
}
