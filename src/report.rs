//! Report assembly: operation dispatch and the JSON wire format.
//!
//! [`run`] returns an explicit `Result`; [`run_to_report`] collapses any
//! error into an [`AnalysisReport`] whose `error` field is set, which is
//! the only shape that crosses the process boundary.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::extract::extract_text_with_options;
use crate::formatting::analyze_formatting;
use crate::grammar::check_grammar;
use crate::model::Document;
use crate::options::AnalyzeOptions;
use crate::sections::{segment, SectionMap};

/// A named analysis operation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// Segment the text into sections
    Parse,
    /// Check formatting consistency
    Validate,
    /// Run the grammar heuristics
    Grammar,
    /// All of the above in one report
    Analyze,
}

impl Operation {
    pub fn name(&self) -> &'static str {
        match self {
            Operation::Parse => "parse",
            Operation::Validate => "validate",
            Operation::Grammar => "grammar",
            Operation::Analyze => "analyze",
        }
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Operation {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self> {
        match s.to_lowercase().as_str() {
            "parse" => Ok(Operation::Parse),
            "validate" => Ok(Operation::Validate),
            "grammar" => Ok(Operation::Grammar),
            "analyze" => Ok(Operation::Analyze),
            _ => Err(Error::UnknownOperation(s.to_string())),
        }
    }
}

/// Top-level result of one operation.
///
/// When `error` is set the other collections are void and left empty.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisReport {
    pub sections: SectionMap,
    pub formatting_errors: Vec<String>,
    pub grammar_issues: Vec<String>,
    pub error: Option<String>,
}

impl AnalysisReport {
    /// Create an empty, successful report.
    pub fn new() -> Self {
        Self::default()
    }

    /// A report carrying only an error, formatted as `"<kind>: <message>"`.
    pub fn failed(err: &Error) -> Self {
        Self {
            error: Some(format!("{}: {}", err.kind(), err)),
            ..Self::default()
        }
    }

    pub fn is_error(&self) -> bool {
        self.error.is_some()
    }

    /// Process exit status for this report.
    pub fn exit_code(&self) -> i32 {
        if self.is_error() {
            1
        } else {
            0
        }
    }
}

/// JSON output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum JsonFormat {
    /// Pretty-printed JSON with indentation
    Pretty,
    /// Compact JSON without extra whitespace
    #[default]
    Compact,
}

/// Serialize a report to JSON.
pub fn to_json(report: &AnalysisReport, format: JsonFormat) -> Result<String> {
    let result = match format {
        JsonFormat::Pretty => serde_json::to_string_pretty(report),
        JsonFormat::Compact => serde_json::to_string(report),
    };

    result.map_err(|e| Error::Render(format!("JSON serialization error: {}", e)))
}

/// Run an operation against a file.
///
/// # Example
///
/// ```no_run
/// use resume_analyzer::report::{run, Operation};
///
/// let report = run(Operation::Parse, "resume.docx").unwrap();
/// println!("{:?}", report.sections["experience"]);
/// ```
pub fn run<P: AsRef<Path>>(operation: Operation, path: P) -> Result<AnalysisReport> {
    run_with_options(operation, path, &AnalyzeOptions::default())
}

/// Run an operation against a file with custom options.
///
/// The path is validated before any extraction is attempted.
pub fn run_with_options<P: AsRef<Path>>(
    operation: Operation,
    path: P,
    options: &AnalyzeOptions,
) -> Result<AnalysisReport> {
    let doc = Document::open(path)?;
    log::debug!("Running '{}' on {}", operation, doc.path().display());

    let mut report = AnalysisReport::new();
    match operation {
        Operation::Parse => {
            let text = extract_text_with_options(&doc, options)?;
            report.sections = segment(&text);
        }
        Operation::Validate => {
            report.formatting_errors = analyze_formatting(&doc)?;
        }
        Operation::Grammar => {
            let text = extract_text_with_options(&doc, options)?;
            report.grammar_issues = check_grammar(&text);
        }
        Operation::Analyze => {
            let text = extract_text_with_options(&doc, options)?;
            report.sections = segment(&text);
            report.grammar_issues = check_grammar(&text);
            report.formatting_errors = analyze_formatting(&doc)?;
        }
    }
    Ok(report)
}

/// Run a named operation, folding every failure into the report.
pub fn run_to_report<P: AsRef<Path>>(
    operation: &str,
    path: P,
    options: &AnalyzeOptions,
) -> AnalysisReport {
    let result = operation
        .parse::<Operation>()
        .and_then(|op| run_with_options(op, path, options));

    match result {
        Ok(report) => report,
        Err(err) => {
            log::debug!("Operation '{}' failed: {}", operation, err);
            AnalysisReport::failed(&err)
        }
    }
}
