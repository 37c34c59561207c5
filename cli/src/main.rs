//! resume-analyzer CLI - one operation on one resume, one JSON report on stdout

use std::path::PathBuf;

use clap::error::ErrorKind;
use clap::Parser;

use resume_analyzer::{run_to_report, to_json, AnalysisReport, AnalyzeOptions, Error, JsonFormat};

#[derive(Parser, Debug)]
#[command(name = "resume-analyzer")]
#[command(version)]
#[command(about = "Parse, validate and grammar-check PDF/DOCX resumes", long_about = None)]
struct Cli {
    /// Operation: parse, validate, grammar or analyze (case-insensitive)
    #[arg(value_name = "OPERATION")]
    operation: String,

    /// Resume file (.pdf or .docx)
    #[arg(value_name = "FILE")]
    file: PathBuf,

    /// Pretty-print the JSON report
    #[arg(long, env = "RESUME_ANALYZER_PRETTY")]
    pretty: bool,

    /// Skip Unicode NFC normalization of extracted text
    #[arg(long)]
    raw_text: bool,
}

impl Cli {
    fn options(&self) -> AnalyzeOptions {
        let mut options = AnalyzeOptions::new();
        if self.pretty {
            options = options.pretty();
        }
        if self.raw_text {
            options = options.raw_text();
        }
        options
    }
}

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        Err(e) if matches!(e.kind(), ErrorKind::DisplayHelp | ErrorKind::DisplayVersion) => {
            e.exit()
        }
        Err(e) => {
            let report = AnalysisReport::failed(&Error::InvalidArguments(usage_message(&e)));
            std::process::exit(emit(&report, JsonFormat::Compact));
        }
    };

    let options = cli.options();
    let report = run_to_report(&cli.operation, &cli.file, &options);
    std::process::exit(emit(&report, options.json_format));
}

/// Print the report and return the process exit status.
fn emit(report: &AnalysisReport, format: JsonFormat) -> i32 {
    match to_json(report, format) {
        Ok(json) => {
            println!("{}", json);
            report.exit_code()
        }
        Err(e) => {
            log::error!("{}", e);
            println!(
                r#"{{"sections":{{}},"formattingErrors":[],"grammarIssues":[],"error":"RenderFailed"}}"#
            );
            1
        }
    }
}

fn usage_message(err: &clap::Error) -> String {
    let detail = err
        .to_string()
        .lines()
        .next()
        .unwrap_or_default()
        .trim_start_matches("error: ")
        .to_string();
    format!(
        "{} (usage: resume-analyzer <OPERATION> <FILE>; operations: parse, validate, grammar, analyze)",
        detail
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_two_positionals() {
        let cli = Cli::try_parse_from(["resume-analyzer", "PARSE", "cv.docx"]).unwrap();
        assert_eq!(cli.operation, "PARSE");
        assert_eq!(cli.file, PathBuf::from("cv.docx"));
        assert!(!cli.raw_text);
    }

    #[test]
    fn test_flags_map_to_options() {
        let cli =
            Cli::try_parse_from(["resume-analyzer", "grammar", "cv.pdf", "--pretty", "--raw-text"])
                .unwrap();
        let options = cli.options();
        assert_eq!(options.json_format, JsonFormat::Pretty);
        assert!(!options.normalize_unicode);
    }

    #[test]
    fn test_missing_file_argument_is_usage_error() {
        let err = Cli::try_parse_from(["resume-analyzer", "parse"]).unwrap_err();
        assert_eq!(err.kind(), ErrorKind::MissingRequiredArgument);
        assert!(usage_message(&err).contains("usage: resume-analyzer"));
    }

    #[test]
    fn test_missing_document_report() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("absent.pdf");
        let report = run_to_report("parse", &path, &AnalyzeOptions::default());

        assert!(report.error.as_deref().unwrap().starts_with("NotFound:"));
        assert_eq!(report.exit_code(), 1);
    }
}
