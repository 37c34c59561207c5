//! Analysis options and configuration.

use crate::report::JsonFormat;

/// Options for running an analysis operation.
///
/// Formatting thresholds are fixed constants in [`crate::formatting`]
/// and are deliberately not part of these options.
#[derive(Debug, Clone)]
pub struct AnalyzeOptions {
    /// Apply Unicode NFC normalization to extracted text
    pub normalize_unicode: bool,

    /// Layout of the serialized report
    pub json_format: JsonFormat,
}

impl AnalyzeOptions {
    /// Create new options with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Enable or disable NFC normalization of extracted text.
    pub fn with_normalize_unicode(mut self, normalize: bool) -> Self {
        self.normalize_unicode = normalize;
        self
    }

    /// Keep extracted text exactly as the container yields it.
    pub fn raw_text(mut self) -> Self {
        self.normalize_unicode = false;
        self
    }

    /// Set the JSON layout.
    pub fn with_json_format(mut self, format: JsonFormat) -> Self {
        self.json_format = format;
        self
    }

    /// Pretty-print the JSON report.
    pub fn pretty(mut self) -> Self {
        self.json_format = JsonFormat::Pretty;
        self
    }
}

impl Default for AnalyzeOptions {
    fn default() -> Self {
        Self {
            normalize_unicode: true,
            json_format: JsonFormat::Compact,
        }
    }
}
