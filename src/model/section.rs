//! Resume section identifiers.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A named resume region the segmenter extracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Section {
    Experience,
    Education,
    Skills,
    /// Also matched by an "Objective" header.
    Summary,
}

impl Section {
    /// All sections, in report order.
    pub const ALL: [Section; 4] = [
        Section::Experience,
        Section::Education,
        Section::Skills,
        Section::Summary,
    ];

    /// Key used for this section in the report mapping.
    pub fn name(&self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Summary => "summary",
        }
    }

    /// Header alternatives, as a regex alternation.
    pub fn header_pattern(&self) -> &'static str {
        match self {
            Section::Experience => "experience",
            Section::Education => "education",
            Section::Skills => "skills",
            Section::Summary => "summary|objective",
        }
    }
}

impl fmt::Display for Section {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Section {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "experience" => Ok(Section::Experience),
            "education" => Ok(Section::Education),
            "skills" => Ok(Section::Skills),
            "summary" | "objective" | "summary|objective" => Ok(Section::Summary),
            other => Err(Error::InvalidArguments(format!(
                "Unknown section: {}",
                other
            ))),
        }
    }
}
