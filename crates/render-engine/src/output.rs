//! Output format handling (PPTX, HTML)

use serde::{Deserialize, Serialize};

/// Output format for generated documents
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Pptx,
    Html,
}

impl OutputFormat {
    /// Get the MIME type for this format
    pub fn mime_type(&self) -> &'static str {
        match self {
            OutputFormat::Pptx => {
                "application/vnd.openxmlformats-officedocument.presentationml.presentation"
            }
            OutputFormat::Html => "text/html",
        }
    }

    /// Get the file extension for this format
    pub fn extension(&self) -> &'static str {
        match self {
            OutputFormat::Pptx => "pptx",
            OutputFormat::Html => "html",
        }
    }

    /// Suggested download name
    pub fn default_filename(&self) -> String {
        match self {
            OutputFormat::Pptx => format!("strategic_analysis.{}", self.extension()),
            OutputFormat::Html => format!("insight_report.{}", self.extension()),
        }
    }
}

impl std::fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.extension())
    }
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pptx" | "deck" => Ok(OutputFormat::Pptx),
            "html" | "report" => Ok(OutputFormat::Html),
            other => Err(format!("Unknown output format: {}", other)),
        }
    }
}
