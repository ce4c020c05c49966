//! Prompt templates
//!
//! Each generation variant differs only in the wording sent to the model
//! and the token ceiling. Templates ask for numbered sections separated by
//! blank lines so the splitter has something to work with, but nothing
//! downstream relies on the model complying.

use serde::{Deserialize, Serialize};
use shared_types::{Dataset, PromptRequest};

use crate::columns::infer_column_kinds;
use crate::summary::NumericSummary;

/// Token ceiling for slide-deck outlines
pub const PRESENTATION_MAX_TOKENS: u32 = 1500;
/// Token ceiling for report insights
pub const REPORT_MAX_TOKENS: u32 = 1000;

const SAMPLE_ROWS: usize = 5;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PromptTemplate {
    /// Deck outline from extracted document text
    PresentationFromText,
    /// Deck outline from a dataset digest
    PresentationFromData,
    /// Report insights from a dataset digest
    ReportFromData,
}

impl PromptTemplate {
    pub fn max_tokens(&self) -> u32 {
        match self {
            PromptTemplate::PresentationFromText | PromptTemplate::PresentationFromData => {
                PRESENTATION_MAX_TOKENS
            }
            PromptTemplate::ReportFromData => REPORT_MAX_TOKENS,
        }
    }

    /// Fill the template with source material
    pub fn build(&self, material: &str) -> PromptRequest {
        let prompt = match self {
            PromptTemplate::PresentationFromText => format!(
                "You are a strategy consultant. Based on the following text, create a \
                 structured presentation outline.\n\n\
                 Text:\n{material}\n\n\
                 {sections}",
                sections = PRESENTATION_SECTIONS
            ),
            PromptTemplate::PresentationFromData => format!(
                "You are a strategy consultant. Based on the following dataset summary, \
                 create a structured presentation outline.\n\n\
                 Data:\n{material}\n\n\
                 {sections}",
                sections = PRESENTATION_SECTIONS
            ),
            PromptTemplate::ReportFromData => format!(
                "You are a data analyst. Analyze the following dataset summary and write \
                 insights for a business report.\n\n\
                 Data:\n{material}\n\n\
                 Please provide:\n\
                 1. Key trends (2-3 points)\n\
                 2. Notable patterns or anomalies (2-3 points)\n\
                 3. Recommendations (2-3 actionable items)\n\n\
                 {rules}",
                rules = FORMAT_RULES
            ),
        };

        PromptRequest {
            prompt,
            max_tokens: self.max_tokens(),
        }
    }
}

const PRESENTATION_SECTIONS: &str = "Please provide:\n\
    1. An executive summary (2-3 key points)\n\
    2. Main findings (3-4 points with supporting details)\n\
    3. Recommendations (2-3 actionable items)\n\
    4. Next steps (2-3 concrete actions)\n\n\
    Format each section as clear, concise bullet points suitable for a presentation. \
    Start each section with its numbered heading on its own line and separate \
    sections with a blank line.";

const FORMAT_RULES: &str = "Start each section with its numbered heading on its own line \
    and separate sections with a blank line.";

/// Describe a dataset for the model: shape, columns, statistics and a sample
pub fn dataset_digest(dataset: &Dataset, summary: &NumericSummary) -> String {
    let kinds = infer_column_kinds(dataset);
    let mut out = format!(
        "Dataset '{}': {} rows x {} columns\n\nColumns:\n",
        dataset.name,
        dataset.row_count(),
        dataset.column_count()
    );
    for (name, kind) in dataset.columns.iter().zip(kinds.iter()) {
        out.push_str(&format!("- {} ({})\n", name, kind.as_str()));
    }

    out.push_str("\nSummary statistics:\n");
    out.push_str(&summary.to_text_table());

    out.push_str(&format!("\nFirst {} rows:\n", SAMPLE_ROWS.min(dataset.row_count())));
    out.push_str(&dataset.columns.join(" | "));
    out.push('\n');
    for row in dataset.rows.iter().take(SAMPLE_ROWS) {
        let cells: Vec<String> = row.iter().map(|c| c.to_string()).collect();
        out.push_str(&cells.join(" | "));
        out.push('\n');
    }
    out
}
