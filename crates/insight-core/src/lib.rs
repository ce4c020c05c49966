//! Insight processing core
//!
//! This crate holds the deterministic parts of the pipeline:
//! - Section splitting of the model's raw answer
//! - Prompt templates for decks and reports
//! - Column kind inference and numeric summaries for tabular uploads
//! - Chart selection for HTML reports

pub mod charts;
pub mod columns;
pub mod error;
pub mod prompt;
pub mod splitter;
pub mod summary;

pub use charts::{plan_charts, ChartPlan};
pub use columns::{infer_column_kinds, parse_date, ColumnKind};
pub use error::DatasetError;
pub use prompt::{dataset_digest, PromptTemplate};
pub use splitter::split_sections;
pub use summary::{describe, ColumnSummary, NumericSummary};
