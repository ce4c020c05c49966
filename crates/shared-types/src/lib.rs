//! Data model shared by the insightdeck crates
//!
//! Holds the records that flow through the pipeline: extracted tabular
//! data, prompt requests, the model's raw insight text and the titled
//! sections handed to the renderers.

pub mod tabular;
pub mod types;

pub use tabular::{CellValue, Dataset};
pub use types::{DocumentKind, InsightText, PromptRequest, Section, SectionSequence};
