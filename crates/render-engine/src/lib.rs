//! Document rendering
//!
//! This crate turns generated insights into deliverables:
//! - Slide decks (`.pptx`), one slide per section after a title slide
//! - HTML reports with insights, charts and a numeric summary table

pub mod errors;
pub mod output;
pub mod pptx;
pub mod report;

pub use errors::RenderError;
pub use output::OutputFormat;
pub use pptx::{build_deck, DeckOptions, RenderedDeck};
pub use report::{render_report, ReportInput};
