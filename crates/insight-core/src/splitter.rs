//! Section splitter
//!
//! Turns the model's unstructured answer into titled sections, one per
//! slide or report block.
//!
//! This is a best-effort heuristic, not a grammar. The model is asked to
//! number its sections and separate them with blank lines, but nothing
//! guarantees it does, so the split is approximate by contract:
//!
//! 1. The text is cut on every `"\n\n"`.
//! 2. Each block is trimmed of whitespace and the ASCII separator controls
//!    `\x1c`..=`\x1f`; blocks that become empty are dropped.
//! 3. The first line of a block is the title, the remaining lines joined
//!    with `'\n'` are the body (empty when there are none).
//!
//! The function is total. Any input, including an empty or all-whitespace
//! string, yields a (possibly empty) sequence so callers can always render
//! a deck or report.

use shared_types::{Section, SectionSequence};

/// Paragraph delimiter the model is prompted to use between sections
pub const SECTION_DELIMITER: &str = "\n\n";

/// Split raw insight text into ordered sections
pub fn split_sections(text: &str) -> SectionSequence {
    text.split(SECTION_DELIMITER)
        .map(|block| block.trim_matches(is_blank))
        .filter(|block| !block.is_empty())
        .map(block_to_section)
        .collect::<Vec<_>>()
        .into()
}

fn is_blank(c: char) -> bool {
    c.is_whitespace() || ('\u{1c}'..='\u{1f}').contains(&c)
}

fn block_to_section(block: &str) -> Section {
    match block.split_once('\n') {
        Some((title, body)) => Section::new(title, body),
        None => Section::new(block, ""),
    }
}
