//! PDF text extraction
//!
//! Page count comes from lopdf, text from pdf-extract. Error messages from
//! either library are sorted into the password / corrupt cases so the user
//! sees something actionable.

use pdf_extract::extract_text_from_mem;
use tracing::debug;

use crate::error::ExtractError;
use crate::TextDocument;

/// Extract the text of one PDF
pub fn extract_pdf(filename: &str, bytes: &[u8]) -> Result<TextDocument, ExtractError> {
    let document =
        lopdf::Document::load_mem(bytes).map_err(|e| classify_error(filename, &e.to_string()))?;

    if document.is_encrypted() {
        return Err(ExtractError::PasswordProtected(filename.to_string()));
    }

    let page_count = document.get_pages().len();

    let text = extract_text_from_mem(bytes).map_err(|e| classify_error(filename, &e.to_string()))?;

    if text.trim().is_empty() {
        return Err(ExtractError::NoText(filename.to_string()));
    }

    debug!(
        "Extracted {} chars from {} page(s) of {}",
        text.len(),
        page_count,
        filename
    );

    Ok(TextDocument {
        filenames: vec![filename.to_string()],
        page_count,
        text,
    })
}

fn classify_error(filename: &str, message: &str) -> ExtractError {
    let lower = message.to_lowercase();
    if lower.contains("encrypt") || lower.contains("password") {
        ExtractError::PasswordProtected(filename.to_string())
    } else {
        ExtractError::corrupted(filename, message)
    }
}
