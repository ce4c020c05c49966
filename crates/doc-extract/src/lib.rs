//! Document extraction for uploads
//!
//! Turns uploaded bytes into either page text (PDF) or a [`Dataset`]
//! (CSV and spreadsheets). The file extension picks the parser.

pub mod error;
pub mod pdf;
pub mod tabular;

use serde::Serialize;
use shared_types::{Dataset, DocumentKind};
use tracing::debug;

pub use error::ExtractError;
pub use pdf::extract_pdf;
pub use tabular::{extract_csv, extract_spreadsheet};

/// Text pulled out of one or more PDFs
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextDocument {
    pub filenames: Vec<String>,
    pub page_count: usize,
    pub text: String,
}

impl TextDocument {
    /// Concatenate documents in upload order, each followed by a blank line
    pub fn combine(documents: Vec<TextDocument>) -> TextDocument {
        let mut combined = TextDocument {
            filenames: Vec::with_capacity(documents.len()),
            page_count: 0,
            text: String::new(),
        };
        for doc in documents {
            combined.filenames.extend(doc.filenames);
            combined.page_count += doc.page_count;
            combined.text.push_str(&doc.text);
            combined.text.push_str("\n\n");
        }
        combined
    }
}

/// A single uploaded table
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TableDocument {
    pub filename: String,
    pub dataset: Dataset,
}

/// The extracted form of an upload, kept for the rest of the session
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExtractedDocument {
    Text(TextDocument),
    Table(TableDocument),
}

impl ExtractedDocument {
    pub fn kind(&self) -> DocumentKind {
        match self {
            ExtractedDocument::Text(_) => DocumentKind::Text,
            ExtractedDocument::Table(_) => DocumentKind::Table,
        }
    }
}

/// Supported upload formats
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SourceFormat {
    Pdf,
    Csv,
    Spreadsheet,
}

impl SourceFormat {
    /// Detect the format from a filename's extension
    pub fn from_filename(filename: &str) -> Result<Self, ExtractError> {
        let ext = std::path::Path::new(filename)
            .extension()
            .and_then(|s| s.to_str())
            .unwrap_or("")
            .to_ascii_lowercase();

        match ext.as_str() {
            "pdf" => Ok(SourceFormat::Pdf),
            "csv" => Ok(SourceFormat::Csv),
            "xls" | "xlsx" | "ods" => Ok(SourceFormat::Spreadsheet),
            _ => Err(ExtractError::UnsupportedFormat(filename.to_string())),
        }
    }
}

/// Extract a single file
pub fn extract(filename: &str, bytes: &[u8]) -> Result<ExtractedDocument, ExtractError> {
    match SourceFormat::from_filename(filename)? {
        SourceFormat::Pdf => extract_pdf(filename, bytes).map(ExtractedDocument::Text),
        SourceFormat::Csv => extract_csv(filename, bytes).map(ExtractedDocument::Table),
        SourceFormat::Spreadsheet => {
            extract_spreadsheet(filename, bytes).map(ExtractedDocument::Table)
        }
    }
}

/// Extract everything uploaded in one action
///
/// Several PDFs are combined into one text document; tabular uploads must
/// be a single file. Any failing file fails the whole upload.
pub fn extract_upload(files: &[(String, Vec<u8>)]) -> Result<ExtractedDocument, ExtractError> {
    if files.is_empty() {
        return Err(ExtractError::NoFiles);
    }

    let formats = files
        .iter()
        .map(|(name, _)| SourceFormat::from_filename(name))
        .collect::<Result<Vec<_>, _>>()?;

    if formats.iter().all(|f| *f == SourceFormat::Pdf) {
        let documents = files
            .iter()
            .map(|(name, bytes)| extract_pdf(name, bytes))
            .collect::<Result<Vec<_>, _>>()?;
        let combined = TextDocument::combine(documents);
        debug!(
            "Combined {} PDF(s), {} pages, {} chars",
            combined.filenames.len(),
            combined.page_count,
            combined.text.len()
        );
        return Ok(ExtractedDocument::Text(combined));
    }

    if formats.iter().any(|f| *f == SourceFormat::Pdf) {
        return Err(ExtractError::MixedUpload);
    }
    if files.len() > 1 {
        return Err(ExtractError::MultipleTables);
    }

    let (name, bytes) = &files[0];
    extract(name, bytes)
}
