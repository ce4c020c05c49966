use thiserror::Error;

/// File-read and parse failures for uploaded documents
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("Unsupported file type: '{0}' (expected .pdf, .csv, .xls, .xlsx or .ods)")]
    UnsupportedFormat(String),

    #[error("Could not read '{filename}': {message}")]
    Corrupted { filename: String, message: String },

    #[error("'{0}' is password protected")]
    PasswordProtected(String),

    #[error("No extractable text in '{0}' (scanned documents are not supported)")]
    NoText(String),

    #[error("'{0}' contains no table data")]
    EmptyTable(String),

    #[error("No files uploaded")]
    NoFiles,

    #[error("Upload mixes PDF and tabular files")]
    MixedUpload,

    #[error("Only one tabular file can be uploaded at a time")]
    MultipleTables,
}

impl ExtractError {
    pub(crate) fn corrupted(filename: &str, message: impl std::fmt::Display) -> Self {
        ExtractError::Corrupted {
            filename: filename.to_string(),
            message: message.to_string(),
        }
    }
}
