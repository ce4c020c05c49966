//! Error types for document assembly

use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Archive error: {0}")]
    Archive(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Chart error: {0}")]
    Chart(String),
}

impl From<zip::result::ZipError> for RenderError {
    fn from(err: zip::result::ZipError) -> Self {
        RenderError::Archive(err.to_string())
    }
}
