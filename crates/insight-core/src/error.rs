use thiserror::Error;

/// Reasons a tabular dataset cannot be summarised or reported on
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DatasetError {
    #[error("Dataset '{0}' has no data rows")]
    Empty(String),

    #[error("Dataset '{0}' has no numeric columns to analyze")]
    NoNumericColumns(String),
}
