//! Error types for the insight server

use axum::{
    extract::rejection::{JsonRejection, PathRejection, QueryRejection},
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use completion_client::CompletionError;
use doc_extract::ExtractError;
use insight_core::DatasetError;
use render_engine::RenderError;
use serde::Serialize;
use thiserror::Error;
use tracing::warn;
use uuid::Uuid;

/// Server error types
#[derive(Error, Debug)]
pub enum ServerError {
    #[error("Session not found: {0}")]
    SessionNotFound(Uuid),

    #[error("No document has been uploaded in this session")]
    NoDocument,

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error(transparent)]
    Extraction(#[from] ExtractError),

    #[error(transparent)]
    Dataset(#[from] DatasetError),

    #[error("Completion service failed: {0}")]
    Completion(#[from] CompletionError),

    #[error("Rendering failed: {0}")]
    Render(#[from] RenderError),
}

impl ServerError {
    pub fn status(&self) -> StatusCode {
        match self {
            ServerError::SessionNotFound(_) => StatusCode::NOT_FOUND,
            ServerError::NoDocument => StatusCode::CONFLICT,
            ServerError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            ServerError::Extraction(_) | ServerError::Dataset(_) => {
                StatusCode::UNPROCESSABLE_ENTITY
            }
            ServerError::Completion(_) => StatusCode::BAD_GATEWAY,
            ServerError::Render(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn code(&self) -> &'static str {
        match self {
            ServerError::SessionNotFound(_) => "SESSION_NOT_FOUND",
            ServerError::NoDocument => "NO_DOCUMENT",
            ServerError::InvalidRequest(_) => "INVALID_REQUEST",
            ServerError::Extraction(_) => "EXTRACTION_FAILED",
            ServerError::Dataset(_) => "INVALID_DATASET",
            ServerError::Completion(_) => "COMPLETION_FAILED",
            ServerError::Render(_) => "RENDER_FAILED",
        }
    }
}

// Extractor rejections use the same JSON error body as handler errors
impl From<PathRejection> for ServerError {
    fn from(rejection: PathRejection) -> Self {
        ServerError::InvalidRequest(rejection.body_text())
    }
}

impl From<JsonRejection> for ServerError {
    fn from(rejection: JsonRejection) -> Self {
        ServerError::InvalidRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ServerError {
    fn from(rejection: QueryRejection) -> Self {
        ServerError::InvalidRequest(rejection.body_text())
    }
}

/// Error response body
#[derive(Serialize)]
struct ErrorResponse {
    success: bool,
    error: String,
    code: String,
}

impl IntoResponse for ServerError {
    fn into_response(self) -> Response {
        let status = self.status();
        if status.is_server_error() {
            warn!("{} ({})", self, self.code());
        }

        let body = ErrorResponse {
            success: false,
            error: self.to_string(),
            code: self.code().to_string(),
        };

        (status, Json(body)).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn error_kinds_map_to_status_and_code() {
        let cases: Vec<(ServerError, StatusCode, &str)> = vec![
            (
                ExtractError::NoText("scan.pdf".into()).into(),
                StatusCode::UNPROCESSABLE_ENTITY,
                "EXTRACTION_FAILED",
            ),
            (
                DatasetError::NoNumericColumns("names.csv".into()).into(),
                StatusCode::UNPROCESSABLE_ENTITY,
                "INVALID_DATASET",
            ),
            (
                CompletionError::RateLimited.into(),
                StatusCode::BAD_GATEWAY,
                "COMPLETION_FAILED",
            ),
            (
                RenderError::Chart("bad".into()).into(),
                StatusCode::INTERNAL_SERVER_ERROR,
                "RENDER_FAILED",
            ),
            (ServerError::NoDocument, StatusCode::CONFLICT, "NO_DOCUMENT"),
            (
                ServerError::SessionNotFound(Uuid::nil()),
                StatusCode::NOT_FOUND,
                "SESSION_NOT_FOUND",
            ),
        ];

        for (err, status, code) in cases {
            assert_eq!(err.status(), status);
            assert_eq!(err.code(), code);
        }
    }

    #[test]
    fn extraction_message_is_passed_through() {
        let err: ServerError = ExtractError::PasswordProtected("locked.pdf".into()).into();
        assert_eq!(err.to_string(), "'locked.pdf' is password protected");
    }
}
