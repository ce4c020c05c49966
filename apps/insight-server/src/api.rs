//! API handlers for the insight server
//!
//! Provides REST endpoints for:
//! - Session lifecycle
//! - Document upload
//! - Deck and report generation

use axum::{
    extract::{FromRequest, FromRequestParts, Path, Query, State},
    Json,
};
use base64::{engine::general_purpose::STANDARD, Engine};
use chrono::{DateTime, Utc};
use doc_extract::{extract_upload, ExtractError, ExtractedDocument};
use render_engine::{DeckOptions, OutputFormat};
use serde::{Deserialize, Serialize};
use shared_types::{DocumentKind, InsightText, SectionSequence};
use tracing::{debug, info, warn};
use uuid::Uuid;

use crate::error::ServerError;
use crate::pipeline::{generate_deck, generate_report, Variant};
use crate::session::SessionContext;
use crate::AppState;

/// `Path` whose rejection is a `ServerError`
#[derive(FromRequestParts)]
#[from_request(via(Path), rejection(ServerError))]
pub struct ApiPath<T>(pub T);

/// `Query` whose rejection is a `ServerError`
#[derive(FromRequestParts)]
#[from_request(via(Query), rejection(ServerError))]
pub struct ApiQuery<T>(pub T);

/// `Json` body whose rejection is a `ServerError`
#[derive(FromRequest)]
#[from_request(via(Json), rejection(ServerError))]
pub struct ApiJson<T>(pub T);

/// Health check response
#[derive(Serialize)]
pub struct HealthResponse {
    pub status: &'static str,
    pub service: &'static str,
    pub version: &'static str,
}

/// Handler: GET /health
pub async fn handle_health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "healthy",
        service: "insight-server",
        version: env!("CARGO_PKG_VERSION"),
    })
}

/// What the session currently holds, without the content itself
#[derive(Debug, Serialize)]
pub struct DocumentSummary {
    pub kind: DocumentKind,
    pub filenames: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_count: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rows: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub columns: Option<Vec<String>>,
}

impl From<&ExtractedDocument> for DocumentSummary {
    fn from(document: &ExtractedDocument) -> Self {
        match document {
            ExtractedDocument::Text(text) => DocumentSummary {
                kind: DocumentKind::Text,
                filenames: text.filenames.clone(),
                page_count: Some(text.page_count),
                rows: None,
                columns: None,
            },
            ExtractedDocument::Table(table) => DocumentSummary {
                kind: DocumentKind::Table,
                filenames: vec![table.filename.clone()],
                page_count: None,
                rows: Some(table.dataset.row_count()),
                columns: Some(table.dataset.columns.clone()),
            },
        }
    }
}

/// Session response
#[derive(Serialize)]
pub struct SessionResponse {
    pub success: bool,
    pub session_id: Uuid,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub document: Option<DocumentSummary>,
}

impl From<SessionContext> for SessionResponse {
    fn from(session: SessionContext) -> Self {
        SessionResponse {
            success: true,
            session_id: session.id,
            created_at: session.created_at,
            updated_at: session.updated_at,
            document: session.current.as_deref().map(DocumentSummary::from),
        }
    }
}

/// Handler: POST /api/sessions
pub async fn handle_create_session(State(state): State<AppState>) -> Json<SessionResponse> {
    let session = state.sessions.create().await;
    info!("Session created: {}", session.id);
    Json(session.into())
}

/// Handler: GET /api/sessions/:id
pub async fn handle_get_session(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<SessionResponse>, ServerError> {
    Ok(Json(state.sessions.get(id).await?.into()))
}

#[derive(Serialize)]
pub struct DeleteResponse {
    pub success: bool,
}

/// Handler: DELETE /api/sessions/:id
pub async fn handle_delete_session(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<DeleteResponse>, ServerError> {
    state.sessions.remove(id).await?;
    info!("Session deleted: {}", id);
    Ok(Json(DeleteResponse { success: true }))
}

/// One uploaded file
#[derive(Deserialize)]
pub struct UploadFile {
    pub filename: String,
    /// Base64-encoded file contents
    pub data_base64: String,
}

/// Upload request body
#[derive(Deserialize)]
pub struct UploadRequest {
    pub files: Vec<UploadFile>,
}

#[derive(Serialize)]
pub struct UploadResponse {
    pub success: bool,
    pub document: DocumentSummary,
}

/// Handler: POST /api/sessions/:id/upload
pub async fn handle_upload(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiJson(req): ApiJson<UploadRequest>,
) -> Result<Json<UploadResponse>, ServerError> {
    state.sessions.get(id).await?;

    let files = decode_files(req.files)?;
    let total: usize = files.iter().map(|(_, bytes)| bytes.len()).sum();
    info!(
        "Upload for session {}: {} file(s), {} bytes",
        id,
        files.len(),
        total
    );

    let names = files
        .iter()
        .map(|(name, _)| name.as_str())
        .collect::<Vec<_>>()
        .join(", ");
    let document = tokio::task::spawn_blocking(move || extract_upload(&files))
        .await
        .map_err(|e| {
            warn!("Extraction task failed: {}", e);
            ServerError::Extraction(ExtractError::Corrupted {
                filename: names,
                message: "the parser could not process this file".to_string(),
            })
        })??;

    let document = state.sessions.replace_current(id, document).await?;
    let summary = DocumentSummary::from(document.as_ref());
    debug!("Session {} document: {:?}", id, summary);

    Ok(Json(UploadResponse {
        success: true,
        document: summary,
    }))
}

fn decode_files(files: Vec<UploadFile>) -> Result<Vec<(String, Vec<u8>)>, ServerError> {
    files
        .into_iter()
        .map(|file| {
            let name = file.filename.trim().to_string();
            if name.is_empty() {
                return Err(ServerError::InvalidRequest(
                    "Every file needs a filename".to_string(),
                ));
            }
            let bytes = STANDARD.decode(file.data_base64.trim()).map_err(|e| {
                ServerError::InvalidRequest(format!("Invalid base64 for '{}': {}", name, e))
            })?;
            Ok((name, bytes))
        })
        .collect()
}

/// Deck response
#[derive(Serialize)]
pub struct DeckResponse {
    pub success: bool,
    pub variant: Variant,
    pub insights: InsightText,
    pub sections: SectionSequence,
    pub slide_count: usize,
    pub filename: String,
    pub mime_type: &'static str,
    /// Base64-encoded `.pptx`
    pub data: String,
}

/// Handler: POST /api/sessions/:id/deck
pub async fn handle_generate_deck(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
) -> Result<Json<DeckResponse>, ServerError> {
    let document = state.sessions.current(id).await?;
    let outcome = generate_deck(
        state.completion.as_ref(),
        &document,
        &DeckOptions::default(),
    )
    .await?;

    let format = OutputFormat::Pptx;
    Ok(Json(DeckResponse {
        success: true,
        variant: outcome.variant,
        slide_count: outcome.deck.slide_count,
        data: STANDARD.encode(&outcome.deck.data),
        insights: outcome.insights,
        sections: outcome.sections,
        filename: format.default_filename(),
        mime_type: format.mime_type(),
    }))
}

#[derive(Deserialize)]
pub struct ReportQuery {
    /// Show split sections instead of the raw insight text
    #[serde(default)]
    pub sectioned: bool,
}

/// Report response
#[derive(Serialize)]
pub struct ReportResponse {
    pub success: bool,
    pub variant: Variant,
    pub insights: InsightText,
    pub sections: Option<SectionSequence>,
    pub chart_count: usize,
    pub filename: String,
    pub mime_type: &'static str,
    pub html: String,
}

/// Handler: POST /api/sessions/:id/report
pub async fn handle_generate_report(
    State(state): State<AppState>,
    ApiPath(id): ApiPath<Uuid>,
    ApiQuery(query): ApiQuery<ReportQuery>,
) -> Result<Json<ReportResponse>, ServerError> {
    let document = state.sessions.current(id).await?;
    let outcome = generate_report(state.completion.as_ref(), &document, query.sectioned).await?;

    let format = OutputFormat::Html;
    Ok(Json(ReportResponse {
        success: true,
        variant: outcome.variant,
        insights: outcome.insights,
        sections: outcome.sections,
        chart_count: outcome.chart_count,
        filename: format.default_filename(),
        mime_type: format.mime_type(),
        html: outcome.html,
    }))
}
