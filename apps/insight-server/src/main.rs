//! Insight Server
//!
//! Turns uploaded documents into AI-written deliverables. Provides a
//! single-page UI and REST API endpoints for:
//!
//! - Uploading PDFs, CSV files and spreadsheets into a session
//! - Generating a slide deck from the session's document
//! - Generating an HTML report from a tabular upload
//!
//! ## Architecture
//!
//! Each request runs the whole pipeline and answers when it is done:
//! extraction on the blocking pool, one completion call, section splitting
//! and rendering. The only shared mutable state is the session map.

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use clap::Parser;
use completion_client::{AnthropicClient, CompletionService};
use tower_governor::{governor::GovernorConfigBuilder, GovernorLayer};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;
use tracing::{info, Level};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

mod api;
mod config;
mod error;
mod page;
mod pipeline;
mod session;
#[cfg(test)]
mod tests;

use api::{
    handle_create_session, handle_delete_session, handle_generate_deck, handle_generate_report,
    handle_get_session, handle_health, handle_upload,
};
use config::{Args, Settings};
use page::handle_index;
use session::SessionStore;

/// Upload bodies carry base64 file data
const MAX_BODY_BYTES: usize = 64 * 1024 * 1024;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    pub completion: Arc<dyn CompletionService>,
    pub sessions: SessionStore,
}

/// Routes without rate limiting
pub fn app(state: AppState) -> Router {
    Router::new()
        // UI and health check
        .route("/", get(handle_index))
        .route("/health", get(handle_health))
        // Sessions
        .route("/api/sessions", post(handle_create_session))
        .route(
            "/api/sessions/:id",
            get(handle_get_session).delete(handle_delete_session),
        )
        .route("/api/sessions/:id/upload", post(handle_upload))
        // Generation
        .route("/api/sessions/:id/deck", post(handle_generate_deck))
        .route("/api/sessions/:id/report", post(handle_generate_report))
        .layer(DefaultBodyLimit::max(MAX_BODY_BYTES))
        .with_state(state)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Load .env file if present
    dotenvy::dotenv().ok();

    let args = Args::parse();

    // Initialize logging
    let log_level = if args.verbose {
        Level::DEBUG
    } else {
        Level::INFO
    };

    tracing_subscriber::registry()
        .with(EnvFilter::from_default_env().add_directive(log_level.into()))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let settings = Settings::from_args(args)?;
    info!(
        "Starting insight server on {}:{} (model {})",
        settings.host, settings.port, settings.completion.model
    );

    let client = AnthropicClient::new(settings.completion.clone())?;

    // Create rate limiter configuration
    let governor_conf = Arc::new(
        GovernorConfigBuilder::default()
            .per_second(settings.rate_limit.into())
            .burst_size(settings.rate_limit.saturating_mul(2))
            .finish()
            .ok_or_else(|| anyhow::anyhow!("invalid rate limiter configuration"))?,
    );

    // Create shared state
    let state = AppState {
        completion: Arc::new(client),
        sessions: SessionStore::with_ttl(settings.session_ttl),
    };

    // Configure CORS
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    let router = app(state)
        .layer(GovernorLayer {
            config: governor_conf,
        })
        .layer(cors)
        .layer(TraceLayer::new_for_http());

    // Start server
    let addr: SocketAddr = format!("{}:{}", settings.host, settings.port).parse()?;
    let listener = tokio::net::TcpListener::bind(addr).await?;

    info!("Server listening on http://{}", addr);
    info!("Rate limit: {} requests/second per IP", settings.rate_limit);
    info!(
        "Idle sessions expire after {} minute(s)",
        settings.session_ttl.num_minutes()
    );

    axum::serve(
        listener,
        router.into_make_service_with_connect_info::<SocketAddr>(),
    )
    .await?;

    Ok(())
}
