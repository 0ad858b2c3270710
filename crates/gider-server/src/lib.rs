//! Gider Web Server
//!
//! Axum-based REST API exposing the income/expense forecast:
//!
//! - `POST /forecast` - average income and expenses with advisory notes
//!
//! The handler is stateless. Malformed bodies are rejected before the
//! forecast runs and reported as `{"error": "..."}` with the rejection's
//! status code. A body sent without a content type is read as JSON.

use anyhow::Context;
use axum::{
    extract::{rejection::JsonRejection, DefaultBodyLimit},
    http::{header, HeaderValue, Method, StatusCode},
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use tower_http::{cors::CorsLayer, set_header::SetResponseHeaderLayer, trace::TraceLayer};
use tracing::{info, warn};

mod config;
mod extract;
mod handlers;

pub use config::{parse_origins, ServerConfig, DEFAULT_HOST, DEFAULT_PORT};
pub use extract::JsonBody;

/// Maximum request body size (10 MB)
pub const MAX_BODY_SIZE: usize = 10 * 1024 * 1024;

/// Create the application router
pub fn create_router(config: ServerConfig) -> Router {
    let cors = if config.allowed_origins.is_empty() {
        // Restrictive default: only allow same-origin
        CorsLayer::new()
            .allow_methods([Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    } else {
        let origins: Vec<HeaderValue> = config
            .allowed_origins
            .iter()
            .filter_map(|o| o.parse().ok())
            .collect();
        CorsLayer::new()
            .allow_origin(origins)
            .allow_methods([Method::POST, Method::OPTIONS])
            .allow_headers([header::CONTENT_TYPE])
    };

    Router::new()
        .route("/forecast", post(handlers::post_forecast))
        .fallback(handlers::not_found)
        .layer(DefaultBodyLimit::max(MAX_BODY_SIZE))
        .layer(TraceLayer::new_for_http())
        .layer(cors)
        // Security headers
        .layer(SetResponseHeaderLayer::overriding(
            header::X_CONTENT_TYPE_OPTIONS,
            HeaderValue::from_static("nosniff"),
        ))
        .layer(SetResponseHeaderLayer::overriding(
            header::X_FRAME_OPTIONS,
            HeaderValue::from_static("DENY"),
        ))
}

/// Start the server and run until Ctrl+C
pub async fn serve(config: ServerConfig) -> anyhow::Result<()> {
    let addr = config.bind_addr();
    if !config.allowed_origins.is_empty() {
        info!(origins = ?config.allowed_origins, "CORS origins configured");
    }

    let app = create_router(config);

    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("Failed to bind {}", addr))?;

    info!("Starting forecast server at http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(async {
            tokio::signal::ctrl_c().await.ok();
        })
        .await?;

    info!("Forecast server stopped");

    Ok(())
}

// ============================================================================
// Error Handling
// ============================================================================

/// Application error type with proper HTTP status codes
#[derive(Debug)]
pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn not_found(msg: &str) -> Self {
        Self {
            status: StatusCode::NOT_FOUND,
            message: msg.to_string(),
        }
    }

    /// Keep the extractor's status (400, 413, 415, 422) and its description
    pub fn from_rejection(rejection: JsonRejection) -> Self {
        let status = rejection.status();
        let message = rejection.body_text();
        warn!(status = %status, error = %message, "Rejected request body");
        Self { status, message }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let body = Json(serde_json::json!({
            "error": self.message
        }));

        (self.status, body).into_response()
    }
}
