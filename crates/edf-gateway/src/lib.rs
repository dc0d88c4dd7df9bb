//! EDF Gateway: the proxy endpoint the frontend talks to.
//!
//! Accepts the same multipart body as the real classification endpoint and
//! forwards it upstream, or answers with a deterministic stub while no
//! model service is configured.

pub mod handlers;
pub mod middleware;

use axum::{
    extract::DefaultBodyLimit,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use edf_client::SubmissionClient;

/// Upper bound on uploaded recordings. EDF files from longer sessions run
/// tens of megabytes.
pub const MAX_UPLOAD_BYTES: usize = 64 * 1024 * 1024;

/// Shared handler state. `upstream` is `None` in stub mode.
#[derive(Clone, Default)]
pub struct GatewayState {
    pub upstream: Option<SubmissionClient>,
}

pub fn create_app(state: GatewayState) -> Router {
    Router::new()
        .route("/api/classify", post(handlers::classify))
        .route("/api/health", get(handlers::health))
        .layer(DefaultBodyLimit::max(MAX_UPLOAD_BYTES))
        .layer(TraceLayer::new_for_http())
        .layer(middleware::cors())
        .with_state(state)
}

pub async fn run(addr: &str, state: GatewayState) {
    let app = create_app(state);
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .expect("Failed to bind");

    tracing::info!("EDF gateway listening on {}", addr);
    axum::serve(listener, app).await.expect("Server error");
}
