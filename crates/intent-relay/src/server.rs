use std::path::Path;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::services::{ServeDir, ServeFile};
use tower_http::timeout::TimeoutLayer;

use crate::handlers;
use crate::llm::ChatRouter;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    pub router: ChatRouter,
}

/// Build the HTTP application.
///
/// API routes live under `/api`; every other path is served from
/// `static_dir`, with unknown paths answered by its `index.html`.
pub fn build_app(state: AppState, static_dir: &Path, request_timeout_secs: u64) -> Router {
    let api = Router::new()
        .route("/health", get(handlers::health))
        .route("/chat", post(handlers::chat))
        .route("/intent", post(handlers::intent))
        .with_state(state);

    let ui = ServeDir::new(static_dir).fallback(ServeFile::new(static_dir.join("index.html")));

    Router::new()
        .nest("/api", api)
        .fallback_service(ui)
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(request_timeout_secs),
        ))
}
