use axum::Json;
use axum::extract::State;
use serde::Serialize;

use crate::build_info;
use crate::llm::Provider;
use crate::server::AppState;

#[derive(Debug, Serialize)]
pub struct HealthResponse {
    ok: bool,
    provider: Provider,
    version: &'static str,
}

/// GET /api/health
///
/// Reports the configured provider without contacting it.
pub async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        ok: true,
        provider: state.router.provider(),
        version: build_info::VERSION,
    })
}
