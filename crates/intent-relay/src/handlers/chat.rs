//! Chat relay handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Deserialize;
use serde_json::Value;
use tracing::{error, info};
use ulid::Ulid;

use crate::llm::Message;
use crate::response::{self, ApiError};
use crate::server::AppState;

/// POST /api/chat
///
/// Request body: `{"messages": [{"role": "...", "content": "..."}]}`
///
/// Responds with `{"message": {...}, "provider": "..."}`. A failing provider
/// yields a generic 500; the error detail only goes to the log.
pub async fn chat(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    let body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            return response::json_rejection(rejection).into_response();
        }
    };

    let messages = match parse_messages(&body) {
        Ok(messages) => messages,
        Err(err) => return err.into_response(),
    };

    let request_id = Ulid::new();
    let provider = state.router.provider();
    info!(%request_id, %provider, messages = messages.len(), "Relaying chat request");

    match state.router.route(&messages).await {
        Ok(reply) => (StatusCode::OK, Json(reply)).into_response(),
        Err(e) => {
            error!(%request_id, %provider, error = %e, "LLM request failed");
            response::internal_error("Failed to get a reply from the AI provider").into_response()
        }
    }
}

fn parse_messages(body: &Value) -> Result<Vec<Message>, ApiError> {
    let Some(raw) = body.get("messages").filter(|v| v.is_array()) else {
        return Err(response::bad_request("`messages` must be an array"));
    };

    let messages = Vec::<Message>::deserialize(raw)
        .map_err(|e| response::bad_request(format!("invalid message: {e}")))?;

    if messages.is_empty() {
        return Err(response::bad_request("`messages` must not be empty"));
    }

    Ok(messages)
}
