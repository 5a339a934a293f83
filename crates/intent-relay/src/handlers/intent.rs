//! Intent echo handler.

use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::Value;
use tracing::info;

use crate::response;

#[derive(Debug, Serialize)]
pub struct IntentReceipt {
    status: &'static str,
    intent: Value,
}

/// POST /api/intent
///
/// Echoes `{"intent": ...}` back unchanged. Nothing is stored or signed.
/// Only a missing or `null` intent is rejected.
pub async fn intent(payload: Result<Json<Value>, JsonRejection>) -> Response {
    let mut body = match payload {
        Ok(Json(body)) => body,
        Err(rejection) => {
            return response::json_rejection(rejection).into_response();
        }
    };

    let intent = body
        .get_mut("intent")
        .map(Value::take)
        .unwrap_or(Value::Null);

    if intent.is_null() {
        return response::bad_request("`intent` is required").into_response();
    }

    let action = intent.get("action").and_then(Value::as_str).unwrap_or("-");
    info!(action, "Intent received");

    let receipt = IntentReceipt {
        status: "received",
        intent,
    };
    (StatusCode::OK, Json(receipt)).into_response()
}
