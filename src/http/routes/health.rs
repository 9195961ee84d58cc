//! Liveness endpoint.

use axum::Json;
use serde_json::{Value, json};

/// `GET /health`.
#[expect(clippy::unused_async, reason = "axum handlers are async functions")]
pub async fn check() -> Json<Value> {
    Json(json!({"status": "healthy", "service": env!("CARGO_PKG_NAME")}))
}
