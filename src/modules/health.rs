use axum::{routing::get, Json, Router};
use serde_json::{json, Value};

use crate::AppState;

pub async fn health() -> Json<Value> {
    Json(json!({ "status": "ok" }))
}

pub fn routes() -> Router<AppState> {
    Router::new().route("/health", get(health))
}
