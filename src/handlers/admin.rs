use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::{HeaderMap, StatusCode};
use axum::response::IntoResponse;
use tracing::info;

use crate::metrics::CACHE_SIZE;
use crate::state::AppState;

// clears one cached summary by its canonical key
pub async fn clear_cache_handler(
    State(state): State<Arc<AppState>>,
    Path(key): Path<String>,
    headers: HeaderMap,
) -> impl IntoResponse {
    if let Some(expected) = &state.admin_token {
        let provided = headers.get("x-admin-token").and_then(|v| v.to_str().ok());
        if provided != Some(expected.as_str()) {
            return (
                StatusCode::FORBIDDEN,
                Json(serde_json::json!({ "error": "admin token required" })),
            );
        }
    }

    if state.pipeline.cache().delete(&key) {
        CACHE_SIZE.set(state.pipeline.cache().len() as f64);
        info!(key = %key, "cache entry cleared");
        (
            StatusCode::OK,
            Json(serde_json::json!({ "cleared": key })),
        )
    } else {
        (
            StatusCode::NOT_FOUND,
            Json(serde_json::json!({ "error": format!("no cache entry found for {key}") })),
        )
    }
}
