use axum::Json;
use axum::response::IntoResponse;

// health handler
pub async fn health_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "status": "healthy",
        "timestamp": chrono::Utc::now().to_rfc3339()
    }))
}

// what this service is and how to talk to it
pub async fn about_handler() -> impl IntoResponse {
    Json(serde_json::json!({
        "name": "tldr-gateway",
        "description": "Summarizes Python PEPs and CPython GitHub issue discussions",
        "routes": {
            "POST /api/tldr": "summarize a document: {\"kind\": \"pep\"|\"gh\", \"number\": 8}",
            "GET /api/random": "summary of a random pep",
            "DELETE /admin/cache/{key}": "clear one cached summary, e.g. pep-0008 (admin only)",
            "GET /health": "liveness check",
            "GET /metrics": "prometheus metrics"
        }
    }))
}
