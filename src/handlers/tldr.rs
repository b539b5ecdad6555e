use std::sync::Arc;
use std::time::Instant;

use axum::extract::State;
use axum::http::{HeaderMap, StatusCode};
use axum::response::{IntoResponse, Response};
use axum::Json;
use rand::Rng;
use tracing::info;

use crate::metrics::{REQUEST_LATENCY, REQUEST_TOTAL};
use crate::models::{DocKind, TldrRequest, TldrResponse};
use crate::rate_limit::check_rate_limit;
use crate::state::AppState;

// the chat front-end forwards its user id here; callers without one all
// share a single cooldown bucket
fn requester_id(headers: &HeaderMap) -> String {
    headers
        .get("x-requester")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("global")
        .to_string()
}

fn cooldown_response() -> Response {
    (
        StatusCode::TOO_MANY_REQUESTS,
        Json(serde_json::json!({
            "error": "you're doing that too often, try again later"
        })),
    )
        .into_response()
}

async fn run_tldr(
    state: &AppState,
    headers: &HeaderMap,
    kind: &str,
    number: u32,
) -> Result<Json<TldrResponse>, Response> {
    REQUEST_TOTAL.inc();

    let requester = requester_id(headers);
    if !check_rate_limit(
        &state.rate_limiter,
        &requester,
        state.rate_limit,
        state.rate_window,
    ) {
        return Err(cooldown_response());
    }

    info!(requester = %requester, kind = %kind, number, "tldr request");
    let start_time = Instant::now();

    let result = state.pipeline.summarize_request(kind, number).await;
    REQUEST_LATENCY.observe(start_time.elapsed().as_secs_f64());

    let summary = result.map_err(IntoResponse::into_response)?;

    // the pipeline accepted the kind, so this parse cannot come back empty
    let key = DocKind::parse(kind)
        .map(|k| k.canonical_key(number))
        .unwrap_or_default();
    Ok(Json(TldrResponse { key, summary }))
}

pub async fn tldr_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
    Json(payload): Json<TldrRequest>,
) -> Result<Json<TldrResponse>, Response> {
    run_tldr(&state, &headers, &payload.kind, payload.number).await
}

// summary of a random pep, same pipeline and cooldown as /api/tldr
pub async fn random_pep_handler(
    State(state): State<Arc<AppState>>,
    headers: HeaderMap,
) -> Result<Json<TldrResponse>, Response> {
    let number = rand::thread_rng().gen_range(1..=800);
    run_tldr(&state, &headers, "pep", number).await
}
