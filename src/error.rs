use axum::Json;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use thiserror::Error;

// Errors the summarization core can hand back to the command layer.
// Everything a collaborator (fetch/tokenize/render/summarize) throws at us
// collapses into Upstream - the core never retries.
#[derive(Debug, Error)]
pub enum TldrError {
    #[error("only pep and gh documents are supported, got {0:?}")]
    InvalidRequest(String),

    #[error("upstream failure: {0}")]
    Upstream(String),
}

impl From<reqwest::Error> for TldrError {
    fn from(err: reqwest::Error) -> Self {
        TldrError::Upstream(err.to_string())
    }
}

// map core errors to http responses at the handler boundary
impl IntoResponse for TldrError {
    fn into_response(self) -> Response {
        let status = match &self {
            TldrError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            TldrError::Upstream(_) => StatusCode::BAD_GATEWAY,
        };
        (status, Json(serde_json::json!({ "error": self.to_string() }))).into_response()
    }
}
