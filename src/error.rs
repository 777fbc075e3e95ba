use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde_json::json;

/// Gateway failure taxonomy. Everything is surfaced to the caller as an
/// `{"error": ...}` body; nothing is retried.
#[derive(Debug, thiserror::Error)]
pub enum GatewayError {
    /// Missing or empty required fields. Client-correctable.
    #[error("{0}")]
    InvalidRequest(String),
    /// Platform initialization or call failure, message passed through.
    #[error("Vertex AI Agent Error: {0}. Check ADC and agent configuration.")]
    Upstream(String),
}

impl GatewayError {
    pub fn status(&self) -> StatusCode {
        match self {
            GatewayError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            GatewayError::Upstream(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for GatewayError {
    fn into_response(self) -> Response {
        let status = self.status();
        (status, Json(json!({ "error": self.to_string() }))).into_response()
    }
}
