//! Error-to-response translation for the JSON endpoints.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Json, Response};
use serde_json::{json, Value};

use frqforge_core::error::FrqError;

/// JSON error response: `{error}` with an optional `raw` diagnostic field.
pub struct ApiError {
    status: StatusCode,
    body: Value,
}

impl ApiError {
    /// Map a service error to its status and payload.
    ///
    /// `upstream_message` is the endpoint's generic message for provider
    /// failures; the provider detail is logged, never sent to the caller.
    pub fn from_frq(err: FrqError, upstream_message: &str) -> Self {
        let (status, body) = match err {
            FrqError::MissingField => (
                StatusCode::BAD_REQUEST,
                json!({"error": FrqError::MissingField.to_string()}),
            ),
            FrqError::Upstream(provider_err) => {
                tracing::error!(error = %provider_err, "upstream model call failed");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    json!({"error": upstream_message}),
                )
            }
            FrqError::InvalidPrompt => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": FrqError::InvalidPrompt.to_string()}),
            ),
            FrqError::Unparseable { raw } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": "Could not parse JSON from model response.", "raw": raw}),
            ),
            FrqError::MalformedJudgment { value } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                json!({"error": "Invalid response format.", "raw": value}),
            ),
            FrqError::NotFound => (
                StatusCode::NOT_FOUND,
                json!({"error": FrqError::NotFound.to_string()}),
            ),
            FrqError::Forbidden => (
                StatusCode::FORBIDDEN,
                json!({"error": FrqError::Forbidden.to_string()}),
            ),
        };
        Self { status, body }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        (self.status, Json(self.body)).into_response()
    }
}
