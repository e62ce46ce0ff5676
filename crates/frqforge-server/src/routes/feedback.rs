//! `GET /feedback/{id}`

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};

use frqforge_core::error::FrqError;
use frqforge_core::model::FeedbackId;

use crate::state::AppState;

/// Render the feedback page for one grading record.
///
/// Failures are plain text, matching the original surface: 404 for an
/// unknown identifier, 403 for a class-code mismatch.
pub async fn feedback(State(state): State<AppState>, Path(id): Path<String>) -> Response {
    let id = FeedbackId::from(id);
    match state.feedback().render(&id).await {
        Ok(html) => Html(html).into_response(),
        Err(err @ FrqError::Forbidden) => {
            (StatusCode::FORBIDDEN, err.to_string()).into_response()
        }
        Err(err) => (StatusCode::NOT_FOUND, err.to_string()).into_response(),
    }
}
