//! `POST /api/grade`

use axum::extract::State;
use axum::response::Json;

use frqforge_core::model::{GradeOutcome, GradeRequest};

use crate::response::ApiError;
use crate::state::AppState;

/// Grade a student's answer and return the score plus the feedback URL.
pub async fn grade(
    State(state): State<AppState>,
    Json(request): Json<GradeRequest>,
) -> Result<Json<GradeOutcome>, ApiError> {
    match state.grading().grade(request).await {
        Ok(outcome) => Ok(Json(outcome)),
        Err(err) => {
            tracing::error!(error = %err, "failed to grade FRQ");
            Err(ApiError::from_frq(err, "Failed to grade FRQ"))
        }
    }
}
