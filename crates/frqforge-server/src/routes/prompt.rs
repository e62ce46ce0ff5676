//! `GET /api/generate-prompt`

use axum::extract::State;
use axum::response::Json;
use serde::Serialize;

use crate::response::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct PromptBody {
    pub prompt: String,
}

/// Ask the model to author one practice question.
pub async fn generate_prompt(
    State(state): State<AppState>,
) -> Result<Json<PromptBody>, ApiError> {
    match state.question().create_prompt().await {
        Ok(prompt) => Ok(Json(PromptBody { prompt })),
        Err(err) => {
            tracing::error!(error = %err, "failed to generate prompt");
            Err(ApiError::from_frq(err, "Failed to generate prompt"))
        }
    }
}
