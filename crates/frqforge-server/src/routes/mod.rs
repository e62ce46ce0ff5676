//! Route tree for the frqforge HTTP surface.

pub mod feedback;
pub mod grade;
pub mod health;
pub mod prompt;

use axum::routing::{get, post};
use axum::Router;
use tower_http::cors::CorsLayer;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the application router.
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/generate-prompt", get(prompt::generate_prompt))
        .route("/api/grade", post(grade::grade))
        .route("/feedback/{id}", get(feedback::feedback))
        .route("/health", get(health::health))
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive())
        .with_state(state)
}
