//! Error types for the frqforge services.
//!
//! `ProviderError` is defined here rather than in `frqforge-providers` so the
//! services can classify upstream failures by variant, never by string
//! matching. `FrqError` is the full request-level taxonomy; the HTTP layer
//! maps each variant to a status code and payload.

use thiserror::Error;

/// Errors that can occur when calling the external text-generation model.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// Authentication failed (invalid API key).
    #[error("authentication failed: {0}")]
    AuthenticationFailed(String),

    /// The requested model was not found.
    #[error("model not found: {0}")]
    ModelNotFound(String),

    /// The API returned an error response.
    #[error("API error (HTTP {status}): {message}")]
    ApiError { status: u16, message: String },

    /// The request timed out at the transport level.
    #[error("request timed out")]
    Timeout,

    /// A network error occurred.
    #[error("network error: {0}")]
    Network(String),

    /// The API answered but the response carried no candidate text.
    #[error("empty response from model")]
    EmptyResponse,
}

/// Request-level errors for the question, grading, and feedback services.
#[derive(Debug, Error)]
pub enum FrqError {
    /// The caller omitted `userAnswer` or `prompt` (or sent an empty string).
    #[error("Missing userAnswer or prompt")]
    MissingField,

    /// The external model failed or was unreachable.
    #[error(transparent)]
    Upstream(#[from] ProviderError),

    /// The model returned unusable question text (empty or shorter than the
    /// minimum length after trimming).
    #[error("Invalid prompt received from model.")]
    InvalidPrompt,

    /// Neither the strict parse nor the substring fallback found a JSON
    /// object in the model's grading response. The raw text is preserved for
    /// diagnostics and the HTTP error payload.
    #[error("Could not parse JSON from model response.")]
    Unparseable { raw: String },

    /// The response parsed as JSON but did not carry a numeric `score` and a
    /// string `feedback`.
    #[error("Invalid response format.")]
    MalformedJudgment { value: serde_json::Value },

    /// No feedback record exists under the requested identifier.
    #[error("Feedback not found.")]
    NotFound,

    /// The stored record's class code does not match the accepted value.
    #[error("Invalid class code. Unable to generate feedback.")]
    Forbidden,
}
