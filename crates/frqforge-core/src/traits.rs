//! Core trait definitions for the text generator and the feedback store.
//!
//! `TextGenerator` is implemented by the `frqforge-providers` crate; the
//! in-memory `FeedbackStore` implementation lives in [`crate::store`].

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::model::{FeedbackId, GradingRecord};

/// A text-generation backend.
///
/// Pure I/O boundary: given a natural-language instruction, returns the
/// generated text. A single failed attempt is surfaced directly; no retries
/// happen at any layer.
#[async_trait]
pub trait TextGenerator: Send + Sync {
    /// Human-readable backend name (e.g. "gemini").
    fn name(&self) -> &str;

    /// Send one instruction and return the model's text.
    async fn generate(&self, instruction: &str) -> Result<String, ProviderError>;
}

/// Keyed storage for grading records.
///
/// The trait is infallible: the system's contract has no store failure mode.
/// Identifiers are unique per insert and records are never mutated, so
/// concurrent readers and writers cannot interfere. A durable backing store
/// can be swapped in without touching the services.
#[async_trait]
pub trait FeedbackStore: Send + Sync {
    /// Store a record under a fresh identifier.
    async fn insert(&self, id: FeedbackId, record: GradingRecord);

    /// Look up a record by identifier.
    async fn get(&self, id: &FeedbackId) -> Option<GradingRecord>;
}
