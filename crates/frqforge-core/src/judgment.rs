//! Tolerant extraction of the grading judgment from model output.
//!
//! The grading instruction demands a bare JSON object, but models wrap their
//! output in commentary often enough that a strict parse alone would fail
//! real responses. Extraction therefore runs in two stages:
//!
//! 1. strict parse of the whole trimmed response;
//! 2. on failure, parse the substring from the first `{` to the last `}`.
//!
//! If both fail the raw text is surfaced in the error; if a parse succeeds
//! but the value lacks a numeric `score` or a string `feedback`, the parsed
//! value is surfaced instead.

use serde_json::{Number, Value};

use crate::error::FrqError;

/// The model's verdict on one answer.
#[derive(Debug, Clone)]
pub struct Judgment {
    /// Score on the 0–10 scale, as the model produced it.
    pub score: Number,
    /// Free-text feedback.
    pub feedback: String,
}

/// Parse a grading response into a [`Judgment`].
pub fn parse_judgment(response: &str) -> Result<Judgment, FrqError> {
    let text = response.trim();

    let value = match serde_json::from_str::<Value>(text) {
        Ok(value) => value,
        Err(_) => extract_object(text).ok_or_else(|| FrqError::Unparseable {
            raw: text.to_string(),
        })?,
    };

    let score = value.get("score").and_then(Value::as_number).cloned();
    let feedback = value.get("feedback").and_then(Value::as_str);

    match (score, feedback) {
        (Some(score), Some(feedback)) => Ok(Judgment {
            score,
            feedback: feedback.to_string(),
        }),
        _ => Err(FrqError::MalformedJudgment { value }),
    }
}

/// Best-effort fallback: parse the first-`{`-to-last-`}` substring.
fn extract_object(text: &str) -> Option<Value> {
    let start = text.find('{')?;
    let end = text.rfind('}')?;
    if start >= end {
        return None;
    }
    serde_json::from_str(&text[start..=end]).ok()
}
