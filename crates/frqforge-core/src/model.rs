//! Core data model types for frqforge.
//!
//! The grading record is the only persisted entity in the system; everything
//! else here is the wire shape of the grade endpoint.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Number;
use uuid::Uuid;

/// Sentinel stored when a grade request omits the student's name.
pub const UNKNOWN_STUDENT: &str = "Unknown Student";

/// Sentinel stored when a grade request omits the class code.
pub const UNSPECIFIED_CLASS: &str = "Unspecified Class";

/// Opaque identifier for one grading record.
///
/// Generated from a v4 UUID (OS CSPRNG), so identifiers are practically
/// collision-free and unguessable; the feedback URL is the only reference to
/// a record.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct FeedbackId(String);

impl FeedbackId {
    /// Draw a fresh random identifier.
    pub fn new() -> Self {
        Self(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for FeedbackId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for FeedbackId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for FeedbackId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for FeedbackId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// One graded answer, stored under a [`FeedbackId`].
///
/// Immutable after creation: no update operation exists anywhere in the
/// system, and records live until process exit.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradingRecord {
    /// Model-assigned score, expected 0–10 inclusive. Producer-supplied and
    /// not range-validated. Kept as a JSON number so an integral score
    /// round-trips as `8`, not `8.0`.
    pub score: Number,
    /// Free-text explanation of the score.
    pub feedback: String,
    /// The exam question shown to the student. May embed `<br>` markers for
    /// display.
    pub prompt: String,
    /// The student's submitted text.
    pub user_answer: String,
    /// Student name, or [`UNKNOWN_STUDENT`] when absent.
    pub student_name: String,
    /// Class code, or [`UNSPECIFIED_CLASS`] when absent. Gates access to the
    /// feedback page.
    pub class_code: String,
}

impl GradingRecord {
    /// Build a record, applying the sentinel defaults for a missing or empty
    /// student name and class code.
    pub fn new(
        score: Number,
        feedback: String,
        prompt: String,
        user_answer: String,
        student_name: Option<String>,
        class_code: Option<String>,
    ) -> Self {
        Self {
            score,
            feedback,
            prompt,
            user_answer,
            student_name: student_name
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| UNKNOWN_STUDENT.to_string()),
            class_code: class_code
                .filter(|s| !s.is_empty())
                .unwrap_or_else(|| UNSPECIFIED_CLASS.to_string()),
        }
    }
}

/// Request body of the grade endpoint.
///
/// All fields optional at the wire level; the grading service rejects a
/// missing or empty `userAnswer`/`prompt` before doing any work.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeRequest {
    #[serde(default)]
    pub user_answer: Option<String>,
    #[serde(default)]
    pub prompt: Option<String>,
    #[serde(default)]
    pub student_name: Option<String>,
    #[serde(default)]
    pub class_code: Option<String>,
}

/// Success body of the grade endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GradeOutcome {
    pub score: Number,
    pub feedback_url: String,
}
