//! frqforge-report — Feedback page rendering.
//!
//! Looks up a grading record, enforces the class-code gate, and produces a
//! self-contained printable HTML document.

pub mod html;

pub use html::FeedbackService;
