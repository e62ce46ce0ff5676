//! frqforge-core — Data model, services, and judgment parsing.
//!
//! This crate defines the grading record, the trait seams for the text
//! generator and feedback store, and the two services that orchestrate
//! question generation and grading.

pub mod error;
pub mod grading;
pub mod judgment;
pub mod model;
pub mod question;
pub mod store;
pub mod traits;
