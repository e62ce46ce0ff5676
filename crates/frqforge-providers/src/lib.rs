//! frqforge-providers — Text-generation backend and configuration.
//!
//! Implements the `TextGenerator` trait for Google Gemini, plus a scripted
//! mock backend for tests and the TOML/env configuration loader.

pub mod config;
pub mod gemini;
pub mod mock;

pub use config::{create_generator, load_config, load_config_from, FrqforgeConfig};
pub use gemini::GeminiGenerator;
pub use mock::MockGenerator;
