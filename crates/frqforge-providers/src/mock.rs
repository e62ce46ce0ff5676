//! Mock text generator for testing.

use std::collections::HashMap;
use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Mutex;

use async_trait::async_trait;

use frqforge_core::error::ProviderError;
use frqforge_core::traits::TextGenerator;

/// A mock [`TextGenerator`] for exercising the services and the HTTP layer
/// without a network.
///
/// Returns configurable responses based on instruction content matching.
pub struct MockGenerator {
    /// Map of instruction substring → response text.
    responses: HashMap<String, String>,
    /// Default response if no instruction matches.
    default_response: String,
    /// When set, every call fails with a network error.
    fail: bool,
    /// Number of calls made.
    call_count: AtomicU32,
    /// Last instruction received.
    last_instruction: Mutex<Option<String>>,
}

impl MockGenerator {
    /// Create a mock with the given instruction→response mappings.
    pub fn new(responses: HashMap<String, String>) -> Self {
        Self {
            responses,
            default_response: r#"{"score": 5, "feedback": "Placeholder."}"#.to_string(),
            fail: false,
            call_count: AtomicU32::new(0),
            last_instruction: Mutex::new(None),
        }
    }

    /// Create a mock that always returns the same response.
    pub fn with_fixed_response(response: &str) -> Self {
        Self {
            responses: HashMap::new(),
            default_response: response.to_string(),
            fail: false,
            call_count: AtomicU32::new(0),
            last_instruction: Mutex::new(None),
        }
    }

    /// Create a mock whose every call fails with a network error.
    pub fn failing() -> Self {
        Self {
            responses: HashMap::new(),
            default_response: String::new(),
            fail: true,
            call_count: AtomicU32::new(0),
            last_instruction: Mutex::new(None),
        }
    }

    /// Number of calls made to this generator.
    pub fn call_count(&self) -> u32 {
        self.call_count.load(Ordering::Relaxed)
    }

    /// The last instruction sent to this generator.
    pub fn last_instruction(&self) -> Option<String> {
        self.last_instruction.lock().unwrap().clone()
    }
}

#[async_trait]
impl TextGenerator for MockGenerator {
    fn name(&self) -> &str {
        "mock"
    }

    async fn generate(&self, instruction: &str) -> Result<String, ProviderError> {
        self.call_count.fetch_add(1, Ordering::Relaxed);
        *self.last_instruction.lock().unwrap() = Some(instruction.to_string());

        if self.fail {
            return Err(ProviderError::Network("mock generator set to fail".into()));
        }

        // Find a matching response based on instruction content
        let response = self
            .responses
            .iter()
            .find(|(key, _)| instruction.contains(key.as_str()))
            .map(|(_, v)| v.clone())
            .unwrap_or_else(|| self.default_response.clone());

        Ok(response)
    }
}
