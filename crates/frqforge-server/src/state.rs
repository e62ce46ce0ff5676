//! Shared application state.

use std::sync::Arc;

use frqforge_core::grading::GradingService;
use frqforge_core::question::QuestionService;
use frqforge_core::traits::{FeedbackStore, TextGenerator};
use frqforge_report::FeedbackService;

/// Handler state: the three services, each behind an `Arc` so the state
/// clones cheaply per request.
#[derive(Clone)]
pub struct AppState {
    question: Arc<QuestionService>,
    grading: Arc<GradingService>,
    feedback: Arc<FeedbackService>,
}

impl AppState {
    /// Wire the services onto one generator and one store.
    pub fn new(
        generator: Arc<dyn TextGenerator>,
        store: Arc<dyn FeedbackStore>,
        accepted_class_code: &str,
    ) -> Self {
        Self {
            question: Arc::new(QuestionService::new(generator.clone())),
            grading: Arc::new(GradingService::new(generator, store.clone())),
            feedback: Arc::new(FeedbackService::new(store, accepted_class_code)),
        }
    }

    pub fn question(&self) -> &QuestionService {
        &self.question
    }

    pub fn grading(&self) -> &GradingService {
        &self.grading
    }

    pub fn feedback(&self) -> &FeedbackService {
        &self.feedback
    }
}
