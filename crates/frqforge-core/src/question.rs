//! Question generation service.

use std::sync::Arc;

use crate::error::FrqError;
use crate::traits::TextGenerator;

/// Minimum plausible length of a generated question, in characters.
const MIN_PROMPT_CHARS: usize = 10;

/// Instruction sent to the model to author one practice question.
const QUESTION_INSTRUCTION: &str = "\
You are an AP Environmental Science teacher. Write a Free-Response Question (FRQ) prompt suitable for a high school APES exam. The question should ask students to justify, describe, identify, or explain an environmental science concept (you may use multiple verbs).

Use a realistic environmental scenario and divide the prompt into clearly labeled parts, like (a), (b), and (c).

IMPORTANT:
- Each part (including part (a)) MUST appear on its own line.
- You must use an HTML <br> tag before each part label (e.g., <br>(a), <br>(b), etc.) so the output is ready for web display.
- Do not place all parts in a single paragraph. Break them into distinct lines using <br>. Think about where to place the <br> tags to make the question readable.
- Only return the prompt text. Do not include explanations or commentary.

Keep the question rigorous but somewhat short; these are only practice questions.
";

/// Asks the model to author a free-response question and validates the text
/// it returns.
pub struct QuestionService {
    generator: Arc<dyn TextGenerator>,
}

impl QuestionService {
    pub fn new(generator: Arc<dyn TextGenerator>) -> Self {
        Self { generator }
    }

    /// Generate one practice question.
    ///
    /// Returns the trimmed model text verbatim; no further parsing. Fails
    /// with [`FrqError::InvalidPrompt`] when the text is empty or shorter
    /// than the minimum plausible length.
    pub async fn create_prompt(&self) -> Result<String, FrqError> {
        let text = self.generator.generate(QUESTION_INSTRUCTION).await?;
        let trimmed = text.trim();

        if trimmed.chars().count() < MIN_PROMPT_CHARS {
            tracing::warn!(length = trimmed.len(), "model returned unusable question text");
            return Err(FrqError::InvalidPrompt);
        }

        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use async_trait::async_trait;

    struct StubGenerator(Result<String, ()>);

    #[async_trait]
    impl TextGenerator for StubGenerator {
        fn name(&self) -> &str {
            "stub"
        }

        async fn generate(&self, _instruction: &str) -> Result<String, ProviderError> {
            match &self.0 {
                Ok(text) => Ok(text.clone()),
                Err(()) => Err(ProviderError::Network("connection refused".into())),
            }
        }
    }

    fn service(response: &str) -> QuestionService {
        QuestionService::new(Arc::new(StubGenerator(Ok(response.to_string()))))
    }

    #[tokio::test]
    async fn returns_trimmed_question() {
        let service = service("  <br>(a) Identify a cause of acid rain.\n");
        let prompt = service.create_prompt().await.unwrap();
        assert_eq!(prompt, "<br>(a) Identify a cause of acid rain.");
    }

    #[tokio::test]
    async fn rejects_empty_response() {
        let service = service("   \n  ");
        let err = service.create_prompt().await.unwrap_err();
        assert!(matches!(err, FrqError::InvalidPrompt));
    }

    #[tokio::test]
    async fn rejects_too_short_response() {
        let service = service("Too short");
        let err = service.create_prompt().await.unwrap_err();
        assert!(matches!(err, FrqError::InvalidPrompt));
    }

    #[tokio::test]
    async fn surfaces_upstream_failure() {
        let service = QuestionService::new(Arc::new(StubGenerator(Err(()))));
        let err = service.create_prompt().await.unwrap_err();
        assert!(matches!(err, FrqError::Upstream(_)));
    }
}
