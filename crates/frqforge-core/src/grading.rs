//! Grading service: builds the grading instruction, interprets the model's
//! judgment, and persists the record.

use std::sync::Arc;

use crate::error::FrqError;
use crate::judgment::parse_judgment;
use crate::model::{FeedbackId, GradeOutcome, GradeRequest, GradingRecord};
use crate::traits::{FeedbackStore, TextGenerator};

/// Grades one free-text answer against its question.
pub struct GradingService {
    generator: Arc<dyn TextGenerator>,
    store: Arc<dyn FeedbackStore>,
}

impl GradingService {
    pub fn new(generator: Arc<dyn TextGenerator>, store: Arc<dyn FeedbackStore>) -> Self {
        Self { generator, store }
    }

    /// Grade a student's answer.
    ///
    /// On success the record is stored under a fresh random identifier and
    /// the returned outcome carries the score plus the feedback path. A
    /// single upstream or parse failure is terminal for the request; nothing
    /// is retried.
    pub async fn grade(&self, request: GradeRequest) -> Result<GradeOutcome, FrqError> {
        let user_answer = non_empty(request.user_answer).ok_or(FrqError::MissingField)?;
        let prompt = non_empty(request.prompt).ok_or(FrqError::MissingField)?;

        let instruction = build_grading_instruction(&prompt, &user_answer);
        let response = self.generator.generate(&instruction).await?;

        let judgment = parse_judgment(&response).inspect_err(|err| match err {
            FrqError::Unparseable { raw } => {
                tracing::error!(%raw, "could not parse JSON from model response");
            }
            FrqError::MalformedJudgment { value } => {
                tracing::error!(%value, "model judgment has invalid shape");
            }
            _ => {}
        })?;

        let id = FeedbackId::new();
        let record = GradingRecord::new(
            judgment.score.clone(),
            judgment.feedback,
            prompt,
            user_answer,
            request.student_name,
            request.class_code,
        );
        self.store.insert(id.clone(), record).await;

        tracing::info!(%id, score = %judgment.score, "stored grading record");

        Ok(GradeOutcome {
            score: judgment.score,
            feedback_url: format!("/feedback/{id}"),
        })
    }
}

/// Presence check matching the original API: `None` and the empty string are
/// both "missing"; whitespace-only input passes.
fn non_empty(field: Option<String>) -> Option<String> {
    field.filter(|s| !s.is_empty())
}

/// Build the grading instruction embedding the question and answer verbatim.
fn build_grading_instruction(prompt: &str, user_answer: &str) -> String {
    format!(
        "You are an AP Environmental Science grader. Grade the following student response on a \
         scale from 0 to 10 and provide detailed feedback on how the response can be improved. \
         When grading, consider the fact that \"identify\" problems only require a single correct \
         answer, while \"describe\" and \"explain\" problems require a more detailed response. \
         Being concise in responses can still earn full credit as long as the answer is correct.\n\
         \n\
         Prompt:\n\
         {prompt}\n\
         \n\
         Student Response:\n\
         {user_answer}\n\
         \n\
         Return only a valid JSON object. Do not include any explanation, intro, or text outside \
         the JSON. Format:\n\
         {{\n  \"score\": number,\n  \"feedback\": string\n}}\n"
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ProviderError;
    use crate::store::MemoryStore;
    use crate::model::{UNKNOWN_STUDENT, UNSPECIFIED_CLASS};
    use async_trait::async_trait;
    use serde_json::Number;

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

    fn service(response: &str) -> (GradingService, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let service = GradingService::new(
            Arc::new(StubGenerator(Ok(response.to_string()))),
            store.clone(),
        );
        (service, store)
    }

    fn request(answer: &str, prompt: &str) -> GradeRequest {
        GradeRequest {
            user_answer: Some(answer.to_string()),
            prompt: Some(prompt.to_string()),
            student_name: None,
            class_code: None,
        }
    }

    #[tokio::test]
    async fn rejects_missing_answer() {
        let (service, _) = service("{}");
        let err = service
            .grade(GradeRequest {
                prompt: Some("(a) Identify...".into()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, FrqError::MissingField));
    }

    #[tokio::test]
    async fn rejects_empty_prompt() {
        let (service, _) = service("{}");
        let err = service
            .grade(GradeRequest {
                user_answer: Some("Acid rain".into()),
                prompt: Some(String::new()),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, FrqError::MissingField));
    }

    #[tokio::test]
    async fn grades_and_stores_record() {
        let (service, store) = service(
            r#"{"score": 8, "feedback": "Correct but could mention SO2/NOx emissions."}"#,
        );

        let outcome = service
            .grade(GradeRequest {
                student_name: Some("Ada".into()),
                class_code: Some("mahs".into()),
                ..request("Acid rain", "(a) Identify a cause of acid rain.")
            })
            .await
            .unwrap();

        assert_eq!(outcome.score, Number::from(8));
        let id = outcome.feedback_url.strip_prefix("/feedback/").unwrap();

        let record = store.get(&FeedbackId::from(id)).await.unwrap();
        assert_eq!(record.user_answer, "Acid rain");
        assert_eq!(record.prompt, "(a) Identify a cause of acid rain.");
        assert_eq!(record.student_name, "Ada");
        assert_eq!(record.class_code, "mahs");
    }

    #[tokio::test]
    async fn defaults_sentinels_when_name_and_class_missing() {
        let (service, store) = service(r#"{"score": 6, "feedback": "Fine."}"#);

        let outcome = service.grade(request("answer", "prompt")).await.unwrap();
        let id = outcome.feedback_url.strip_prefix("/feedback/").unwrap();

        let record = store.get(&FeedbackId::from(id)).await.unwrap();
        assert_eq!(record.student_name, UNKNOWN_STUDENT);
        assert_eq!(record.class_code, UNSPECIFIED_CLASS);
    }

    #[tokio::test]
    async fn accepts_commentary_wrapped_judgment() {
        let (service, _) = service("Sure! {\"score\":7,\"feedback\":\"Good.\"} Hope that helps.");
        let outcome = service.grade(request("answer", "prompt")).await.unwrap();
        assert_eq!(outcome.score, Number::from(7));
    }

    #[tokio::test]
    async fn unparseable_judgment_surfaces_raw_text() {
        let (service, store) = service("I refuse to answer in JSON.");
        let err = service.grade(request("answer", "prompt")).await.unwrap_err();
        match err {
            FrqError::Unparseable { raw } => assert_eq!(raw, "I refuse to answer in JSON."),
            other => panic!("expected Unparseable, got {other:?}"),
        }
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn upstream_failure_stores_nothing() {
        let store = Arc::new(MemoryStore::new());
        let service =
            GradingService::new(Arc::new(StubGenerator(Err(()))), store.clone());
        let err = service.grade(request("answer", "prompt")).await.unwrap_err();
        assert!(matches!(err, FrqError::Upstream(_)));
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn concurrent_grades_get_distinct_ids() {
        let (service, store) = service(r#"{"score": 5, "feedback": "Okay."}"#);
        let service = Arc::new(service);

        let a = service.grade(GradeRequest {
            student_name: Some("Ada".into()),
            ..request("answer A", "prompt A")
        });
        let b = service.grade(GradeRequest {
            student_name: Some("Grace".into()),
            ..request("answer B", "prompt B")
        });
        let (a, b) = tokio::join!(a, b);
        let (a, b) = (a.unwrap(), b.unwrap());

        assert_ne!(a.feedback_url, b.feedback_url);

        let id_a = a.feedback_url.strip_prefix("/feedback/").unwrap();
        let id_b = b.feedback_url.strip_prefix("/feedback/").unwrap();
        assert_eq!(store.get(&FeedbackId::from(id_a)).await.unwrap().student_name, "Ada");
        assert_eq!(store.get(&FeedbackId::from(id_b)).await.unwrap().student_name, "Grace");
    }

    #[test]
    fn grading_instruction_embeds_both_texts_verbatim() {
        let instruction = build_grading_instruction("(a) Identify...", "Acid rain");
        assert!(instruction.contains("Prompt:\n(a) Identify..."));
        assert!(instruction.contains("Student Response:\nAcid rain"));
        assert!(instruction.contains("\"score\": number"));
    }
}
