//! Feedback page generator.
//!
//! Produces a self-contained HTML document with all CSS inlined and a
//! client-side print button. Every embedded field is HTML-escaped before any
//! markup is (re)introduced: newlines become `<br>` after escaping, and only
//! the prompt field gets its literal `<br>` display markers restored to real
//! tags, since the question-authoring instruction mandates them.

use std::sync::Arc;

use frqforge_core::error::FrqError;
use frqforge_core::model::{FeedbackId, GradingRecord};
use frqforge_core::traits::FeedbackStore;

/// Renders stored feedback behind the class-code gate.
pub struct FeedbackService {
    store: Arc<dyn FeedbackStore>,
    accepted_class_code: String,
}

impl FeedbackService {
    pub fn new(store: Arc<dyn FeedbackStore>, accepted_class_code: &str) -> Self {
        Self {
            store,
            accepted_class_code: accepted_class_code.to_string(),
        }
    }

    /// Look up a record and render its feedback page.
    ///
    /// Fails with [`FrqError::NotFound`] for an unknown identifier and
    /// [`FrqError::Forbidden`] when the stored class code does not match the
    /// single accepted value.
    pub async fn render(&self, id: &FeedbackId) -> Result<String, FrqError> {
        let record = self.store.get(id).await.ok_or(FrqError::NotFound)?;

        if record.class_code != self.accepted_class_code {
            tracing::warn!(%id, class_code = %record.class_code, "rejected feedback request");
            return Err(FrqError::Forbidden);
        }

        Ok(render_document(&record))
    }
}

/// Escape a string for safe HTML insertion.
fn html_escape(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&#x27;")
}

/// Escape, then convert embedded newlines to visual line breaks.
fn text_block(s: &str) -> String {
    html_escape(s).replace('\n', "<br>")
}

/// Like [`text_block`], but restores literal `<br>`/`<br/>` display markers.
/// Used for the prompt field only.
fn prompt_block(s: &str) -> String {
    text_block(s)
        .replace("&lt;br&gt;", "<br>")
        .replace("&lt;br/&gt;", "<br>")
}

/// Render the feedback document for one grading record.
pub fn render_document(record: &GradingRecord) -> String {
    let mut html = String::new();

    html.push_str("<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n");
    html.push_str("<meta charset=\"UTF-8\">\n");
    html.push_str("<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">\n");
    html.push_str("<title>APES FRQ Feedback</title>\n");
    html.push_str("<style>\n");
    html.push_str(CSS);
    html.push_str("</style>\n");
    html.push_str("</head>\n<body>\n");

    html.push_str("<div class=\"feedback-container\">\n");

    // Info table
    html.push_str("<table class=\"info-table\">\n");
    html.push_str(&format!(
        "<tr><th>Student:</th><td>{}</td></tr>\n",
        html_escape(&record.student_name)
    ));
    html.push_str(&format!(
        "<tr><th>Class Code:</th><td>{}</td></tr>\n",
        html_escape(&record.class_code)
    ));
    html.push_str(&format!(
        "<tr><th>Score:</th><td>{} / 10</td></tr>\n",
        record.score
    ));
    html.push_str("</table>\n");

    html.push_str("<h3>Prompt:</h3>\n");
    html.push_str(&format!("<p>{}</p>\n", prompt_block(&record.prompt)));

    html.push_str("<h3>Student Answer:</h3>\n");
    html.push_str(&format!("<p>{}</p>\n", text_block(&record.user_answer)));

    html.push_str("<h3>Detailed Feedback:</h3>\n");
    html.push_str(&format!("<p>{}</p>\n", text_block(&record.feedback)));

    html.push_str(
        "<button class=\"print-button\" onclick=\"window.print()\">Create PDF</button>\n",
    );
    html.push_str("</div>\n");

    html.push_str("</body>\n</html>");
    html
}

const CSS: &str = r#"
body {
  font-family: 'Inter', sans-serif;
  color: #334155;
  font-size: 14px;
}
.feedback-container {
  max-width: 800px;
  margin: 2rem auto;
  padding: 1.5rem;
  background: #f9fafb;
  border-radius: 8px;
  box-shadow: 0 4px 12px rgba(0, 0, 0, 0.1);
}
h3 {
  color: #2563eb;
  font-size: 1.5rem;
  margin-bottom: 1rem;
}
p {
  line-height: 1.6;
  margin-bottom: 1rem;
}
.info-table {
  width: 100%;
  border-collapse: collapse;
  margin-bottom: 1rem;
}
.info-table th, .info-table td {
  padding: 0.5rem;
  text-align: left;
}
.print-button {
  display: block;
  width: 100%;
  margin-top: 1.5rem;
  padding: 0.75rem;
  text-align: center;
  background-color: #2563eb;
  color: white;
  border: none;
  cursor: pointer;
  font-weight: 600;
  text-decoration: none;
}
@media print {
  body {
    font-family: Arial, sans-serif;
    font-size: 12px;
    color: black;
  }
  .feedback-container {
    max-width: none;
    padding: 0;
    margin: 0;
    box-shadow: none;
    border: none;
  }
  h3 {
    font-size: 1.15rem;
    color: black;
  }
  p {
    line-height: 1.4;
    margin-bottom: 0.5rem;
  }
  .info-table, .info-table th, .info-table td {
    border: 1px solid #000000;
  }
  .print-button {
    display: none;
  }
}
"#;
