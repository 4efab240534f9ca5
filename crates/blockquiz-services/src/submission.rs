use async_trait::async_trait;
use blockquiz_engine::view::Submission;
use reqwest::Client;

use crate::ServiceError;

/// Receiver of graded MCQ answers
#[async_trait]
pub trait AnswerSink: Send + Sync {
    /// Deliver one submission, returning whatever JSON the receiver replied with
    async fn submit(&self, submission: &Submission) -> Result<serde_json::Value, ServiceError>;
}

/// Posts submissions as JSON to an HTTP endpoint
pub struct HttpAnswerSink {
    client: Client,
    endpoint: String,
}

impl HttpAnswerSink {
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.into(),
        }
    }
}

#[async_trait]
impl AnswerSink for HttpAnswerSink {
    async fn submit(&self, submission: &Submission) -> Result<serde_json::Value, ServiceError> {
        log::debug!("Posting submission to {}", self.endpoint);

        let response = self
            .client
            .post(&self.endpoint)
            .header("Content-Type", "application/json")
            .json(submission)
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Status {
                service: "Submission endpoint",
                status: status.as_u16(),
                body,
            });
        }

        Ok(response.json().await?)
    }
}

/// Send a submission and log the outcome. Returns whether it was accepted.
///
/// The quiz has already been graded locally by the time this runs, so a
/// failure here only costs the record on the server.
pub async fn deliver_submission(sink: &dyn AnswerSink, submission: &Submission) -> bool {
    match sink.submit(submission).await {
        Ok(reply) => {
            log::info!("Submission successful: {reply}");
            true
        }
        Err(e) => {
            log::error!("Failed to submit the data: {e}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockquiz_engine::view::McqQuiz;
    use blockquiz_engine::{Answer, McqAttrs};
    use pretty_assertions::assert_eq;
    use std::sync::Mutex;

    /// Records submissions and answers with a canned outcome
    struct FakeSink {
        received: Mutex<Vec<Submission>>,
        fail: bool,
    }

    impl FakeSink {
        fn new(fail: bool) -> Self {
            Self {
                received: Mutex::new(Vec::new()),
                fail,
            }
        }
    }

    #[async_trait]
    impl AnswerSink for FakeSink {
        async fn submit(&self, submission: &Submission) -> Result<serde_json::Value, ServiceError> {
            self.received.lock().unwrap().push(submission.clone());
            if self.fail {
                Err(ServiceError::Status {
                    service: "fake",
                    status: 500,
                    body: "boom".to_string(),
                })
            } else {
                Ok(serde_json::json!({"id": 1}))
            }
        }
    }

    fn attrs() -> McqAttrs {
        McqAttrs::new(
            "Letter A?",
            vec![Answer::new("8", false), Answer::new("1", true)],
        )
    }

    #[tokio::test]
    async fn test_deliver_success() {
        let sink = FakeSink::new(false);
        let mut quiz = McqQuiz::new();
        let attrs = attrs();
        quiz.select(1, &attrs.answers);
        let submission = quiz.submit(&attrs).unwrap();

        assert!(deliver_submission(&sink, &submission).await);
        let received = sink.received.lock().unwrap();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0].user_answer.as_deref(), Some("1"));
    }

    #[tokio::test]
    async fn test_reveal_does_not_depend_on_delivery() {
        let sink = FakeSink::new(true);
        let mut quiz = McqQuiz::new();
        let attrs = attrs();
        quiz.select(0, &attrs.answers);
        let submission = quiz.submit(&attrs).unwrap();

        assert!(!deliver_submission(&sink, &submission).await);
        let reveal = quiz.reveal().unwrap();
        assert_eq!(reveal.index, 0);
        assert!(!reveal.correct);
        assert!(quiz.is_submitted());
    }
}
