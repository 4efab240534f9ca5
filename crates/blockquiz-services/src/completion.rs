use async_trait::async_trait;
use blockquiz_engine::view::{AiReply, ai::NO_RESPONSE_TEXT};
use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::ServiceError;

/// Chat-completion backend answering AI blocks
#[async_trait]
pub trait CompletionProvider: Send + Sync {
    /// Reply text of the first choice, or `None` if the backend sent none
    async fn complete(&self, system_prompt: &str, question: &str)
    -> Result<Option<String>, ServiceError>;
}

/// OpenAI-compatible `/chat/completions` client
pub struct OpenAiCompletion {
    client: Client,
    base_url: String,
    model: String,
    api_key: Option<String>,
    api_key_env: String,
}

impl OpenAiCompletion {
    pub fn new(base_url: impl Into<String>, model: impl Into<String>, api_key: Option<String>) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.into(),
            model: model.into(),
            api_key,
            api_key_env: String::new(),
        }
    }

    /// Build a client whose key is read from the environment variable `api_key_env`
    pub fn from_env(
        base_url: impl Into<String>,
        model: impl Into<String>,
        api_key_env: impl Into<String>,
    ) -> Self {
        let api_key_env = api_key_env.into();
        let api_key = std::env::var(&api_key_env).ok().filter(|key| !key.is_empty());
        if api_key.is_none() {
            log::warn!("${api_key_env} is not set, AI blocks will not get answers");
        }
        Self {
            api_key_env,
            ..Self::new(base_url, model, api_key)
        }
    }

    fn endpoint(&self) -> String {
        format!("{}/chat/completions", self.base_url.trim_end_matches('/'))
    }
}

#[derive(Serialize)]
struct ChatRequest<'a> {
    model: &'a str,
    messages: Vec<ChatMessage<'a>>,
}

#[derive(Serialize)]
struct ChatMessage<'a> {
    role: &'a str,
    content: &'a str,
}

#[derive(Deserialize)]
struct ChatResponse {
    #[serde(default)]
    choices: Vec<Choice>,
}

#[derive(Deserialize)]
struct Choice {
    message: ReplyMessage,
}

#[derive(Deserialize)]
struct ReplyMessage {
    content: Option<String>,
}

fn request_body<'a>(model: &'a str, system_prompt: &'a str, question: &'a str) -> ChatRequest<'a> {
    ChatRequest {
        model,
        messages: vec![
            ChatMessage {
                role: "system",
                content: system_prompt,
            },
            ChatMessage {
                role: "user",
                content: question,
            },
        ],
    }
}

fn first_reply(response: ChatResponse) -> Option<String> {
    response
        .choices
        .into_iter()
        .next()
        .and_then(|choice| choice.message.content)
}

#[async_trait]
impl CompletionProvider for OpenAiCompletion {
    async fn complete(
        &self,
        system_prompt: &str,
        question: &str,
    ) -> Result<Option<String>, ServiceError> {
        let Some(api_key) = &self.api_key else {
            return Err(ServiceError::MissingApiKey(self.api_key_env.clone()));
        };

        log::debug!("Sending question to {} ({})", self.endpoint(), self.model);

        let response = self
            .client
            .post(self.endpoint())
            .bearer_auth(api_key)
            .json(&request_body(&self.model, system_prompt, question))
            .send()
            .await?;

        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ServiceError::Status {
                service: "Completion endpoint",
                status: status.as_u16(),
                body,
            });
        }

        let chat: ChatResponse = response.json().await?;
        Ok(first_reply(chat))
    }
}

/// Ask the AI a question. Never fails: errors become [`AiReply::Failed`].
pub async fn ask(provider: &dyn CompletionProvider, system_prompt: &str, question: &str) -> AiReply {
    match provider.complete(system_prompt, question).await {
        Ok(content) => {
            let reply = AiReply::from_content(content.as_deref());
            if content.is_none() {
                log::warn!("Completion had no content, showing {NO_RESPONSE_TEXT:?}");
            }
            reply
        }
        Err(e) => {
            log::error!("Error fetching AI response: {e}");
            AiReply::Failed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use blockquiz_engine::view::ai::ERROR_TEXT;
    use pretty_assertions::assert_eq;

    enum FakeProvider {
        Reply(&'static str),
        Empty,
        Broken,
    }

    #[async_trait]
    impl CompletionProvider for FakeProvider {
        async fn complete(
            &self,
            _system_prompt: &str,
            _question: &str,
        ) -> Result<Option<String>, ServiceError> {
            match self {
                FakeProvider::Reply(text) => Ok(Some(text.to_string())),
                FakeProvider::Empty => Ok(None),
                FakeProvider::Broken => Err(ServiceError::MissingApiKey("TEST_KEY".to_string())),
            }
        }
    }

    const SYSTEM_PROMPT: &str = "You are a helpful assistant.";

    #[tokio::test]
    async fn test_ask_trims_reply() {
        let reply = ask(&FakeProvider::Reply("  42\n"), SYSTEM_PROMPT, "Meaning?").await;
        assert_eq!(reply, AiReply::Answer("42".to_string()));
    }

    #[tokio::test]
    async fn test_ask_without_content_uses_fallback() {
        let reply = ask(&FakeProvider::Empty, SYSTEM_PROMPT, "Hello?").await;
        assert_eq!(reply.display_text(), NO_RESPONSE_TEXT);
    }

    #[tokio::test]
    async fn test_ask_failure_shows_error() {
        let reply = ask(&FakeProvider::Broken, SYSTEM_PROMPT, "Hello?").await;
        assert_eq!(reply, AiReply::Failed);
        assert_eq!(reply.display_text(), ERROR_TEXT);
    }

    #[tokio::test]
    async fn test_missing_key_fails_without_request() {
        let provider = OpenAiCompletion::new("https://api.openai.com/v1", "gpt-4o-mini", None);
        let result = provider.complete(SYSTEM_PROMPT, "Hi").await;
        assert!(matches!(result, Err(ServiceError::MissingApiKey(_))));
    }

    #[test]
    fn test_request_body_shape() {
        let body = serde_json::to_value(request_body("gpt-4o-mini", "sys", "q")).unwrap();
        assert_eq!(
            body,
            serde_json::json!({
                "model": "gpt-4o-mini",
                "messages": [
                    {"role": "system", "content": "sys"},
                    {"role": "user", "content": "q"}
                ]
            })
        );
    }

    #[test]
    fn test_first_reply_parsing() {
        let parse = |json: &str| first_reply(serde_json::from_str(json).unwrap());
        assert_eq!(
            parse(r#"{"choices":[{"message":{"role":"assistant","content":"hi"}}]}"#),
            Some("hi".to_string())
        );
        assert_eq!(parse(r#"{"choices":[]}"#), None);
        assert_eq!(parse(r#"{}"#), None);
        assert_eq!(parse(r#"{"choices":[{"message":{"content":null}}]}"#), None);
    }

    #[test]
    fn test_endpoint_joins_base_url() {
        let provider = OpenAiCompletion::new("http://localhost:1234/v1/", "m", None);
        assert_eq!(provider.endpoint(), "http://localhost:1234/v1/chat/completions");
    }
}
