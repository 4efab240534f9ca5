use blockquiz_config::Config;
use blockquiz_services::{AnswerSink, CompletionProvider, HttpAnswerSink, OpenAiCompletion};
use std::sync::Arc;

/// Network collaborators shared with the block views through context
#[derive(Clone)]
pub struct Services {
    pub answers: Arc<dyn AnswerSink>,
    pub completion: Arc<dyn CompletionProvider>,
    pub system_prompt: String,
}

impl Services {
    pub fn from_config(config: &Config) -> Self {
        let completion = &config.completion;
        Self {
            answers: Arc::new(HttpAnswerSink::new(&config.submission.endpoint)),
            completion: Arc::new(OpenAiCompletion::from_env(
                &completion.base_url,
                &completion.model,
                &completion.api_key_env,
            )),
            system_prompt: completion.system_prompt.clone(),
        }
    }
}
