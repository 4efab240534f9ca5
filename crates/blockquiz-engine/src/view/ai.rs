use crate::editing::AttrUpdate;

pub const NO_RESPONSE_TEXT: &str = "No response received";
pub const ERROR_TEXT: &str = "Error: Unable to fetch response";

/// Outcome of asking the completion endpoint for an AI block's answer
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AiReply {
    Answer(String),
    /// The request failed; shown to the user but never persisted
    Failed,
}

impl AiReply {
    /// Build a reply from the first choice's message content
    pub fn from_content(content: Option<&str>) -> Self {
        let text = content.map(str::trim).unwrap_or(NO_RESPONSE_TEXT);
        AiReply::Answer(text.to_string())
    }

    pub fn display_text(&self) -> &str {
        match self {
            AiReply::Answer(text) => text,
            AiReply::Failed => ERROR_TEXT,
        }
    }

    /// Attribute update persisting the question together with its answer
    pub fn to_update(&self, question: &str) -> Option<AttrUpdate> {
        match self {
            AiReply::Answer(text) => Some(AttrUpdate::question_and_answer(question, text.as_str())),
            AiReply::Failed => None,
        }
    }
}
