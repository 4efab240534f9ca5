use crate::models::block::DEFAULT_MCQ_QUESTION;
use crate::models::{Answer, McqAttrs, Mode};
use crate::schema::{AttrSpec, NodeSpec};

pub const SHORTCUT_QUESTION: &str = "What number is the letter A in the English alphabet?";
pub const TOOLBAR_QUESTION: &str = "Question?";

static MCQ_SCHEMA: [AttrSpec<McqAttrs>; 3] = [
    AttrSpec {
        name: "questionText",
        markup: "data-question-text",
        decode: |attrs, value| {
            attrs.question_text = value.unwrap_or(DEFAULT_MCQ_QUESTION).to_string()
        },
        encode: |attrs| attrs.question_text.clone(),
    },
    AttrSpec {
        name: "answers",
        markup: "data-answers",
        decode: |attrs, value| attrs.answers = value.map(decode_answers).unwrap_or_default(),
        encode: |attrs| encode_answers(&attrs.answers),
    },
    AttrSpec {
        name: "mode",
        markup: "data-mode",
        decode: |attrs, value| attrs.mode = value.map(Mode::from_markup).unwrap_or_default(),
        encode: |attrs| attrs.mode.as_str().to_string(),
    },
];

impl NodeSpec for McqAttrs {
    const TYPE_NAME: &'static str = "mcq";

    fn schema() -> &'static [AttrSpec<Self>] {
        &MCQ_SCHEMA
    }
}

/// Parse a stored answer list. Malformed JSON yields an empty list.
pub fn decode_answers(json: &str) -> Vec<Answer> {
    match serde_json::from_str(json) {
        Ok(answers) => answers,
        Err(e) => {
            log::warn!("Ignoring malformed data-answers {json:?}: {e}");
            Vec::new()
        }
    }
}

pub fn encode_answers(answers: &[Answer]) -> String {
    serde_json::to_string(answers).unwrap_or_else(|e| {
        log::error!("Failed to encode answers: {e}");
        "[]".to_string()
    })
}

/// Attributes inserted by the `???` shortcut
pub fn shortcut_example() -> McqAttrs {
    McqAttrs::new(
        SHORTCUT_QUESTION,
        vec![
            Answer::new("8", false),
            Answer::new("14", false),
            Answer::new("1", true),
            Answer::new("23", false),
        ],
    )
}

/// Attributes inserted by the toolbar's "add mcq" button
pub fn toolbar_template() -> McqAttrs {
    McqAttrs::new(
        TOOLBAR_QUESTION,
        (1..=4)
            .map(|n| Answer::new(format!("answer {n}"), false))
            .collect(),
    )
}
