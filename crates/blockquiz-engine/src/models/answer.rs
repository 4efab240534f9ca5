use serde::{Deserialize, Serialize};

/// One choice of a multiple-choice question
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Answer {
    pub text: String,
    pub correct: bool,
}

impl Answer {
    pub fn new(text: impl Into<String>, correct: bool) -> Self {
        Self {
            text: text.into(),
            correct,
        }
    }

    /// A blank, incorrect answer as appended by "Add Answer"
    pub fn blank() -> Self {
        Self::new("", false)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_answer_json_shape() {
        let json = serde_json::to_string(&Answer::new("1", true)).unwrap();
        assert_eq!(json, r#"{"text":"1","correct":true}"#);
    }

    #[test]
    fn test_answer_rejects_missing_correct_flag() {
        let parsed: Result<Answer, _> = serde_json::from_str(r#"{"text":"1"}"#);
        assert!(parsed.is_err());
    }
}
