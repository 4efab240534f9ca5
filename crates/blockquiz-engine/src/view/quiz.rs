use serde::{Deserialize, Serialize};

use crate::models::{Answer, McqAttrs};

/// Correctness shown next to the submitted answer
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Reveal {
    pub index: usize,
    pub correct: bool,
}

/// Body posted to the answer-submission endpoint
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Submission {
    pub question_text: String,
    pub user_answer: Option<String>,
    pub answers: Vec<Answer>,
}

/// Answering state of one MCQ block in view mode.
///
/// Lives only as long as the view; it is never written into the block's
/// attributes. Selection is single-choice and freezes on submit.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct McqQuiz {
    selected: Option<usize>,
    submitted: bool,
    reveal: Option<Reveal>,
}

impl McqQuiz {
    pub fn new() -> Self {
        Self::default()
    }

    /// Choose an answer, replacing any previous choice. Ignored once
    /// submitted or when `index` is out of range.
    pub fn select(&mut self, index: usize, answers: &[Answer]) -> bool {
        if self.submitted || index >= answers.len() {
            return false;
        }
        self.selected = Some(index);
        true
    }

    pub fn selected(&self) -> Option<usize> {
        self.selected
    }

    pub fn is_selected(&self, index: usize) -> bool {
        self.selected == Some(index)
    }

    pub fn is_submitted(&self) -> bool {
        self.submitted
    }

    pub fn reveal(&self) -> Option<Reveal> {
        self.reveal
    }

    /// Lock the quiz and grade the selected answer locally.
    ///
    /// Returns the payload to deliver to the submission endpoint, or `None`
    /// if the quiz was already submitted. Grading never waits on delivery.
    pub fn submit(&mut self, attrs: &McqAttrs) -> Option<Submission> {
        if self.submitted {
            return None;
        }
        self.submitted = true;

        let chosen = self
            .selected
            .and_then(|index| attrs.answers.get(index).map(|answer| (index, answer)));
        self.reveal = chosen.map(|(index, answer)| Reveal {
            index,
            correct: answer.correct,
        });

        Some(Submission {
            question_text: attrs.question_text.clone(),
            user_answer: chosen.map(|(_, answer)| answer.text.clone()),
            answers: attrs.answers.clone(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn attrs() -> McqAttrs {
        McqAttrs::new(
            "Letter A?",
            vec![
                Answer::new("8", false),
                Answer::new("1", true),
                Answer::new("23", false),
            ],
        )
    }

    #[test]
    fn test_selection_is_single_choice() {
        let attrs = attrs();
        let mut quiz = McqQuiz::new();
        assert!(quiz.select(0, &attrs.answers));
        assert!(quiz.select(2, &attrs.answers));
        assert!(!quiz.is_selected(0));
        assert!(quiz.is_selected(2));
        assert!(!quiz.select(3, &attrs.answers));
        assert_eq!(quiz.selected(), Some(2));
    }

    #[test]
    fn test_submit_reveals_correct_answer() {
        let attrs = attrs();
        let mut quiz = McqQuiz::new();
        quiz.select(1, &attrs.answers);
        let submission = quiz.submit(&attrs).unwrap();

        assert_eq!(quiz.reveal(), Some(Reveal { index: 1, correct: true }));
        assert_eq!(submission.user_answer.as_deref(), Some("1"));
        assert_eq!(submission.answers, attrs.answers);
    }

    #[test]
    fn test_submit_reveals_incorrect_answer() {
        let attrs = attrs();
        let mut quiz = McqQuiz::new();
        quiz.select(2, &attrs.answers);
        quiz.submit(&attrs);
        assert_eq!(quiz.reveal(), Some(Reveal { index: 2, correct: false }));
    }

    #[test]
    fn test_selection_locked_after_submit() {
        let attrs = attrs();
        let mut quiz = McqQuiz::new();
        quiz.select(0, &attrs.answers);
        quiz.submit(&attrs);

        assert!(!quiz.select(1, &attrs.answers));
        assert_eq!(quiz.selected(), Some(0));
        assert_eq!(quiz.submit(&attrs), None);
    }

    #[test]
    fn test_submit_without_selection_locks_without_reveal() {
        let attrs = attrs();
        let mut quiz = McqQuiz::new();
        let submission = quiz.submit(&attrs).unwrap();
        assert!(quiz.is_submitted());
        assert_eq!(quiz.reveal(), None);
        assert_eq!(submission.user_answer, None);
    }

    #[test]
    fn test_submission_json_shape() {
        let submission = Submission {
            question_text: "Q".to_string(),
            user_answer: Some("a".to_string()),
            answers: vec![Answer::new("a", true)],
        };
        let value = serde_json::to_value(&submission).unwrap();
        assert_eq!(
            value,
            serde_json::json!({
                "question_text": "Q",
                "user_answer": "a",
                "answers": [{"text": "a", "correct": true}]
            })
        );
    }
}
