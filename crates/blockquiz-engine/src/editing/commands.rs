use crate::models::{AiAttrs, Answer, Block, McqAttrs, Mode, NodeId, TextKind};

/// Partial update of an AI block; `None` fields are left as they are
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct AiUpdate {
    pub question: Option<String>,
    pub answer: Option<String>,
    pub mode: Option<Mode>,
}

/// Partial update of an MCQ block; `None` fields are left as they are
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct McqUpdate {
    pub question_text: Option<String>,
    pub answers: Option<Vec<Answer>>,
    pub mode: Option<Mode>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrUpdate {
    Ai(AiUpdate),
    Mcq(McqUpdate),
}

impl AttrUpdate {
    pub fn question(question: impl Into<String>) -> Self {
        AttrUpdate::Ai(AiUpdate {
            question: Some(question.into()),
            ..AiUpdate::default()
        })
    }

    pub fn question_and_answer(question: impl Into<String>, answer: impl Into<String>) -> Self {
        AttrUpdate::Ai(AiUpdate {
            question: Some(question.into()),
            answer: Some(answer.into()),
            mode: None,
        })
    }

    pub fn question_text(question_text: impl Into<String>) -> Self {
        AttrUpdate::Mcq(McqUpdate {
            question_text: Some(question_text.into()),
            ..McqUpdate::default()
        })
    }

    pub fn answers(answers: Vec<Answer>) -> Self {
        AttrUpdate::Mcq(McqUpdate {
            answers: Some(answers),
            ..McqUpdate::default()
        })
    }

    /// Merge into a block. Returns whether anything changed; an update for
    /// the wrong block type changes nothing.
    pub(crate) fn apply_to(self, block: &mut Block) -> bool {
        match (self, block) {
            (AttrUpdate::Ai(update), Block::Ai(attrs)) => merge_ai(update, attrs),
            (AttrUpdate::Mcq(update), Block::Mcq(attrs)) => merge_mcq(update, attrs),
            _ => false,
        }
    }
}

fn replace<T: PartialEq>(slot: &mut T, value: Option<T>) -> bool {
    match value {
        Some(value) if *slot != value => {
            *slot = value;
            true
        }
        _ => false,
    }
}

fn merge_ai(update: AiUpdate, attrs: &mut AiAttrs) -> bool {
    let question = replace(&mut attrs.question, update.question);
    let answer = replace(&mut attrs.answer, update.answer);
    let mode = replace(&mut attrs.mode, update.mode);
    question || answer || mode
}

fn merge_mcq(update: McqUpdate, attrs: &mut McqAttrs) -> bool {
    let question_text = replace(&mut attrs.question_text, update.question_text);
    let answers = replace(&mut attrs.answers, update.answers);
    let mode = replace(&mut attrs.mode, update.mode);
    question_text || answers || mode
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Cmd {
    /// Insert an empty or pre-filled paragraph after the cursor
    InsertParagraph { text: String },
    /// Insert an AI block after the cursor
    InsertAi { question: String, answer: String },
    /// Insert an MCQ block after the cursor
    InsertMcq {
        question_text: String,
        answers: Vec<Answer>,
    },
    /// Replace the text of a text block, then run the autoformat rules
    SetText { id: NodeId, text: String },
    SetTextKind { id: NodeId, kind: TextKind },
    /// The attribute-update callback of a block view
    UpdateAttributes { id: NodeId, update: AttrUpdate },
    RemoveBlock { id: NodeId },
    Focus { id: NodeId },
    /// Switch the whole document, and every custom block in it, to `mode`
    SetMode(Mode),
}
