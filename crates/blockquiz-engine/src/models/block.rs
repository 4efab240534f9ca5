use serde::{Deserialize, Serialize};
use std::fmt;
use uuid::Uuid;

use super::{Answer, Mode};

pub const DEFAULT_AI_QUESTION: &str = "Ask me anything...";
pub const DEFAULT_MCQ_QUESTION: &str = "Your question?";

/// Stable identifier for a top-level node, unique for the document's lifetime
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NodeId(Uuid);

impl NodeId {
    pub fn new() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Default for NodeId {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fmt::Display::fmt(&self.0, f)
    }
}

/// Attributes of an AI question/answer block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AiAttrs {
    pub question: String,
    pub answer: String,
    pub mode: Mode,
}

impl Default for AiAttrs {
    fn default() -> Self {
        Self {
            question: DEFAULT_AI_QUESTION.to_string(),
            answer: String::new(),
            mode: Mode::Edit,
        }
    }
}

/// Attributes of a multiple-choice-question block
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct McqAttrs {
    pub question_text: String,
    pub answers: Vec<Answer>,
    pub mode: Mode,
}

impl Default for McqAttrs {
    fn default() -> Self {
        Self {
            question_text: DEFAULT_MCQ_QUESTION.to_string(),
            answers: Vec::new(),
            mode: Mode::Edit,
        }
    }
}

impl McqAttrs {
    pub fn new(question_text: impl Into<String>, answers: Vec<Answer>) -> Self {
        Self {
            question_text: question_text.into(),
            answers,
            mode: Mode::Edit,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextKind {
    #[default]
    Paragraph,
    Heading(u8),
}

impl TextKind {
    pub fn tag(&self) -> String {
        match self {
            TextKind::Paragraph => "p".to_string(),
            TextKind::Heading(level) => format!("h{}", (*level).clamp(1, 6)),
        }
    }

    pub fn from_tag(tag: &str) -> Option<Self> {
        match tag {
            "p" => Some(TextKind::Paragraph),
            "h1" => Some(TextKind::Heading(1)),
            "h2" => Some(TextKind::Heading(2)),
            "h3" => Some(TextKind::Heading(3)),
            "h4" => Some(TextKind::Heading(4)),
            "h5" => Some(TextKind::Heading(5)),
            "h6" => Some(TextKind::Heading(6)),
            _ => None,
        }
    }
}

/// Plain-text block the autoformat rules run against
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TextBlock {
    pub kind: TextKind,
    pub text: String,
}

impl TextBlock {
    pub fn paragraph(text: impl Into<String>) -> Self {
        Self {
            kind: TextKind::Paragraph,
            text: text.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Block {
    Text(TextBlock),
    Ai(AiAttrs),
    Mcq(McqAttrs),
    /// Markup the host document does not model, kept verbatim
    Raw(String),
}

impl Block {
    pub fn mode(&self) -> Option<Mode> {
        match self {
            Block::Ai(attrs) => Some(attrs.mode),
            Block::Mcq(attrs) => Some(attrs.mode),
            Block::Text(_) | Block::Raw(_) => None,
        }
    }

    pub(crate) fn set_mode(&mut self, mode: Mode) -> bool {
        let slot = match self {
            Block::Ai(attrs) => &mut attrs.mode,
            Block::Mcq(attrs) => &mut attrs.mode,
            Block::Text(_) | Block::Raw(_) => return false,
        };
        let changed = *slot != mode;
        *slot = mode;
        changed
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    pub id: NodeId,
    pub block: Block,
}

impl Node {
    pub fn new(block: Block) -> Self {
        Self {
            id: NodeId::new(),
            block,
        }
    }
}
