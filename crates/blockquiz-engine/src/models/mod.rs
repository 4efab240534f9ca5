pub mod answer;
pub mod block;
pub mod mode;

pub use answer::Answer;
pub use block::{
    AiAttrs, Block, DEFAULT_AI_QUESTION, DEFAULT_MCQ_QUESTION, McqAttrs, Node, NodeId, TextBlock,
    TextKind,
};
pub use mode::Mode;
