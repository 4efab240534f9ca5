//! UI-independent state and transitions behind the block views.

pub mod ai;
pub mod answers;
pub mod quiz;

pub use ai::AiReply;
pub use quiz::{McqQuiz, Reveal, Submission};
