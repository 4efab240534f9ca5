//! Network collaborators of the quiz blocks.
//!
//! Both services sit behind `async-trait` seams so the UI can swap in fakes
//! and tests never touch the network. Failures are logged here and never
//! reach the document model.

pub mod completion;
pub mod error;
pub mod submission;

pub use completion::{CompletionProvider, OpenAiCompletion, ask};
pub use error::ServiceError;
pub use submission::{AnswerSink, HttpAnswerSink, deliver_submission};
