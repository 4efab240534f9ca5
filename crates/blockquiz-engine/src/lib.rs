pub mod autoformat;
pub mod blocks;
pub mod editing;
pub mod io;
pub mod markup;
pub mod models;
pub mod schema;
pub mod view;

#[cfg(test)]
pub mod tests;

// Re-export key types for easier usage
pub use autoformat::{McqDialect, parse_structured_mcq};
pub use editing::{Cmd, Document, Observers, Patch, SubscriptionId};
pub use io::*;
pub use models::*;
