pub mod ai_block;
pub mod block;
pub mod document_content;
pub mod error_screen;
pub mod mcq_block;
pub mod paragraph;
pub mod raw_markup;
pub mod toolbar;

pub use ai_block::AiBlock;
pub use block::BlockView;
pub use document_content::DocumentContent;
pub use error_screen::ErrorScreen;
pub use mcq_block::McqBlock;
pub use paragraph::TextBlockView;
pub use raw_markup::RawMarkup;
pub use toolbar::{ModeToggle, Toolbar};

/// Rows for an auto-growing textarea: one per line of content, at least one
pub fn textarea_rows(content: &str) -> u32 {
    let line_count = content.split('\n').count().max(1);
    line_count as u32
}
