use crate::ui::components::{AiBlock, McqBlock, RawMarkup, TextBlockView};
use blockquiz_engine::{Block, Cmd, Mode, Node};
use dioxus::prelude::*;

/// Dispatch a node to the view for its block type.
///
/// Text blocks follow the document mode; AI and MCQ blocks follow their
/// own `mode` attribute.
#[component]
pub fn BlockView(node: Node, mode: Mode, on_command: Callback<Cmd>) -> Element {
    let id = node.id;
    match node.block {
        Block::Text(block) => rsx! {
            TextBlockView { id, block, mode, on_command }
        },
        Block::Ai(attrs) => rsx! {
            AiBlock { id, attrs, on_command }
        },
        Block::Mcq(attrs) => rsx! {
            McqBlock { id, attrs, on_command }
        },
        Block::Raw(source) => rsx! {
            RawMarkup { source }
        },
    }
}
