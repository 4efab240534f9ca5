use crate::ui::components::BlockView;
use blockquiz_engine::{Cmd, Mode, Node};
use dioxus::prelude::*;

#[component]
pub fn DocumentContent(nodes: Vec<Node>, mode: Mode, on_command: Callback<Cmd>) -> Element {
    rsx! {
        div {
            class: "document-content",
            if nodes.is_empty() {
                p { class: "empty-document", "This document is empty." }
            }
            for node in nodes.iter() {
                BlockView {
                    key: "{node.id}",
                    node: node.clone(),
                    mode,
                    on_command
                }
            }
        }
    }
}
