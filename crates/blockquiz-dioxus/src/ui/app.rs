use crate::ui::components::{DocumentContent, ModeToggle, Toolbar};
use crate::ui::services::Services;
use blockquiz_config::Config;
use blockquiz_engine::{Block, Cmd, Document, Observers, io};
use dioxus::prelude::*;
use std::path::Path;

const BLOCKQUIZ_CSS: &str = include_str!("../assets/blockquiz.css");

#[component]
pub fn App(config: Config, initial: Document) -> Element {
    use_context_provider(|| Services::from_config(&config));
    let mut observers = use_context_provider(|| Signal::new(Observers::new()));
    let mut document = use_signal(|| initial.clone());

    let on_command = use_callback({
        let document_path = config.document_path.clone();
        move |cmd: Cmd| {
            let patch = document.write().apply(cmd);
            if patch.is_empty() {
                return;
            }

            // Auto-save the document to disk
            save(&document_path, &document.read());
            observers.write().dispatch(&document.read(), &patch);
        }
    });

    let on_save = use_callback({
        let document_path = config.document_path.clone();
        move |_: ()| save(&document_path, &document.read())
    });

    let doc = document.read();
    let mode = doc.mode();
    let active_kind = doc
        .cursor()
        .and_then(|id| doc.node(id))
        .and_then(|node| match &node.block {
            Block::Text(text) => Some(text.kind),
            _ => None,
        });

    rsx! {
        style { {BLOCKQUIZ_CSS} }
        div {
            class: "app-container",
            ModeToggle { mode, on_command }
            if mode.is_edit() {
                Toolbar {
                    cursor: doc.cursor(),
                    active_kind,
                    on_command,
                    on_save
                }
            }
            DocumentContent {
                nodes: doc.nodes().to_vec(),
                mode,
                on_command
            }
        }
    }
}

fn save(path: &Path, document: &Document) {
    match io::save_document(path, document) {
        Ok(()) => log::debug!("Saved {} (version {})", path.display(), document.version()),
        Err(e) => log::error!("Error auto-saving file {}: {e}", path.display()),
    }
}
