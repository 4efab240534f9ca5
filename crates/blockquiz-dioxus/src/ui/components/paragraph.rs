use crate::ui::components::textarea_rows;
use blockquiz_engine::{Cmd, Mode, NodeId, TextBlock, TextKind};
use dioxus::prelude::*;

/// Paragraph or heading. Every keystroke is sent as `Cmd::SetText`, so the
/// autoformat shortcuts fire as soon as the text matches.
#[component]
pub fn TextBlockView(id: NodeId, block: TextBlock, mode: Mode, on_command: Callback<Cmd>) -> Element {
    if !mode.is_edit() {
        return match block.kind {
            TextKind::Paragraph => rsx! { p { class: "paragraph", "{block.text}" } },
            TextKind::Heading(1) => rsx! { h1 { class: "heading", "{block.text}" } },
            TextKind::Heading(2) => rsx! { h2 { class: "heading", "{block.text}" } },
            TextKind::Heading(3) => rsx! { h3 { class: "heading", "{block.text}" } },
            TextKind::Heading(4) => rsx! { h4 { class: "heading", "{block.text}" } },
            TextKind::Heading(5) => rsx! { h5 { class: "heading", "{block.text}" } },
            TextKind::Heading(_) => rsx! { h6 { class: "heading", "{block.text}" } },
        };
    }

    let class_name = match block.kind {
        TextKind::Paragraph => "text-block paragraph".to_string(),
        TextKind::Heading(level) => format!("text-block heading level-{level}"),
    };

    rsx! {
        textarea {
            class: "{class_name}",
            value: "{block.text}",
            spellcheck: false,
            rows: textarea_rows(&block.text),
            onfocus: move |_| on_command.call(Cmd::Focus { id }),
            oninput: move |event: Event<FormData>| {
                on_command.call(Cmd::SetText { id, text: event.value() });
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dioxus::dioxus_core::VirtualDom;
    use dioxus_ssr::render;

    #[component]
    fn Harness(block: TextBlock, mode: Mode) -> Element {
        rsx! {
            TextBlockView {
                id: NodeId::new(),
                block,
                mode,
                on_command: move |_: Cmd| {}
            }
        }
    }

    fn render_text(kind: TextKind, text: &str, mode: Mode) -> String {
        let block = TextBlock {
            kind,
            text: text.to_string(),
        };
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { block, mode });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_edit_mode_renders_growing_textarea() {
        let html = render_text(TextKind::Paragraph, "one\ntwo", Mode::Edit);
        assert!(html.contains("<textarea"));
        assert!(html.contains("rows=\"2\""));
        assert!(html.contains("text-block paragraph"));
    }

    #[test]
    fn test_view_mode_renders_heading_tag() {
        let html = render_text(TextKind::Heading(2), "Hi there,", Mode::View);
        assert!(html.contains("<h2"));
        assert!(html.contains("Hi there,"));
        assert!(!html.contains("<textarea"));
    }
}
