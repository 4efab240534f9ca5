use blockquiz_engine::blocks::mcq;
use blockquiz_engine::{AiAttrs, Cmd, Mode, NodeId, TextKind};
use dioxus::prelude::*;

/// Switches every block of the document between editing and answering
#[component]
pub fn ModeToggle(mode: Mode, on_command: Callback<Cmd>) -> Element {
    let label = match mode {
        Mode::Edit => "Edit Mode",
        Mode::View => "View Mode",
    };

    rsx! {
        button {
            class: "mode-toggle",
            onclick: move |_| on_command.call(Cmd::SetMode(mode.toggled())),
            "{label}"
        }
    }
}

fn active_class(active: Option<TextKind>, kind: TextKind) -> &'static str {
    if active == Some(kind) { "is-active" } else { "" }
}

/// Edit-mode menu bar. Text-kind and remove buttons act on the block at
/// the cursor; insert buttons place the new block after it.
#[component]
pub fn Toolbar(
    cursor: Option<NodeId>,
    active_kind: Option<TextKind>,
    on_command: Callback<Cmd>,
    on_save: Callback<()>,
) -> Element {
    let set_kind = move |kind: TextKind| {
        if let Some(id) = cursor {
            on_command.call(Cmd::SetTextKind { id, kind });
        }
    };

    rsx! {
        div {
            class: "menu-bar",
            button {
                class: active_class(active_kind, TextKind::Paragraph),
                onclick: move |_| set_kind(TextKind::Paragraph),
                "paragraph"
            }
            for level in 1..=3u8 {
                button {
                    key: "h{level}",
                    class: active_class(active_kind, TextKind::Heading(level)),
                    onclick: move |_| set_kind(TextKind::Heading(level)),
                    "h{level}"
                }
            }
            button {
                onclick: move |_| {
                    let template = mcq::toolbar_template();
                    on_command.call(Cmd::InsertMcq {
                        question_text: template.question_text,
                        answers: template.answers,
                    });
                },
                "add mcq"
            }
            button {
                onclick: move |_| {
                    let defaults = AiAttrs::default();
                    on_command.call(Cmd::InsertAi {
                        question: defaults.question,
                        answer: defaults.answer,
                    });
                },
                "add ai"
            }
            button {
                onclick: move |_| on_command.call(Cmd::InsertParagraph { text: String::new() }),
                "add paragraph"
            }
            button {
                disabled: cursor.is_none(),
                onclick: move |_| {
                    if let Some(id) = cursor {
                        on_command.call(Cmd::RemoveBlock { id });
                    }
                },
                "remove block"
            }
            button {
                onclick: move |_| on_save.call(()),
                "save"
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
    fn Harness(mode: Mode, active_kind: Option<TextKind>) -> Element {
        rsx! {
            ModeToggle { mode, on_command: move |_: Cmd| {} }
            Toolbar {
                cursor: None,
                active_kind,
                on_command: move |_: Cmd| {},
                on_save: move |_: ()| {}
            }
        }
    }

    fn render_toolbar(mode: Mode, active_kind: Option<TextKind>) -> String {
        let mut dom = VirtualDom::new_with_props(Harness, HarnessProps { mode, active_kind });
        dom.rebuild_in_place();
        render(&dom)
    }

    #[test]
    fn test_toolbar_buttons() {
        let html = render_toolbar(Mode::Edit, None);
        for label in ["paragraph", "h1", "h2", "h3", "add mcq", "add ai", "add paragraph", "remove block", "save"] {
            assert!(html.contains(label), "missing {label}");
        }
        assert!(html.contains("Edit Mode"));
    }

    #[test]
    fn test_mode_toggle_label() {
        assert!(render_toolbar(Mode::View, None).contains("View Mode"));
    }

    #[test]
    fn test_active_kind_is_highlighted() {
        assert_eq!(active_class(Some(TextKind::Heading(2)), TextKind::Heading(2)), "is-active");
        assert_eq!(active_class(Some(TextKind::Heading(2)), TextKind::Paragraph), "");
        assert!(render_toolbar(Mode::Edit, Some(TextKind::Heading(1))).contains("is-active"));
    }
}
