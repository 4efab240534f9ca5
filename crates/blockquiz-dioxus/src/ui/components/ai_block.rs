use crate::ui::hooks::use_node_observer;
use crate::ui::services::Services;
use blockquiz_engine::editing::AttrUpdate;
use blockquiz_engine::{AiAttrs, Block, Cmd, NodeId};
use blockquiz_services::ask;
use dioxus::prelude::*;

/// AI question block.
///
/// In edit mode every keystroke in the question input is written to the
/// block's attributes. "Get Answer" asks the completion service and
/// persists the question together with the reply; a failed request shows
/// an error but stores nothing.
#[component]
pub fn AiBlock(id: NodeId, attrs: AiAttrs, on_command: Callback<Cmd>) -> Element {
    let services = try_use_context::<Services>();
    let mut response = use_signal(|| attrs.answer.clone());

    use_node_observer(id, move |node| {
        if let Block::Ai(attrs) = &node.block {
            response.set(attrs.answer.clone());
        }
    });

    if !attrs.mode.is_edit() {
        return rsx! {
            div {
                class: "ai",
                div { class: "question", "Question: {attrs.question}" }
                div { class: "answer", "Answer: {attrs.answer}" }
            }
        };
    }

    let asked = attrs.question.clone();
    let get_answer = move |_: Event<MouseData>| {
        let Some(services) = services.clone() else {
            log::warn!("No completion service available");
            return;
        };
        let question = asked.clone();
        let mut response = response;
        spawn(async move {
            let reply = ask(services.completion.as_ref(), &services.system_prompt, &question).await;
            response.set(reply.display_text().to_string());
            if let Some(update) = reply.to_update(&question) {
                on_command.call(Cmd::UpdateAttributes { id, update });
            }
        });
    };

    rsx! {
        div {
            class: "ai",
            div {
                input {
                    r#type: "text",
                    value: "{attrs.question}",
                    placeholder: "Ask a question...",
                    oninput: move |event: Event<FormData>| {
                        on_command.call(question_edit(id, event.value()));
                    }
                }
                button { onclick: get_answer, "Get Answer" }
                div { class: "answer", "{response}" }
            }
        }
    }
}

fn question_edit(id: NodeId, question: String) -> Cmd {
    Cmd::UpdateAttributes {
        id,
        update: AttrUpdate::question(question),
    }
}
