use crate::ui::components::textarea_rows;
use crate::ui::hooks::use_node_observer;
use crate::ui::services::Services;
use blockquiz_engine::editing::AttrUpdate;
use blockquiz_engine::view::{McqQuiz, Reveal, answers};
use blockquiz_engine::{Answer, Block, Cmd, McqAttrs, NodeId};
use blockquiz_services::deliver_submission;
use dioxus::prelude::*;

/// Multiple-choice question block, authoring form or single-choice quiz
/// depending on its mode.
#[component]
pub fn McqBlock(id: NodeId, attrs: McqAttrs, on_command: Callback<Cmd>) -> Element {
    let mut quiz = use_signal(McqQuiz::new);
    let mut answers_seen = use_signal(|| attrs.answers.clone());

    // Selections are by index, so they go stale once the answers change
    use_node_observer(id, move |node| {
        let Block::Mcq(attrs) = &node.block else {
            return;
        };
        let changed = *answers_seen.peek() != attrs.answers;
        if changed {
            answers_seen.set(attrs.answers.clone());
            quiz.set(McqQuiz::new());
        }
    });

    if attrs.mode.is_edit() {
        rsx! {
            McqEditor { id, attrs, on_command }
        }
    } else {
        rsx! {
            McqView { id, attrs, quiz }
        }
    }
}

fn update_answers(id: NodeId, answers: Vec<Answer>) -> Cmd {
    Cmd::UpdateAttributes {
        id,
        update: AttrUpdate::answers(answers),
    }
}

#[component]
fn McqEditor(id: NodeId, attrs: McqAttrs, on_command: Callback<Cmd>) -> Element {
    rsx! {
        div {
            class: "mcq-node",
            div {
                class: "mcq-edit",
                textarea {
                    class: "auto-grow",
                    value: "{attrs.question_text}",
                    placeholder: "Question",
                    rows: textarea_rows(&attrs.question_text),
                    oninput: move |event: Event<FormData>| {
                        on_command.call(Cmd::UpdateAttributes {
                            id,
                            update: AttrUpdate::question_text(event.value()),
                        });
                    }
                }
                for (index, answer) in attrs.answers.iter().enumerate() {
                    div {
                        key: "{index}",
                        class: "mcq-answer-row",
                        textarea {
                            class: "auto-grow",
                            value: "{answer.text}",
                            placeholder: format!("Answer {}", index + 1),
                            rows: textarea_rows(&answer.text),
                            oninput: {
                                let current = attrs.answers.clone();
                                move |event: Event<FormData>| {
                                    let updated = answers::set_answer_text(&current, index, &event.value());
                                    on_command.call(update_answers(id, updated));
                                }
                            }
                        }
                        input {
                            r#type: "checkbox",
                            checked: answer.correct,
                            onchange: {
                                let current = attrs.answers.clone();
                                let correct = !answer.correct;
                                move |_| {
                                    let updated = answers::set_answer_correct(&current, index, correct);
                                    on_command.call(update_answers(id, updated));
                                }
                            }
                        }
                        button {
                            onclick: {
                                let current = attrs.answers.clone();
                                move |_| on_command.call(update_answers(id, answers::remove_answer(&current, index)))
                            },
                            "Remove"
                        }
                    }
                }
                button {
                    onclick: {
                        let current = attrs.answers.clone();
                        move |_| on_command.call(update_answers(id, answers::add_answer(&current)))
                    },
                    "Add Answer"
                }
            }
        }
    }
}

fn reveal_label(reveal: Reveal) -> (&'static str, &'static str) {
    if reveal.correct {
        ("reveal correct", "Correct")
    } else {
        ("reveal incorrect", "Incorrect")
    }
}

#[component]
fn McqView(id: NodeId, attrs: McqAttrs, quiz: Signal<McqQuiz>) -> Element {
    let services = try_use_context::<Services>();
    let mut quiz = quiz;
    let state = quiz.read().clone();
    let radio_name = format!("mcq-{id}");

    let submit = {
        let attrs = attrs.clone();
        move |_: Event<MouseData>| {
            let Some(submission) = quiz.write().submit(&attrs) else {
                return;
            };
            let Some(services) = services.clone() else {
                log::warn!("No submission endpoint available, answer not recorded");
                return;
            };
            spawn(async move {
                deliver_submission(services.answers.as_ref(), &submission).await;
            });
        }
    };

    rsx! {
        div {
            class: "mcq-node",
            div {
                class: "mcq-view",
                p { class: "mcq-question", "{attrs.question_text}" }
                for (index, answer) in attrs.answers.iter().enumerate() {
                    div {
                        key: "{index}",
                        input {
                            r#type: "radio",
                            name: "{radio_name}",
                            value: "{answer.text}",
                            checked: state.is_selected(index),
                            disabled: state.is_submitted(),
                            onchange: {
                                let current = attrs.answers.clone();
                                move |_| {
                                    quiz.write().select(index, &current);
                                }
                            }
                        }
                        label { class: "mcq-label", "{answer.text}" }
                        if let Some(reveal) = state.reveal().filter(|reveal| reveal.index == index) {
                            span {
                                class: reveal_label(reveal).0,
                                {reveal_label(reveal).1}
                            }
                        }
                    }
                }
                if !state.is_submitted() {
                    button { r#type: "button", onclick: submit, "Submit" }
                }
            }
        }
    }
}
