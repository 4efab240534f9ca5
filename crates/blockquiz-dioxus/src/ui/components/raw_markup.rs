use dioxus::prelude::*;

/// Markup the editor does not model, displayed as stored and never edited
#[component]
pub fn RawMarkup(source: String) -> Element {
    rsx! {
        div {
            class: "raw-markup",
            dangerous_inner_html: "{source}"
        }
    }
}
