//! Labeled form field components.

use dioxus::prelude::*;

/// Single-line labeled text input.
#[component]
pub fn Field(
    label: String,
    value: String,
    #[props(default)] placeholder: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        label { class: "field",
            span { class: "field__label", "{label}" }
            input {
                class: "field__input",
                r#type: "text",
                value: "{value}",
                placeholder: "{placeholder}",
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}

/// Multi-line labeled text input.
#[component]
pub fn TextArea(
    label: String,
    value: String,
    #[props(default)] placeholder: String,
    oninput: EventHandler<String>,
) -> Element {
    rsx! {
        label { class: "field",
            span { class: "field__label", "{label}" }
            textarea {
                class: "field__textarea",
                value: "{value}",
                placeholder: "{placeholder}",
                oninput: move |e| oninput.call(e.value()),
            }
        }
    }
}
