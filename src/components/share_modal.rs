//! Share-to-gallery modal.
//!
//! Two inputs (title, caption body) that are joined into one caption
//! string on submit; the first line becomes the gallery card's title.

use dioxus::prelude::*;

use crate::components::{CommonModal, Field, TextArea};
use crate::context::use_locale;

#[component]
pub fn ShareCardModal(
    show: bool,
    /// Prefill for the title input (re-applied each time the modal opens).
    initial_title: String,
    /// Prefill for the body input.
    initial_body: String,
    submitting: bool,
    #[props(default)] error: Option<String>,
    on_close: EventHandler<()>,
    /// Called with (title, body) when the user submits.
    on_submit: EventHandler<(String, String)>,
) -> Element {
    let locale = use_locale();
    let strings = locale().strings();

    let mut title = use_signal(|| initial_title.clone());
    let mut body = use_signal(|| initial_body.clone());

    // Re-prefill when the modal is opened again with new content.
    use_effect(use_reactive!(|(show, initial_title, initial_body)| {
        if show {
            title.set(initial_title.clone());
            body.set(initial_body.clone());
        }
    }));

    rsx! {
        CommonModal {
            title: strings.share_title.to_string(),
            show,
            on_close: move |_| on_close.call(()),

            Field {
                label: strings.share_caption_title.to_string(),
                value: title(),
                oninput: move |v| title.set(v),
            }
            TextArea {
                label: strings.share_caption_body.to_string(),
                value: body(),
                oninput: move |v| body.set(v),
            }

            if let Some(err) = error {
                p { class: "status-line status-line--error", "{err}" }
            }

            div { class: "modal__actions",
                button {
                    class: "secondary-btn",
                    onclick: move |_| on_close.call(()),
                    "{strings.cancel}"
                }
                button {
                    class: "primary-btn",
                    disabled: submitting,
                    onclick: move |_| on_submit.call((title(), body())),
                    if submitting {
                        "{strings.share_submitting}"
                    } else {
                        "{strings.share_submit}"
                    }
                }
            }
        }
    }
}
