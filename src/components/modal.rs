//! Shared modal dialog shell.
//!
//! Overlay click closes; clicks inside the dialog stay inside.

use dioxus::prelude::*;

#[component]
pub fn CommonModal(
    title: String,
    show: bool,
    on_close: EventHandler<()>,
    children: Element,
) -> Element {
    if !show {
        return rsx! {};
    }

    rsx! {
        div {
            class: "modal-overlay",
            onclick: move |_| on_close.call(()),

            div {
                class: "modal",
                onclick: move |e| e.stop_propagation(),

                h2 { class: "modal__title", "{title}" }
                {children}
            }
        }
    }
}
