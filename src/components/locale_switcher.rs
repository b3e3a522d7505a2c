//! Locale toggle button (ko <-> en).

use dioxus::prelude::*;

use crate::context::use_locale;

#[component]
pub fn LocaleSwitcher() -> Element {
    let mut locale = use_locale();

    rsx! {
        button {
            class: "locale-switcher",
            onclick: move |_| {
                let next = locale().toggle();
                locale.set(next);
            },
            "{locale().toggle().tag().to_uppercase()}"
        }
    }
}
