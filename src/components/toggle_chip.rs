//! Pill-shaped toggle button used for the preset pickers.

use dioxus::prelude::*;

#[component]
pub fn ToggleChip(label: String, active: bool, onclick: EventHandler<()>) -> Element {
    rsx! {
        button {
            class: if active { "toggle-chip toggle-chip--active" } else { "toggle-chip" },
            onclick: move |_| onclick.call(()),
            "{label}"
        }
    }
}
