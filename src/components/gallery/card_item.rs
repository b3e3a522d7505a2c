//! Single gallery tile: the shared image plus its caption split into
//! title and body lines.

use dioxus::prelude::*;
use storyshot_core::{caption, SharedCard};

use crate::context::use_locale;

#[component]
pub fn GalleryCardItem(card: SharedCard, on_click: EventHandler<SharedCard>) -> Element {
    let locale = use_locale();
    let strings = locale().strings();

    let parsed = caption::parse(card.caption.as_deref());
    let title = parsed
        .title
        .unwrap_or_else(|| strings.untitled_card.to_string());
    let body = parsed.body;

    rsx! {
        button {
            class: "gallery-card",
            onclick: {
                let card = card.clone();
                move |_| on_click.call(card.clone())
            },
            img {
                class: "gallery-card__img",
                src: "{card.image_url}",
                alt: "{title}",
                loading: "lazy",
            }
            div { class: "gallery-card__caption",
                p { class: "gallery-card__title", "{title}" }
                if !body.is_empty() {
                    p { class: "gallery-card__body", "{body}" }
                }
            }
        }
    }
}
