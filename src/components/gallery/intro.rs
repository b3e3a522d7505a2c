//! Gallery page header with the upload call-to-action.

use dioxus::prelude::*;

use crate::context::use_locale;

#[component]
pub fn GalleryIntro(can_share: bool, on_share: EventHandler<()>) -> Element {
    let locale = use_locale();
    let strings = locale().strings();

    rsx! {
        header { class: "gallery-intro",
            div {
                h1 { class: "gallery-intro__title", "{strings.gallery_title}" }
                p { class: "gallery-intro__sub", "{strings.gallery_intro}" }
            }
            if can_share {
                button {
                    class: "primary-btn",
                    onclick: move |_| on_share.call(()),
                    "{strings.gallery_share_file}"
                }
            }
        }
    }
}
