//! Full-size view of one shared card, shown inside the common modal.

use dioxus::document;
use dioxus::prelude::*;
use storyshot_core::{caption, SharedCard};

use crate::components::CommonModal;
use crate::context::use_locale;

// Downloads through a transient anchor so the webview handles the
// actual transfer.
const DOWNLOAD_JS: &str = r#"
    const url = await dioxus.recv();
    const a = document.createElement("a");
    a.href = url;
    a.download = "storyshot.png";
    document.body.appendChild(a);
    a.click();
    a.remove();
"#;

#[component]
pub fn GalleryCardDetail(
    card: Option<SharedCard>,
    on_close: EventHandler<()>,
) -> Element {
    let locale = use_locale();
    let strings = locale().strings();

    let Some(card) = card else {
        return rsx! {};
    };

    let parsed = caption::parse(card.caption.as_deref());
    let title = parsed
        .title
        .unwrap_or_else(|| strings.untitled_card.to_string());
    let body = parsed.body;
    let image_url = card.image_url.clone();

    rsx! {
        CommonModal {
            title: title.clone(),
            show: true,
            on_close: move |_| on_close.call(()),

            img {
                class: "gallery-detail__img",
                src: "{card.image_url}",
                alt: "{title}",
            }
            if !body.is_empty() {
                p { class: "gallery-detail__body", "{body}" }
            }

            div { class: "modal__actions",
                button {
                    class: "secondary-btn",
                    onclick: move |_| on_close.call(()),
                    "{strings.close}"
                }
                button {
                    class: "primary-btn",
                    onclick: move |_| {
                        let url = image_url.clone();
                        spawn(async move {
                            let eval = document::eval(DOWNLOAD_JS);
                            let _ = eval.send(url);
                            if let Err(err) = eval.await {
                                tracing::warn!(?err, "gallery image download failed");
                            }
                        });
                    },
                    "{strings.gallery_download}"
                }
            }
        }
    }
}
