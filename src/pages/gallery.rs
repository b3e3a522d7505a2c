//! Shared gallery page.
//!
//! Drives the feed state machine: every operation on [`GalleryFeed`]
//! returns an action, the page performs the fetch in a spawned task and
//! feeds the result back through `apply_page`. Rows are windowed; only
//! the rows near the viewport mount, and a trailing sentinel strip
//! triggers the next page as it scrolls into range.

use std::path::Path;

use dioxus::document;
use dioxus::prelude::*;
use storyshot_core::{
    caption, column_count, row_count, FeedAction, FeedError, GalleryFeed, NewSharedCard,
    RowVirtualizer, SharedCard, StoryError, Viewport, SENTINEL_HEIGHT,
};

use crate::app::Route;
use crate::components::gallery::{GalleryCardDetail, GalleryGridRow, GalleryIntro};
use crate::components::{LocaleSwitcher, ShareCardModal};
use crate::context::{use_backend, use_locale};

const SCROLLER_ID: &str = "gallery-scroll";
const LIST_ID: &str = "gallery-list";

// Scroll measurements are read in one round trip:
// [scrollTop, clientHeight, clientWidth, list offset from scroll origin].
const MEASURE_JS: &str = r#"
    const scroller = document.getElementById("gallery-scroll");
    const list = document.getElementById("gallery-list");
    if (!scroller || !list) return null;
    return [
        scroller.scrollTop,
        scroller.clientHeight,
        scroller.clientWidth,
        list.offsetTop - scroller.offsetTop,
    ];
"#;

async fn measure_scroller() -> Option<[f64; 4]> {
    let value = document::eval(MEASURE_JS).await.ok()?;
    let parts = value.as_array()?.clone();
    if parts.len() != 4 {
        return None;
    }
    let mut out = [0.0; 4];
    for (slot, part) in out.iter_mut().zip(parts) {
        *slot = part.as_f64()?;
    }
    Some(out)
}

fn content_type_for(path: &Path) -> &'static str {
    let ext = path
        .extension()
        .and_then(|e| e.to_str())
        .map(|e| e.to_ascii_lowercase());
    match ext.as_deref() {
        Some("jpg") | Some("jpeg") => "image/jpeg",
        Some("webp") => "image/webp",
        _ => "image/png",
    }
}

#[component]
pub fn Gallery() -> Element {
    let locale = use_locale();
    let backend = use_backend();
    let strings = locale().strings();

    let mut feed = use_signal(GalleryFeed::default);
    let mut viewport = use_signal(|| Viewport {
        scroll_top: 0.0,
        height: 900.0,
    });
    let mut columns = use_signal(|| 3usize);
    let mut scroll_margin = use_signal(|| 0.0f64);
    let mut sentinel_was_visible = use_signal(|| false);
    let mut detail: Signal<Option<SharedCard>> = use_signal(|| None);

    // Share-an-existing-image flow: file picked first, caption second.
    let mut pending_upload: Signal<Option<(Vec<u8>, &'static str)>> = use_signal(|| None);
    let mut share_submitting = use_signal(|| false);
    let mut share_error: Signal<Option<String>> = use_signal(|| None);

    // Fetch the requested page, then keep fetching while the loaded rows
    // still leave the sentinel in (extended) view. Without this fill loop
    // a viewport taller than the content never scrolls, so no scroll
    // event would ever request the next page.
    let drive = move |action: FeedAction| {
        let FeedAction::Fetch { page } = action else {
            return;
        };
        match backend.peek().clone() {
            Some(client) => {
                spawn(async move {
                    let mut page = page;
                    loop {
                        let page_size = feed.peek().page_size();
                        let result = client.list_approved(page, page_size).await;
                        feed.write().apply_page(page, result);

                        let Some([scroll_top, height, width, margin]) =
                            measure_scroller().await
                        else {
                            break;
                        };
                        viewport.set(Viewport { scroll_top, height });
                        columns.set(column_count(width));
                        scroll_margin.set(margin);

                        let rows = row_count(feed.peek().items().len(), *columns.peek());
                        let virtualizer = RowVirtualizer {
                            scroll_margin: margin,
                            ..RowVirtualizer::default()
                        };
                        let visible =
                            virtualizer.sentinel_visible(rows, Viewport { scroll_top, height });
                        sentinel_was_visible.set(visible);
                        if !visible {
                            break;
                        }
                        match feed.write().notify_sentinel_visible() {
                            FeedAction::Fetch { page: next } => page = next,
                            FeedAction::None => break,
                        }
                    }
                });
            }
            None => feed.write().apply_page(page, Err(StoryError::Disabled)),
        }
    };

    use_hook(move || {
        let action = feed.write().load_initial();
        drive(action);
    });

    // Shared by onmounted and onscroll: refresh measurements, then
    // edge-detect the sentinel coming into view.
    let remeasure = move || {
        spawn(async move {
            let Some([scroll_top, height, width, margin]) = measure_scroller().await else {
                return;
            };
            viewport.set(Viewport { scroll_top, height });
            columns.set(column_count(width));
            scroll_margin.set(margin);

            let rows = row_count(feed.peek().items().len(), *columns.peek());
            let virtualizer = RowVirtualizer {
                scroll_margin: margin,
                ..RowVirtualizer::default()
            };
            let visible = virtualizer.sentinel_visible(rows, Viewport { scroll_top, height });
            if visible && !*sentinel_was_visible.peek() {
                let action = feed.write().notify_sentinel_visible();
                drive(action);
            }
            sentinel_was_visible.set(visible);
        });
    };

    let pick_upload = move |_| {
        spawn(async move {
            let picked = tokio::task::spawn_blocking(|| {
                rfd::FileDialog::new()
                    .add_filter("Images", &["png", "jpg", "jpeg", "webp"])
                    .pick_file()
            })
            .await
            .ok()
            .flatten();
            let Some(path) = picked else {
                return;
            };
            match tokio::fs::read(&path).await {
                Ok(bytes) => {
                    share_error.set(None);
                    pending_upload.set(Some((bytes, content_type_for(&path))));
                }
                Err(err) => {
                    tracing::warn!(%err, "could not read picked image");
                }
            }
        });
    };

    let share_submit = move |(title, body): (String, String)| {
        let Some(client) = backend.peek().clone() else {
            return;
        };
        let Some((bytes, content_type)) = pending_upload.peek().clone() else {
            return;
        };
        share_submitting.set(true);
        share_error.set(None);
        let locale_tag = locale.peek().tag().to_string();
        let failed_msg = locale.peek().strings().share_failed.to_string();
        spawn(async move {
            let result = async {
                let image_url = client.upload_image(bytes, content_type).await?;
                let row = NewSharedCard::approved(
                    image_url,
                    caption::compose(&title, &body),
                    locale_tag,
                );
                client.insert_card(&row).await
            }
            .await;
            share_submitting.set(false);
            match result {
                Ok(id) => {
                    tracing::info!(%id, "card shared from gallery");
                    pending_upload.set(None);
                    let action = feed.write().on_item_submitted();
                    drive(action);
                }
                Err(err) => {
                    tracing::warn!(%err, "share from gallery failed");
                    share_error.set(Some(failed_msg));
                }
            }
        });
    };

    let snapshot = feed.read();
    let items = snapshot.items().to_vec();
    let cols = columns();
    let rows = row_count(items.len(), cols);
    let virtualizer = RowVirtualizer {
        scroll_margin: scroll_margin(),
        ..RowVirtualizer::default()
    };
    let total_height = virtualizer.total_size(rows);
    let window = virtualizer.window(rows, viewport());

    let error = snapshot.error();
    let fetching = snapshot.is_fetching();
    let exhausted = snapshot.exhausted();
    let empty = items.is_empty();
    drop(snapshot);

    rsx! {
        div {
            id: SCROLLER_ID,
            class: "gallery-scroll",
            onmounted: move |_| remeasure(),
            onscroll: move |_| remeasure(),

            header { class: "app-header",
                div {
                    h1 { class: "app-header__title", "{strings.app_title}" }
                }
                nav { class: "app-header__nav",
                    Link { class: "nav-link", to: Route::Home {}, "{strings.composer_link}" }
                    LocaleSwitcher {}
                }
            }

            GalleryIntro {
                can_share: backend.read().is_some(),
                on_share: move |_| pick_upload(()),
            }

            if let Some(err) = error {
                div { class: "gallery-status",
                    p { class: "status-line status-line--error", "{strings.gallery_error}" }
                    if err == FeedError::Setup {
                        p { class: "gallery-status__hint", "{strings.gallery_error_setup_hint}" }
                    }
                }
            } else if empty && exhausted {
                div { class: "gallery-status",
                    p { class: "status-line", "{strings.gallery_empty}" }
                }
            } else {
                div {
                    id: LIST_ID,
                    class: "gallery-list",
                    style: "height: {total_height}px;",
                    for row in window {
                        {
                            let start = cols * row.index;
                            let end = (start + cols).min(items.len());
                            rsx! {
                                GalleryGridRow {
                                    key: "{row.index}",
                                    cards: items[start..end].to_vec(),
                                    columns: cols,
                                    start: row.start,
                                    height: row.size,
                                    on_card_click: move |card| detail.set(Some(card)),
                                }
                            }
                        }
                    }
                }
                div {
                    class: "gallery-sentinel",
                    style: "height: {SENTINEL_HEIGHT}px;",
                    if fetching {
                        p { class: "status-line", "{strings.gallery_loading}" }
                    } else if exhausted && !empty {
                        p { class: "status-line", "{strings.gallery_end}" }
                    }
                }
            }

            GalleryCardDetail {
                card: detail(),
                on_close: move |_| detail.set(None),
            }

            ShareCardModal {
                show: pending_upload.read().is_some(),
                initial_title: String::new(),
                initial_body: String::new(),
                submitting: share_submitting(),
                error: share_error(),
                on_close: move |_| pending_upload.set(None),
                on_submit: share_submit,
            }
        }
    }
}
