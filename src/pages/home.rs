//! Card composer page.
//!
//! The left column edits a [`CardForm`]; the right column shows the live
//! preview driven by the layout engine, with PNG download and
//! share-to-gallery below it.

use base64::engine::general_purpose::STANDARD as BASE64;
use base64::Engine;
use dioxus::prelude::*;
use storyshot_core::{
    caption, BackgroundKind, CardAspect, CardForm, CardLayout, GradientId, MoodId,
};

use crate::app::Route;
use crate::components::{CardPreview, Field, LocaleSwitcher, ShareCardModal, TextArea, ToggleChip};
use crate::context::{use_backend, use_locale};
use crate::export::{capture_card_png, save_png_dialog};

/// Emoji choices for the mood badge.
const MOOD_EMOJI_OPTIONS: [&str; 25] = [
    "\u{1f60c}",
    "\u{1f60a}",
    "\u{1f62e}\u{200d}\u{1f4a8}",
    "\u{1f525}",
    "\u{1f319}",
    "\u{2600}\u{fe0f}",
    "\u{1f327}\u{fe0f}",
    "\u{1f33f}",
    "\u{2728}",
    "\u{1f4aa}",
    "\u{1f9d8}",
    "\u{1f4da}",
    "\u{2615}",
    "\u{1f3b5}",
    "\u{1f3c3}",
    "\u{1f4bb}",
    "\u{1f3a8}",
    "\u{1f340}",
    "\u{1fae7}",
    "\u{1f30a}",
    "\u{1f338}",
    "\u{1f342}",
    "\u{2744}\u{fe0f}",
    "\u{1f4a4}",
    "\u{1f642}",
];

#[derive(Clone, Copy, PartialEq, Eq)]
enum ShareStatus {
    Idle,
    Submitting,
    Done,
    Failed,
}

/// Load a photo from disk, normalize it to PNG, and return
/// `(file_name, data_url)`.
async fn load_photo() -> Result<Option<(String, String)>, String> {
    let picked = tokio::task::spawn_blocking(|| {
        rfd::FileDialog::new()
            .add_filter("Images", &["png", "jpg", "jpeg", "webp"])
            .pick_file()
    })
    .await
    .map_err(|e| format!("picker failed: {e}"))?;

    let Some(path) = picked else {
        return Ok(None);
    };
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "photo".to_string());

    let bytes = tokio::fs::read(&path).await.map_err(|e| e.to_string())?;
    // Webview backgrounds want a format every engine renders; re-encode
    // whatever was picked as PNG.
    let decoded = image::load_from_memory(&bytes).map_err(|e| e.to_string())?;
    let mut png = std::io::Cursor::new(Vec::new());
    decoded
        .write_to(&mut png, image::ImageFormat::Png)
        .map_err(|e| e.to_string())?;

    let data_url = format!("data:image/png;base64,{}", BASE64.encode(png.get_ref()));
    Ok(Some((name, data_url)))
}

#[component]
pub fn Home() -> Element {
    let locale = use_locale();
    let backend = use_backend();
    let strings = locale().strings();

    let mut form = use_signal(|| {
        let l = locale.peek();
        let s = l.strings();
        CardForm::new(s.placeholder_main, s.placeholder_date, l.mood_placeholders())
    });
    let layout = use_signal(CardLayout::new);

    // Placeholder strings follow the active locale; typed content stays.
    use_effect(move || {
        let l = locale();
        let s = l.strings();
        let mut f = form.write();
        f.placeholder_main = s.placeholder_main.to_string();
        f.placeholder_date = s.placeholder_date.to_string();
        f.mood_placeholders = l.mood_placeholders();
    });

    let mut pick_failed = use_signal(|| false);
    let mut export_failed = use_signal(|| false);
    let mut share_open = use_signal(|| false);
    let mut share_status = use_signal(|| ShareStatus::Idle);

    let pick_photo = move |_| {
        spawn(async move {
            match load_photo().await {
                Ok(Some((name, data_url))) => {
                    let mut f = form.write();
                    f.image_data_url = Some(data_url);
                    f.image_file_name = Some(name);
                    f.background = BackgroundKind::Image;
                    pick_failed.set(false);
                }
                Ok(None) => {}
                Err(err) => {
                    tracing::warn!(%err, "photo load failed");
                    pick_failed.set(true);
                }
            }
        });
    };

    let download = move |_| {
        spawn(async move {
            export_failed.set(false);
            let saved = async {
                let bytes = capture_card_png().await?;
                save_png_dialog(bytes).await
            }
            .await;
            match saved {
                Ok(true) => tracing::info!("card downloaded"),
                Ok(false) => {}
                Err(err) => {
                    tracing::warn!(%err, "card export failed");
                    export_failed.set(true);
                }
            }
        });
    };

    let share_submit = move |(title, body): (String, String)| {
        let Some(client) = backend.peek().clone() else {
            return;
        };
        share_status.set(ShareStatus::Submitting);
        let locale_tag = locale.peek().tag().to_string();
        spawn(async move {
            let result = async {
                let bytes = capture_card_png().await?;
                client
                    .share_card(bytes, caption::compose(&title, &body), &locale_tag)
                    .await
            }
            .await;
            match result {
                Ok(upload) => {
                    tracing::info!(id = %upload.id, "card shared from composer");
                    share_status.set(ShareStatus::Done);
                    share_open.set(false);
                }
                Err(err) => {
                    tracing::warn!(%err, "share from composer failed");
                    share_status.set(ShareStatus::Failed);
                }
            }
        });
    };

    // Prefill for the share modal: typed content, not placeholders.
    let (share_title, share_body) = {
        let f = form.read();
        let mut body = f.text_main.trim().to_string();
        let secondary = f.text_secondary.trim();
        if !secondary.is_empty() {
            if !body.is_empty() {
                body.push('\n');
            }
            body.push_str(secondary);
        }
        (f.title.clone(), body)
    };

    let f = form.read();
    let mood_labels = locale().mood_placeholders();

    rsx! {
        div {
            header { class: "app-header",
                div {
                    h1 { class: "app-header__title", "{strings.app_title}" }
                    p { class: "app-header__tagline", "{strings.app_tagline}" }
                }
                nav { class: "app-header__nav",
                    Link { class: "nav-link", to: Route::Gallery {}, "{strings.gallery_link}" }
                    LocaleSwitcher {}
                }
            }

            main { class: "composer",
                section { class: "composer__form",
                    Field {
                        label: strings.field_title.to_string(),
                        value: f.title.clone(),
                        oninput: move |v| form.write().title = v,
                    }
                    TextArea {
                        label: strings.field_main.to_string(),
                        value: f.text_main.clone(),
                        placeholder: strings.placeholder_main.to_string(),
                        oninput: move |v| form.write().text_main = v,
                    }
                    Field {
                        label: strings.field_secondary.to_string(),
                        value: f.text_secondary.clone(),
                        oninput: move |v| form.write().text_secondary = v,
                    }
                    Field {
                        label: strings.field_date.to_string(),
                        value: f.date.clone(),
                        placeholder: strings.placeholder_date.to_string(),
                        oninput: move |v| form.write().date = v,
                    }

                    div { class: "field",
                        span { class: "section-label", "{strings.section_mood}" }
                        div { class: "chip-row",
                            for (i, mood) in MoodId::ALL.into_iter().enumerate() {
                                ToggleChip {
                                    key: "{i}",
                                    label: mood_labels.for_mood(mood).to_string(),
                                    active: f.mood == mood,
                                    onclick: move |_| form.write().mood = mood,
                                }
                            }
                        }
                        Field {
                            label: strings.field_mood_text.to_string(),
                            value: f.mood_text.clone(),
                            placeholder: mood_labels.for_mood(f.mood).to_string(),
                            oninput: move |v| form.write().mood_text = v,
                        }
                        span { class: "section-label", "{strings.field_mood_emoji}" }
                        div { class: "emoji-grid",
                            for emoji in MOOD_EMOJI_OPTIONS {
                                button {
                                    key: "{emoji}",
                                    class: if f.mood_emoji == emoji { "emoji-grid__item emoji-grid__item--active" } else { "emoji-grid__item" },
                                    onclick: move |_| {
                                        let mut fw = form.write();
                                        // Clicking the active emoji reverts to the mood preset.
                                        if fw.mood_emoji == emoji {
                                            fw.mood_emoji.clear();
                                        } else {
                                            fw.mood_emoji = emoji.to_string();
                                        }
                                    },
                                    "{emoji}"
                                }
                            }
                        }
                    }

                    div { class: "field",
                        span { class: "section-label", "{strings.section_background}" }
                        div { class: "chip-row",
                            ToggleChip {
                                label: strings.background_gradient.to_string(),
                                active: f.background == BackgroundKind::Gradient,
                                onclick: move |_| form.write().background = BackgroundKind::Gradient,
                            }
                            ToggleChip {
                                label: strings.background_image.to_string(),
                                active: f.background == BackgroundKind::Image,
                                onclick: move |_| form.write().background = BackgroundKind::Image,
                            }
                        }
                        if f.background == BackgroundKind::Gradient {
                            div { class: "chip-row",
                                for (i, gradient) in GradientId::ALL.into_iter().enumerate() {
                                    ToggleChip {
                                        key: "{i}",
                                        label: match gradient {
                                            GradientId::Sunset => strings.gradient_sunset,
                                            GradientId::Ocean => strings.gradient_ocean,
                                            GradientId::Mono => strings.gradient_mono,
                                        }.to_string(),
                                        active: f.gradient == gradient,
                                        onclick: move |_| form.write().gradient = gradient,
                                    }
                                }
                            }
                        } else {
                            div { class: "chip-row",
                                button {
                                    class: "secondary-btn",
                                    onclick: pick_photo,
                                    "{strings.pick_image}"
                                }
                                if let Some(name) = f.image_file_name.as_deref() {
                                    span { class: "status-line", "{name}" }
                                }
                            }
                            if pick_failed() {
                                p { class: "status-line status-line--error", "{strings.pick_image_error}" }
                            }
                            if f.shows_image() {
                                label { class: "section-label",
                                    "{strings.overlay_intensity}: {f.overlay_intensity}"
                                }
                                input {
                                    class: "overlay-slider",
                                    r#type: "range",
                                    min: "0",
                                    max: "100",
                                    value: "{f.overlay_intensity}",
                                    oninput: move |e| {
                                        if let Ok(v) = e.value().parse::<u8>() {
                                            form.write().overlay_intensity = v.min(100);
                                        }
                                    },
                                }
                            }
                        }
                    }

                    div { class: "field",
                        span { class: "section-label", "{strings.section_aspect}" }
                        div { class: "chip-row",
                            for (i, aspect) in CardAspect::ALL.into_iter().enumerate() {
                                ToggleChip {
                                    key: "{i}",
                                    label: aspect.label().to_string(),
                                    active: f.aspect == aspect,
                                    onclick: move |_| form.write().aspect = aspect,
                                }
                            }
                        }
                    }
                }

                section { class: "composer__preview",
                    CardPreview { form: f.clone(), layout }
                    p { class: "preview-hint", "{strings.drag_hint}" }

                    div { class: "composer__actions",
                        button {
                            class: "primary-btn",
                            onclick: download,
                            "{strings.download_png}"
                        }
                        if backend.read().is_some() {
                            button {
                                class: "secondary-btn",
                                onclick: move |_| {
                                    share_status.set(ShareStatus::Idle);
                                    share_open.set(true);
                                },
                                "{strings.share_to_gallery}"
                            }
                        }
                    }
                    if export_failed() {
                        p { class: "status-line status-line--error", "{strings.export_failed}" }
                    }
                    if share_status() == ShareStatus::Done {
                        p { class: "status-line status-line--ok", "{strings.share_done}" }
                    }
                }
            }

            ShareCardModal {
                show: share_open(),
                initial_title: share_title,
                initial_body: share_body,
                submitting: share_status() == ShareStatus::Submitting,
                error: (share_status() == ShareStatus::Failed)
                    .then(|| strings.share_failed.to_string()),
                on_close: move |_| share_open.set(false),
                on_submit: share_submit,
            }
        }
    }
}
