//! Interactive card preview.
//!
//! Renders the scene produced by the layout engine and feeds pointer
//! gestures back into it. Dragging a block moves it, the right-edge
//! handle resizes it, and a plain click opens the per-block color picker.
//! The resize handle and color popover carry `data-card-export-ignore`
//! so the PNG capture leaves them out.

use std::rc::Rc;

use dioxus::prelude::*;
use storyshot_core::{
    Background, BlockId, CardBox, CardForm, CardLayout, PointerPoint, RenderMode,
};

use crate::context::use_locale;
use crate::export::CARD_ELEMENT_ID;

fn pointer_point(evt: &Event<PointerData>) -> PointerPoint {
    let point = evt.client_coordinates();
    PointerPoint {
        x: point.x,
        y: point.y,
    }
}

#[component]
pub fn CardPreview(form: CardForm, mut layout: Signal<CardLayout>) -> Element {
    let locale = use_locale();
    let strings = locale().strings();

    let mounted: Signal<Option<Rc<MountedData>>> = use_signal(|| None);
    let mut card_box = use_signal(|| CardBox {
        width: 0.0,
        height: 0.0,
    });

    // Re-measure the card's rendered box; gesture math divides by it.
    let measure = move || {
        spawn(async move {
            if let Some(el) = mounted() {
                if let Ok(rect) = el.get_client_rect().await {
                    card_box.set(CardBox {
                        width: rect.size.width,
                        height: rect.size.height,
                    });
                }
            }
        });
    };

    let scene = layout.read().render(&form, RenderMode::Interactive);

    let max_width = if scene.aspect.is_landscape() { "520px" } else { "380px" };
    let aspect_css = scene.aspect.css();
    let (background_css, photo, overlay_css) = match &scene.background {
        Background::Gradient(gradient) => (
            gradient.css().to_string(),
            None,
            // Static vignette over gradient presets.
            "radial-gradient(circle at 0% 0%, rgba(248,250,252,0.15), transparent 55%), \
             radial-gradient(circle at 100% 100%, rgba(15,23,42,0.85), rgba(15,23,42,0.95))"
                .to_string(),
        ),
        Background::Image {
            data_url,
            overlay_intensity,
        } => {
            let a = f64::from(*overlay_intensity) / 100.0;
            (
                "#0f172a".to_string(),
                Some(data_url.clone()),
                format!(
                    "linear-gradient(to top, rgba(15,23,42,{:.3}), rgba(15,23,42,{:.3}), rgba(15,23,42,{:.3}))",
                    0.9 * a,
                    0.78 * a,
                    0.94 * a
                ),
            )
        }
    };

    rsx! {
        div {
            id: CARD_ELEMENT_ID,
            class: "story-card",
            style: "background: {background_css}; aspect-ratio: {aspect_css}; max-width: {max_width};",
            onmounted: {
                let mut mounted = mounted;
                move |evt: Event<MountedData>| {
                    mounted.set(Some(evt.data()));
                    measure();
                }
            },

            if let Some(src) = photo {
                img {
                    class: "story-card__photo",
                    src: "{src}",
                    alt: "",
                }
            }

            div {
                class: "story-card__overlay",
                style: "background: {overlay_css};",
            }

            div {
                class: "story-card__surface",
                onpointermove: move |evt| {
                    layout.write().update_pointer(pointer_point(&evt), card_box());
                },
                onpointerup: move |_| {
                    layout.write().end_gesture();
                },
                onpointercancel: move |_| {
                    layout.write().end_gesture();
                },
                // No pointer capture in the webview: a release outside the
                // card would otherwise leave the session active and the
                // block snapping back to the pointer on re-entry.
                onpointerleave: move |_| {
                    layout.write().end_gesture();
                },

                for block in scene.blocks.iter().cloned() {
                    {
                        let id = block.id;
                        let block_key = id.as_str();
                        let geometry_style = match id {
                            BlockId::Mood | BlockId::Date => format!(
                                "left: {}%; top: {}%; max-width: {}%;",
                                block.x, block.y, block.width
                            ),
                            _ => format!(
                                "left: {}%; top: {}%; width: {}%;",
                                block.x, block.y, block.width
                            ),
                        };
                        rsx! {
                            div {
                                key: "{block_key}",
                                class: "card-block",
                                style: "{geometry_style}",

                                // Draggable block content
                                {match id {
                                    BlockId::Mood => rsx! {
                                        div {
                                            class: "card-block__pill",
                                            style: "color: {block.color};",
                                            title: "{strings.drag_hint}",
                                            onpointerdown: move |evt| {
                                                evt.stop_propagation();
                                                measure();
                                                layout.write().begin_drag(id, pointer_point(&evt));
                                            },
                                            if let Some(emoji) = block.emoji.as_deref() {
                                                span { "{emoji}" }
                                            }
                                            span { "{block.text}" }
                                        }
                                    },
                                    BlockId::Date => rsx! {
                                        div {
                                            class: "card-block__pill",
                                            style: "color: {block.color};",
                                            title: "{strings.drag_hint}",
                                            onpointerdown: move |evt| {
                                                evt.stop_propagation();
                                                measure();
                                                layout.write().begin_drag(id, pointer_point(&evt));
                                            },
                                            span { "{block.text}" }
                                        }
                                    },
                                    BlockId::Title => rsx! {
                                        p {
                                            class: "card-block__title",
                                            style: "color: {block.color};",
                                            title: "{strings.drag_hint}",
                                            onpointerdown: move |evt| {
                                                evt.stop_propagation();
                                                measure();
                                                layout.write().begin_drag(id, pointer_point(&evt));
                                            },
                                            "{block.text}"
                                        }
                                    },
                                    BlockId::Main => rsx! {
                                        p {
                                            class: "card-block__main",
                                            style: "color: {block.color};",
                                            title: "{strings.drag_hint}",
                                            onpointerdown: move |evt| {
                                                evt.stop_propagation();
                                                measure();
                                                layout.write().begin_drag(id, pointer_point(&evt));
                                            },
                                            "{block.text}"
                                        }
                                    },
                                    BlockId::Secondary => rsx! {
                                        p {
                                            class: "card-block__secondary",
                                            style: "color: {block.color};",
                                            title: "{strings.drag_hint}",
                                            onpointerdown: move |evt| {
                                                evt.stop_propagation();
                                                measure();
                                                layout.write().begin_drag(id, pointer_point(&evt));
                                            },
                                            "{block.text}"
                                        }
                                    },
                                }}

                                if block.resize_handle {
                                    div {
                                        class: "resize-handle",
                                        "data-card-export-ignore": "true",
                                        title: "{strings.resize_hint}",
                                        onpointerdown: move |evt| {
                                            evt.stop_propagation();
                                            measure();
                                            layout.write().begin_resize(id, pointer_point(&evt));
                                        },
                                        span { "\u{2590}" }
                                    }
                                }

                                if block.color_popover {
                                    div {
                                        class: "color-popover",
                                        "data-card-export-ignore": "true",
                                        onpointerdown: move |evt| evt.stop_propagation(),
                                        span { "{strings.text_color}" }
                                        input {
                                            r#type: "color",
                                            value: "{block.color}",
                                            oninput: move |e| {
                                                layout.write().set_color(id, e.value());
                                            },
                                        }
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
