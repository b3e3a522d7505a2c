//! One absolutely-positioned virtual row of gallery tiles.
//!
//! The page computes which rows are visible and at what offset; this
//! component just lays its slice of cards out in a grid.

use dioxus::prelude::*;
use storyshot_core::SharedCard;

use super::GalleryCardItem;

#[component]
pub fn GalleryGridRow(
    cards: Vec<SharedCard>,
    columns: usize,
    start: f64,
    height: f64,
    on_card_click: EventHandler<SharedCard>,
) -> Element {
    rsx! {
        div {
            class: "gallery-row",
            style: "transform: translateY({start}px); height: {height}px; grid-template-columns: repeat({columns}, 1fr);",
            for card in cards {
                GalleryCardItem {
                    key: "{card.id}",
                    card,
                    on_click: move |c| on_card_click.call(c),
                }
            }
        }
    }
}
