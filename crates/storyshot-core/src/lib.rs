//! Storyshot Core Library
//!
//! Logic crate for the Storyshot desktop app: compose a short
//! text-and-image story card, preview it live, export it as a PNG, and
//! share it to a public gallery.
//!
//! ## Overview
//!
//! Two components carry the interesting state:
//!
//! - [`layout`] — the interactive card layout engine. Up to five text
//!   blocks sit at normalized (percent-of-card) positions; drag moves
//!   them, a handle resizes their width, a click selects a block for
//!   color editing. One render model feeds both the live preview and the
//!   PNG export (which drops the editing-only affordances).
//! - [`feed`] — the gallery feed: cursor-paginated, append-only list of
//!   approved shared cards, fetched page by page as a trailing sentinel
//!   scrolls into view. [`virtualizer`] windows the grid rows.
//!
//! The hosted backend is consumed through [`backend::GalleryClient`]
//! (list / upload / insert); everything else in this crate is pure state.
//!
//! ## Quick Start
//!
//! ```
//! use storyshot_core::layout::{CardBox, CardLayout, PointerPoint, RenderMode};
//! use storyshot_core::types::{BlockId, CardForm, MoodPlaceholders};
//!
//! let mut layout = CardLayout::new();
//! layout.begin_drag(BlockId::Main, PointerPoint { x: 10.0, y: 10.0 });
//! layout.update_pointer(
//!     PointerPoint { x: 60.0, y: 40.0 },
//!     CardBox { width: 360.0, height: 640.0 },
//! );
//! layout.end_gesture();
//!
//! let form = CardForm::new(
//!     "One line about today.",
//!     "Today",
//!     MoodPlaceholders {
//!         calm: "Easy day".into(),
//!         happy: "Good day".into(),
//!         tired: "A little tired".into(),
//!         focused: "In focus".into(),
//!     },
//! );
//! let scene = layout.render(&form, RenderMode::Export);
//! assert!(scene.blocks.iter().all(|b| !b.resize_handle));
//! ```

pub mod backend;
pub mod caption;
pub mod error;
pub mod feed;
pub mod layout;
pub mod types;
pub mod virtualizer;

// Re-exports
pub use backend::{BackendConfig, GalleryClient};
pub use caption::Caption;
pub use error::StoryError;
pub use feed::{CardStore, FeedAction, FeedError, GalleryFeed, PAGE_SIZE};
pub use layout::{
    Background, BlockScene, CardBox, CardLayout, CardScene, DragMode, GestureOutcome,
    PointerPoint, RenderMode, DRAG_THRESHOLD_PX,
};
pub use types::*;
pub use virtualizer::{column_count, row_count, RowVirtualizer, Viewport, VirtualRow, SENTINEL_HEIGHT};
