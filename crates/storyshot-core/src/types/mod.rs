//! Shared types for Storyshot

pub mod block;
pub mod card;
pub mod shared_card;

pub use block::{
    clamp_position, clamp_width, BlockGeometry, BlockId, BlockPosition, POSITION_MAX,
    POSITION_MIN, WIDTH_MAX, WIDTH_MIN,
};
pub use card::{
    BackgroundKind, CardAspect, CardForm, GradientId, MoodId, MoodPlaceholders,
    DEFAULT_OVERLAY_INTENSITY,
};
pub use shared_card::{NewSharedCard, SharedCard, SharedUpload};
