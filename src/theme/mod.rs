//! Theme for Storyshot.

mod styles;

pub use styles::GLOBAL_STYLES;
