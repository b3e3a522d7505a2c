//! Text block identity and geometry
//!
//! A card is composed of up to five positionable text blocks. Positions and
//! widths are normalized percentages of the card's own bounding box, so a
//! layout is resolution-independent.

use serde::{Deserialize, Serialize};

/// Lower bound for a block anchor, in percent of the card box.
pub const POSITION_MIN: f64 = 0.0;
/// Upper bound for a block anchor. 95 keeps the origin from starting
/// fully off-card.
pub const POSITION_MAX: f64 = 95.0;
/// Narrowest allowed block, in percent of card width.
pub const WIDTH_MIN: f64 = 20.0;
/// Widest allowed block.
pub const WIDTH_MAX: f64 = 95.0;

/// One of the five positionable text regions on a card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BlockId {
    /// Mood badge (emoji + short label)
    Mood,
    /// Optional headline
    Title,
    /// Main sentence
    Main,
    /// Secondary sentence (omitted from rendering while empty)
    Secondary,
    /// Date chip
    Date,
}

impl BlockId {
    /// All blocks in render order.
    pub const ALL: [BlockId; 5] = [
        BlockId::Mood,
        BlockId::Title,
        BlockId::Main,
        BlockId::Secondary,
        BlockId::Date,
    ];

    pub(crate) fn index(self) -> usize {
        match self {
            BlockId::Mood => 0,
            BlockId::Title => 1,
            BlockId::Main => 2,
            BlockId::Secondary => 3,
            BlockId::Date => 4,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            BlockId::Mood => "mood",
            BlockId::Title => "title",
            BlockId::Main => "main",
            BlockId::Secondary => "secondary",
            BlockId::Date => "date",
        }
    }

    /// Documented default anchor for this block.
    pub fn default_position(self) -> BlockPosition {
        match self {
            BlockId::Mood => BlockPosition { x: 6.0, y: 6.0 },
            BlockId::Title => BlockPosition { x: 10.0, y: 28.0 },
            BlockId::Main => BlockPosition { x: 10.0, y: 40.0 },
            BlockId::Secondary => BlockPosition { x: 10.0, y: 48.0 },
            BlockId::Date => BlockPosition { x: 72.0, y: 85.0 },
        }
    }

    /// Documented default width for this block, in percent of card width.
    pub fn default_width(self) -> f64 {
        match self {
            BlockId::Mood => 50.0,
            BlockId::Title => 85.0,
            BlockId::Main => 85.0,
            BlockId::Secondary => 85.0,
            BlockId::Date => 40.0,
        }
    }

    /// Default text color (CSS color string).
    pub fn default_color(self) -> &'static str {
        match self {
            BlockId::Secondary => "#e5e7eb",
            _ => "#f9fafb",
        }
    }
}

/// A block anchor in percent of the card box.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BlockPosition {
    pub x: f64,
    pub y: f64,
}

/// Geometry and paint state for one block.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BlockGeometry {
    pub position: BlockPosition,
    /// Percent of card width, within [`WIDTH_MIN`]..=[`WIDTH_MAX`].
    pub width: f64,
    /// CSS color for the block text.
    pub color: String,
}

impl BlockGeometry {
    /// Geometry at the documented defaults for `id`.
    pub fn default_for(id: BlockId) -> Self {
        BlockGeometry {
            position: id.default_position(),
            width: id.default_width(),
            color: id.default_color().to_string(),
        }
    }
}

/// Clamp a block anchor coordinate to the allowed range.
pub fn clamp_position(v: f64) -> f64 {
    v.clamp(POSITION_MIN, POSITION_MAX)
}

/// Clamp a block width to the allowed range.
pub fn clamp_width(v: f64) -> f64 {
    v.clamp(WIDTH_MIN, WIDTH_MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_documented_values() {
        assert_eq!(
            BlockId::Mood.default_position(),
            BlockPosition { x: 6.0, y: 6.0 }
        );
        assert_eq!(
            BlockId::Date.default_position(),
            BlockPosition { x: 72.0, y: 85.0 }
        );
        assert_eq!(BlockId::Main.default_width(), 85.0);
        assert_eq!(BlockId::Date.default_width(), 40.0);
    }

    #[test]
    fn test_clamp_position_bounds() {
        assert_eq!(clamp_position(-10.0), POSITION_MIN);
        assert_eq!(clamp_position(50.0), 50.0);
        assert_eq!(clamp_position(120.0), POSITION_MAX);
    }

    #[test]
    fn test_clamp_width_bounds() {
        assert_eq!(clamp_width(0.0), WIDTH_MIN);
        assert_eq!(clamp_width(60.0), 60.0);
        assert_eq!(clamp_width(200.0), WIDTH_MAX);
    }

    #[test]
    fn test_all_contains_each_block_once() {
        for id in BlockId::ALL {
            assert_eq!(
                BlockId::ALL.iter().filter(|b| **b == id).count(),
                1,
                "{} repeated",
                id.as_str()
            );
        }
    }
}
