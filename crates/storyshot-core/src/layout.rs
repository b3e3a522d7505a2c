//! Interactive card layout engine
//!
//! Owns the normalized position and width of each text block on one card,
//! turns pointer gestures into layout edits, and produces the render scene
//! consumed by both the live preview and the PNG export.
//!
//! Gesture rules:
//! - A pointer-down starts a session in Move or Resize mode; at most one
//!   session exists at a time.
//! - Move deltas only start writing positions once total pointer travel
//!   exceeds [`DRAG_THRESHOLD_PX`]; below that, releasing the pointer is a
//!   click and toggles the block's color-edit selection.
//! - Resize uses the horizontal delta only and never touches position.
//! - All out-of-range input is clamped, never rejected.

use crate::types::block::{
    clamp_position, clamp_width, BlockGeometry, BlockId, BlockPosition,
};
use crate::types::card::CardForm;

/// Pointer travel (device px, Euclidean) below which a gesture is a click.
pub const DRAG_THRESHOLD_PX: f64 = 6.0;

/// Pointer coordinates in device pixels.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PointerPoint {
    pub x: f64,
    pub y: f64,
}

/// Rendered size of the card, in device pixels. Supplied by the rendering
/// adapter; the engine never measures the environment itself.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CardBox {
    pub width: f64,
    pub height: f64,
}

/// What a gesture is editing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DragMode {
    Move,
    Resize,
}

/// Which consumer the scene is for. Export excludes editing-only
/// affordances (resize handles, color popover).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RenderMode {
    Interactive,
    Export,
}

/// What `end_gesture` decided.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GestureOutcome {
    /// No session was active.
    None,
    /// The gesture stayed a click; selection is now this value.
    Selected(Option<BlockId>),
    /// The gesture moved or resized this block and the edit is committed.
    Committed(BlockId),
}

#[derive(Debug, Clone)]
struct DragSession {
    target: BlockId,
    mode: DragMode,
    start_pointer: PointerPoint,
    start_position: BlockPosition,
    start_width: f64,
    has_moved: bool,
}

/// Layout state for one card being authored.
#[derive(Debug, Clone)]
pub struct CardLayout {
    blocks: [BlockGeometry; 5],
    selected: Option<BlockId>,
    drag: Option<DragSession>,
}

impl Default for CardLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl CardLayout {
    /// Every block at its documented default geometry, nothing selected.
    pub fn new() -> Self {
        CardLayout {
            blocks: BlockId::ALL.map(BlockGeometry::default_for),
            selected: None,
            drag: None,
        }
    }

    pub fn geometry(&self, id: BlockId) -> &BlockGeometry {
        &self.blocks[id.index()]
    }

    pub fn position(&self, id: BlockId) -> BlockPosition {
        self.blocks[id.index()].position
    }

    pub fn width(&self, id: BlockId) -> f64 {
        self.blocks[id.index()].width
    }

    pub fn color(&self, id: BlockId) -> &str {
        &self.blocks[id.index()].color
    }

    /// Block currently selected for color editing, if any.
    pub fn selected(&self) -> Option<BlockId> {
        self.selected
    }

    /// Block a gesture is currently targeting, if any.
    pub fn drag_target(&self) -> Option<BlockId> {
        self.drag.as_ref().map(|d| d.target)
    }

    /// Explicit position write (clamped). Used when restoring saved state.
    pub fn set_position(&mut self, id: BlockId, position: BlockPosition) {
        self.blocks[id.index()].position = BlockPosition {
            x: clamp_position(position.x),
            y: clamp_position(position.y),
        };
    }

    /// Explicit width write (clamped).
    pub fn set_width(&mut self, id: BlockId, width: f64) {
        self.blocks[id.index()].width = clamp_width(width);
    }

    /// Color-picker write for one block.
    pub fn set_color(&mut self, id: BlockId, color: impl Into<String>) {
        self.blocks[id.index()].color = color.into();
    }

    /// Start a Move session on `id`. No layout write happens yet.
    /// Ignored if a session is already active (pointer capture makes this
    /// unreachable in the UI, but the engine stays safe on its own).
    pub fn begin_drag(&mut self, id: BlockId, pointer: PointerPoint) {
        if self.drag.is_some() {
            return;
        }
        self.drag = Some(DragSession {
            target: id,
            mode: DragMode::Move,
            start_pointer: pointer,
            start_position: self.position(id),
            start_width: self.width(id),
            has_moved: false,
        });
    }

    /// Start a Resize session on `id`. The resize handle consumes the
    /// pointer event, so this never races a `begin_drag` for one gesture.
    pub fn begin_resize(&mut self, id: BlockId, pointer: PointerPoint) {
        if self.drag.is_some() {
            return;
        }
        self.drag = Some(DragSession {
            target: id,
            mode: DragMode::Resize,
            start_pointer: pointer,
            start_position: self.position(id),
            start_width: self.width(id),
            has_moved: false,
        });
    }

    /// Feed a pointer-move into the active session, if any.
    ///
    /// `card` is the card's current rendered bounding box; deltas convert
    /// to percent of that box. Only the anchor is clamped; content may
    /// overflow the card on purpose.
    pub fn update_pointer(&mut self, pointer: PointerPoint, card: CardBox) {
        let Some(session) = self.drag.as_mut() else {
            return;
        };
        if card.width <= 0.0 || card.height <= 0.0 {
            return;
        }
        let dx = pointer.x - session.start_pointer.x;
        let dy = pointer.y - session.start_pointer.y;
        match session.mode {
            DragMode::Move => {
                if !session.has_moved && dx.hypot(dy) > DRAG_THRESHOLD_PX {
                    session.has_moved = true;
                }
                if session.has_moved {
                    let x = clamp_position(session.start_position.x + dx / card.width * 100.0);
                    let y = clamp_position(session.start_position.y + dy / card.height * 100.0);
                    let target = session.target;
                    self.blocks[target.index()].position = BlockPosition { x, y };
                }
            }
            DragMode::Resize => {
                session.has_moved = true;
                let width = clamp_width(session.start_width + dx / card.width * 100.0);
                let target = session.target;
                self.blocks[target.index()].width = width;
            }
        }
    }

    /// Finish the active gesture (pointer-up or cancel).
    ///
    /// A Move session that never crossed the travel threshold is a click:
    /// it toggles the target's color-edit selection (selecting a block
    /// deselects any other; clicking the selected block deselects it).
    /// A session that moved commits the edit and leaves selection alone.
    pub fn end_gesture(&mut self) -> GestureOutcome {
        let Some(session) = self.drag.take() else {
            return GestureOutcome::None;
        };
        match session.mode {
            DragMode::Move if !session.has_moved => {
                self.selected = if self.selected == Some(session.target) {
                    None
                } else {
                    Some(session.target)
                };
                GestureOutcome::Selected(self.selected)
            }
            _ => GestureOutcome::Committed(session.target),
        }
    }

    /// Build the render scene for the given consumer.
    ///
    /// Blocks with nothing to say (empty title, empty secondary line) are
    /// omitted entirely; their stored geometry stays put so re-entering
    /// text restores prior placement.
    pub fn render(&self, form: &CardForm, mode: RenderMode) -> CardScene {
        let interactive = mode == RenderMode::Interactive;
        let mut blocks = Vec::with_capacity(BlockId::ALL.len());
        for id in BlockId::ALL {
            let (text, emoji) = match id {
                BlockId::Mood => (form.mood_label().to_string(), Some(form.mood_emoji().to_string())),
                BlockId::Title => {
                    if form.title.trim().is_empty() {
                        continue;
                    }
                    (form.title.clone(), None)
                }
                BlockId::Main => (form.main_text().to_string(), None),
                BlockId::Secondary => {
                    if form.text_secondary.trim().is_empty() {
                        continue;
                    }
                    (form.text_secondary.clone(), None)
                }
                BlockId::Date => (form.date_text().to_string(), None),
            };
            let geometry = self.geometry(id);
            blocks.push(BlockScene {
                id,
                x: geometry.position.x,
                y: geometry.position.y,
                width: geometry.width,
                color: geometry.color.clone(),
                text,
                emoji,
                resize_handle: interactive,
                color_popover: interactive && self.selected == Some(id),
            });
        }
        let background = if form.shows_image() {
            Background::Image {
                data_url: form
                    .image_data_url
                    .clone()
                    .unwrap_or_default(),
                overlay_intensity: form.overlay_intensity,
            }
        } else {
            Background::Gradient(form.gradient)
        };
        CardScene {
            background,
            aspect: form.aspect,
            blocks,
        }
    }
}

/// Card background for one render pass. The overlay darkening scalar rides
/// along here and never affects block geometry.
#[derive(Debug, Clone, PartialEq)]
pub enum Background {
    Gradient(crate::types::card::GradientId),
    Image { data_url: String, overlay_intensity: u8 },
}

/// Render-ready description of the whole card.
#[derive(Debug, Clone, PartialEq)]
pub struct CardScene {
    pub background: Background,
    pub aspect: crate::types::card::CardAspect,
    pub blocks: Vec<BlockScene>,
}

impl CardScene {
    pub fn block(&self, id: BlockId) -> Option<&BlockScene> {
        self.blocks.iter().find(|b| b.id == id)
    }
}

/// Placement of one visible block.
#[derive(Debug, Clone, PartialEq)]
pub struct BlockScene {
    pub id: BlockId,
    /// Anchor, percent of card box.
    pub x: f64,
    pub y: f64,
    /// Percent of card width.
    pub width: f64,
    /// CSS text color.
    pub color: String,
    pub text: String,
    /// Mood badge emoji; `None` for the other blocks.
    pub emoji: Option<String>,
    /// Editing affordances; always false in Export mode.
    pub resize_handle: bool,
    pub color_popover: bool,
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::card::{MoodPlaceholders, MoodId};
    use crate::types::block::{POSITION_MAX, POSITION_MIN, WIDTH_MAX, WIDTH_MIN};
    use proptest::prelude::*;

    fn form() -> CardForm {
        let mut f = CardForm::new(
            "One line about today.",
            "Today",
            MoodPlaceholders {
                calm: "Easy day".into(),
                happy: "Good day".into(),
                tired: "A little tired".into(),
                focused: "In focus".into(),
            },
        );
        f.text_main = "Done for today.".into();
        f.text_secondary = "Small steps still count.".into();
        f.date = "2026.02.10".into();
        f
    }

    fn card() -> CardBox {
        CardBox {
            width: 360.0,
            height: 640.0,
        }
    }

    #[test]
    fn test_defaults_round_trip() {
        let mut layout = CardLayout::new();
        for id in BlockId::ALL {
            assert_eq!(layout.position(id), id.default_position());
            assert_eq!(layout.width(id), id.default_width());
        }
        layout.set_position(BlockId::Main, BlockPosition { x: 33.0, y: 44.0 });
        layout.set_width(BlockId::Main, 55.0);
        assert_eq!(
            layout.position(BlockId::Main),
            BlockPosition { x: 33.0, y: 44.0 }
        );
        assert_eq!(layout.width(BlockId::Main), 55.0);
    }

    #[test]
    fn test_small_travel_is_a_click_and_toggles_selection() {
        let mut layout = CardLayout::new();
        let start = layout.position(BlockId::Main);

        layout.begin_drag(BlockId::Main, PointerPoint { x: 100.0, y: 100.0 });
        layout.update_pointer(PointerPoint { x: 103.0, y: 102.0 }, card());
        assert_eq!(layout.position(BlockId::Main), start, "below threshold");
        assert_eq!(
            layout.end_gesture(),
            GestureOutcome::Selected(Some(BlockId::Main))
        );

        // Clicking the selected block deselects it.
        layout.begin_drag(BlockId::Main, PointerPoint { x: 100.0, y: 100.0 });
        assert_eq!(layout.end_gesture(), GestureOutcome::Selected(None));
    }

    #[test]
    fn test_selecting_another_block_replaces_selection() {
        let mut layout = CardLayout::new();
        layout.begin_drag(BlockId::Main, PointerPoint { x: 0.0, y: 0.0 });
        layout.end_gesture();
        layout.begin_drag(BlockId::Date, PointerPoint { x: 0.0, y: 0.0 });
        assert_eq!(
            layout.end_gesture(),
            GestureOutcome::Selected(Some(BlockId::Date))
        );
        assert_eq!(layout.selected(), Some(BlockId::Date));
    }

    #[test]
    fn test_drag_past_threshold_moves_and_keeps_selection() {
        let mut layout = CardLayout::new();
        // Pre-select a block so we can see the drag leave it alone.
        layout.begin_drag(BlockId::Date, PointerPoint { x: 0.0, y: 0.0 });
        layout.end_gesture();

        let start = layout.position(BlockId::Main);
        layout.begin_drag(BlockId::Main, PointerPoint { x: 100.0, y: 100.0 });
        layout.update_pointer(PointerPoint { x: 136.0, y: 164.0 }, card());
        let moved = layout.position(BlockId::Main);
        assert_eq!(moved.x, start.x + 36.0 / 360.0 * 100.0);
        assert_eq!(moved.y, start.y + 64.0 / 640.0 * 100.0);
        assert_eq!(layout.end_gesture(), GestureOutcome::Committed(BlockId::Main));
        assert_eq!(layout.selected(), Some(BlockId::Date), "selection untouched");
    }

    #[test]
    fn test_drag_clamps_to_card_bounds() {
        let mut layout = CardLayout::new();
        layout.begin_drag(BlockId::Mood, PointerPoint { x: 0.0, y: 0.0 });
        layout.update_pointer(PointerPoint { x: -5000.0, y: 9000.0 }, card());
        let pos = layout.position(BlockId::Mood);
        assert_eq!(pos.x, POSITION_MIN);
        assert_eq!(pos.y, POSITION_MAX);
    }

    #[test]
    fn test_resize_is_horizontal_only_and_clamped() {
        let mut layout = CardLayout::new();
        let start_pos = layout.position(BlockId::Main);

        layout.begin_resize(BlockId::Main, PointerPoint { x: 200.0, y: 200.0 });
        layout.update_pointer(PointerPoint { x: 236.0, y: 500.0 }, card());
        assert_eq!(layout.width(BlockId::Main), WIDTH_MAX, "85 + 10 clamps to 95");
        assert_eq!(layout.position(BlockId::Main), start_pos);

        // Ending a resize never toggles selection, even with zero travel.
        assert_eq!(layout.end_gesture(), GestureOutcome::Committed(BlockId::Main));
        assert_eq!(layout.selected(), None);

        layout.begin_resize(BlockId::Main, PointerPoint { x: 200.0, y: 0.0 });
        layout.update_pointer(PointerPoint { x: -3000.0, y: 0.0 }, card());
        assert_eq!(layout.width(BlockId::Main), WIDTH_MIN);
        layout.end_gesture();
    }

    #[test]
    fn test_second_begin_is_ignored_while_session_active() {
        let mut layout = CardLayout::new();
        layout.begin_drag(BlockId::Main, PointerPoint { x: 0.0, y: 0.0 });
        layout.begin_resize(BlockId::Date, PointerPoint { x: 0.0, y: 0.0 });
        assert_eq!(layout.drag_target(), Some(BlockId::Main));
        layout.end_gesture();
    }

    #[test]
    fn test_pointer_exit_ends_session_and_frees_next_gesture() {
        // A pointer that leaves the card mid-drag ends the gesture there;
        // the position sticks and a fresh session can start on re-entry.
        let mut layout = CardLayout::new();
        layout.begin_drag(BlockId::Main, PointerPoint { x: 100.0, y: 100.0 });
        layout.update_pointer(PointerPoint { x: 172.0, y: 100.0 }, card());
        let committed = layout.position(BlockId::Main);
        assert_eq!(layout.end_gesture(), GestureOutcome::Committed(BlockId::Main));

        // Pointer travels outside, comes back, grabs another block.
        layout.begin_drag(BlockId::Date, PointerPoint { x: 50.0, y: 50.0 });
        assert_eq!(layout.drag_target(), Some(BlockId::Date));
        layout.update_pointer(PointerPoint { x: 86.0, y: 50.0 }, card());
        layout.end_gesture();

        assert_eq!(layout.position(BlockId::Main), committed, "no snap-back");
        assert_ne!(
            layout.position(BlockId::Date),
            BlockId::Date.default_position()
        );
    }

    #[test]
    fn test_zero_size_card_box_is_ignored() {
        let mut layout = CardLayout::new();
        let start = layout.position(BlockId::Main);
        layout.begin_drag(BlockId::Main, PointerPoint { x: 0.0, y: 0.0 });
        layout.update_pointer(
            PointerPoint { x: 500.0, y: 500.0 },
            CardBox { width: 0.0, height: 0.0 },
        );
        assert_eq!(layout.position(BlockId::Main), start);
        layout.end_gesture();
    }

    #[test]
    fn test_empty_secondary_omitted_but_geometry_kept() {
        let mut layout = CardLayout::new();
        layout.set_position(BlockId::Secondary, BlockPosition { x: 20.0, y: 70.0 });

        let mut f = form();
        f.text_secondary = String::new();
        let scene = layout.render(&f, RenderMode::Interactive);
        assert!(scene.block(BlockId::Secondary).is_none());

        f.text_secondary = "back again".into();
        let scene = layout.render(&f, RenderMode::Interactive);
        let block = scene.block(BlockId::Secondary).unwrap();
        assert_eq!((block.x, block.y), (20.0, 70.0), "placement preserved");
    }

    #[test]
    fn test_export_mode_excludes_editing_affordances() {
        let mut layout = CardLayout::new();
        layout.begin_drag(BlockId::Main, PointerPoint { x: 0.0, y: 0.0 });
        layout.end_gesture(); // main now selected

        let interactive = layout.render(&form(), RenderMode::Interactive);
        let main = interactive.block(BlockId::Main).unwrap();
        assert!(main.resize_handle);
        assert!(main.color_popover);

        let export = layout.render(&form(), RenderMode::Export);
        for block in &export.blocks {
            assert!(!block.resize_handle, "{} leaked a handle", block.id.as_str());
            assert!(!block.color_popover, "{} leaked a popover", block.id.as_str());
        }
    }

    #[test]
    fn test_photo_background_carries_overlay_scalar() {
        let layout = CardLayout::new();
        let mut f = form();
        f.background = crate::types::card::BackgroundKind::Image;
        f.image_data_url = Some("data:image/png;base64,AAAA".into());
        f.overlay_intensity = 40;
        let scene = layout.render(&f, RenderMode::Export);
        match scene.background {
            Background::Image { overlay_intensity, .. } => assert_eq!(overlay_intensity, 40),
            Background::Gradient(_) => panic!("expected photo background"),
        }
        // Geometry is unaffected by the overlay scalar.
        let main = scene.block(BlockId::Main).unwrap();
        assert_eq!(main.x, BlockId::Main.default_position().x);
    }

    #[test]
    fn test_geometry_survives_background_and_aspect_changes() {
        let mut layout = CardLayout::new();
        layout.set_position(BlockId::Main, BlockPosition { x: 25.0, y: 60.0 });
        layout.set_width(BlockId::Main, 40.0);

        let mut f = form();
        f.background = crate::types::card::BackgroundKind::Image;
        f.image_data_url = Some("data:image/png;base64,AAAA".into());
        f.aspect = crate::types::card::CardAspect::R16x9;

        let scene = layout.render(&f, RenderMode::Interactive);
        let main = scene.block(BlockId::Main).unwrap();
        assert_eq!((main.x, main.y, main.width), (25.0, 60.0, 40.0));
    }

    #[test]
    fn test_mood_block_uses_placeholder_then_override() {
        let layout = CardLayout::new();
        let mut f = form();
        f.mood = MoodId::Tired;
        let scene = layout.render(&f, RenderMode::Interactive);
        let mood = scene.block(BlockId::Mood).unwrap();
        assert_eq!(mood.text, "A little tired");
        assert_eq!(mood.emoji.as_deref(), Some(MoodId::Tired.default_emoji()));
    }

    proptest! {
        #[test]
        fn prop_positions_always_clamped(
            dx in -10_000.0f64..10_000.0,
            dy in -10_000.0f64..10_000.0,
        ) {
            let mut layout = CardLayout::new();
            layout.begin_drag(BlockId::Main, PointerPoint { x: 0.0, y: 0.0 });
            layout.update_pointer(PointerPoint { x: dx, y: dy }, card());
            let pos = layout.position(BlockId::Main);
            prop_assert!((POSITION_MIN..=POSITION_MAX).contains(&pos.x));
            prop_assert!((POSITION_MIN..=POSITION_MAX).contains(&pos.y));
        }

        #[test]
        fn prop_widths_always_clamped(dx in -10_000.0f64..10_000.0) {
            let mut layout = CardLayout::new();
            layout.begin_resize(BlockId::Date, PointerPoint { x: 0.0, y: 0.0 });
            layout.update_pointer(PointerPoint { x: dx, y: 0.0 }, card());
            let width = layout.width(BlockId::Date);
            prop_assert!((WIDTH_MIN..=WIDTH_MAX).contains(&width));
        }
    }
}
