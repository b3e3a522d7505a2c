//! Card appearance types and the resolved authoring form
//!
//! Every identifier that the original UI passed around as a string literal
//! is a closed enum here, so match arms stay exhaustive.

use serde::{Deserialize, Serialize};

/// Mood badge preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MoodId {
    Calm,
    Happy,
    Tired,
    Focused,
}

impl MoodId {
    pub const ALL: [MoodId; 4] = [MoodId::Calm, MoodId::Happy, MoodId::Tired, MoodId::Focused];

    /// Emoji used when the author has not picked a custom one.
    pub fn default_emoji(self) -> &'static str {
        match self {
            MoodId::Calm => "\u{1f60c}",
            MoodId::Happy => "\u{1f60a}",
            MoodId::Tired => "\u{1f62e}\u{200d}\u{1f4a8}",
            MoodId::Focused => "\u{1f525}",
        }
    }
}

/// Gradient background preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum GradientId {
    Sunset,
    Ocean,
    Mono,
}

impl GradientId {
    pub const ALL: [GradientId; 3] = [GradientId::Sunset, GradientId::Ocean, GradientId::Mono];

    /// CSS background for this preset.
    pub fn css(self) -> &'static str {
        match self {
            GradientId::Sunset => {
                "linear-gradient(145deg, #312e81 0%, #7c2d12 40%, #f97316 70%, #facc15 100%)"
            }
            GradientId::Ocean => {
                "linear-gradient(150deg, #0f172a 0%, #0369a1 35%, #0891b2 65%, #a5f3fc 100%)"
            }
            GradientId::Mono => {
                "linear-gradient(145deg, #020617 0%, #111827 40%, #4b5563 100%)"
            }
        }
    }
}

/// Whether the card background is a gradient preset or an uploaded photo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundKind {
    Gradient,
    Image,
}

/// Card aspect ratio preset.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CardAspect {
    R9x16,
    R4x5,
    R3x4,
    R1x1,
    R3x2,
    R4x3,
    R16x9,
}

impl CardAspect {
    pub const ALL: [CardAspect; 7] = [
        CardAspect::R9x16,
        CardAspect::R4x5,
        CardAspect::R3x4,
        CardAspect::R1x1,
        CardAspect::R3x2,
        CardAspect::R4x3,
        CardAspect::R16x9,
    ];

    /// Value for the CSS `aspect-ratio` property.
    pub fn css(self) -> &'static str {
        match self {
            CardAspect::R9x16 => "9 / 16",
            CardAspect::R4x5 => "4 / 5",
            CardAspect::R3x4 => "3 / 4",
            CardAspect::R1x1 => "1 / 1",
            CardAspect::R3x2 => "3 / 2",
            CardAspect::R4x3 => "4 / 3",
            CardAspect::R16x9 => "16 / 9",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            CardAspect::R9x16 => "9:16",
            CardAspect::R4x5 => "4:5",
            CardAspect::R3x4 => "3:4",
            CardAspect::R1x1 => "1:1",
            CardAspect::R3x2 => "3:2",
            CardAspect::R4x3 => "4:3",
            CardAspect::R16x9 => "16:9",
        }
    }

    /// Landscape presets get a wider preview column.
    pub fn is_landscape(self) -> bool {
        matches!(self, CardAspect::R3x2 | CardAspect::R4x3 | CardAspect::R16x9)
    }
}

/// Mood badge label to show when the author has not typed a custom one.
/// Resolved once from the active locale when the form is constructed.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MoodPlaceholders {
    pub calm: String,
    pub happy: String,
    pub tired: String,
    pub focused: String,
}

impl MoodPlaceholders {
    pub fn for_mood(&self, mood: MoodId) -> &str {
        match mood {
            MoodId::Calm => &self.calm,
            MoodId::Happy => &self.happy,
            MoodId::Tired => &self.tired,
            MoodId::Focused => &self.focused,
        }
    }
}

/// The full authoring form for one card.
///
/// Every field is resolved at construction; render code never needs
/// fallback defaulting. Empty strings mean "use the placeholder" for the
/// text fields and "use the mood preset" for the mood overrides.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CardForm {
    pub title: String,
    pub text_main: String,
    pub text_secondary: String,
    pub date: String,
    pub mood: MoodId,
    /// Custom mood label; empty means use the mood placeholder.
    pub mood_text: String,
    /// Custom mood emoji; empty means use the mood preset emoji.
    pub mood_emoji: String,
    pub background: BackgroundKind,
    pub gradient: GradientId,
    /// Uploaded photo as a data URL, if any.
    pub image_data_url: Option<String>,
    pub image_file_name: Option<String>,
    /// 0..=100 darkening of the photo overlay.
    pub overlay_intensity: u8,
    pub aspect: CardAspect,
    /// Shown for the main line while `text_main` is empty.
    pub placeholder_main: String,
    /// Shown for the date chip while `date` is empty.
    pub placeholder_date: String,
    pub mood_placeholders: MoodPlaceholders,
}

/// Default overlay darkening for photo backgrounds.
pub const DEFAULT_OVERLAY_INTENSITY: u8 = 85;

impl CardForm {
    /// A fresh form with the given locale-resolved placeholder strings.
    pub fn new(
        placeholder_main: impl Into<String>,
        placeholder_date: impl Into<String>,
        mood_placeholders: MoodPlaceholders,
    ) -> Self {
        CardForm {
            title: String::new(),
            text_main: String::new(),
            text_secondary: String::new(),
            date: String::new(),
            mood: MoodId::Calm,
            mood_text: String::new(),
            mood_emoji: String::new(),
            background: BackgroundKind::Gradient,
            gradient: GradientId::Sunset,
            image_data_url: None,
            image_file_name: None,
            overlay_intensity: DEFAULT_OVERLAY_INTENSITY,
            aspect: CardAspect::R9x16,
            placeholder_main: placeholder_main.into(),
            placeholder_date: placeholder_date.into(),
            mood_placeholders,
        }
    }

    /// Main line to render (placeholder while empty).
    pub fn main_text(&self) -> &str {
        if self.text_main.trim().is_empty() {
            &self.placeholder_main
        } else {
            &self.text_main
        }
    }

    /// Date chip text to render (placeholder while empty).
    pub fn date_text(&self) -> &str {
        if self.date.trim().is_empty() {
            &self.placeholder_date
        } else {
            &self.date
        }
    }

    /// Mood badge label to render.
    pub fn mood_label(&self) -> &str {
        if self.mood_text.trim().is_empty() {
            self.mood_placeholders.for_mood(self.mood)
        } else {
            &self.mood_text
        }
    }

    /// Mood badge emoji to render.
    pub fn mood_emoji(&self) -> &str {
        if self.mood_emoji.trim().is_empty() {
            self.mood.default_emoji()
        } else {
            &self.mood_emoji
        }
    }

    /// True when the card renders the uploaded photo as background.
    pub fn shows_image(&self) -> bool {
        self.background == BackgroundKind::Image && self.image_data_url.is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn placeholders() -> MoodPlaceholders {
        MoodPlaceholders {
            calm: "Easy day".into(),
            happy: "Good day".into(),
            tired: "A little tired".into(),
            focused: "In focus".into(),
        }
    }

    #[test]
    fn test_empty_fields_fall_back_to_placeholders() {
        let form = CardForm::new("One line about today.", "Today", placeholders());
        assert_eq!(form.main_text(), "One line about today.");
        assert_eq!(form.date_text(), "Today");
        assert_eq!(form.mood_label(), "Easy day");
        assert_eq!(form.mood_emoji(), MoodId::Calm.default_emoji());
    }

    #[test]
    fn test_custom_mood_overrides_win() {
        let mut form = CardForm::new("m", "d", placeholders());
        form.mood = MoodId::Focused;
        assert_eq!(form.mood_label(), "In focus");
        form.mood_text = "deep work".into();
        form.mood_emoji = "\u{2728}".into();
        assert_eq!(form.mood_label(), "deep work");
        assert_eq!(form.mood_emoji(), "\u{2728}");
    }

    #[test]
    fn test_shows_image_requires_both_kind_and_data() {
        let mut form = CardForm::new("m", "d", placeholders());
        form.background = BackgroundKind::Image;
        assert!(!form.shows_image());
        form.image_data_url = Some("data:image/png;base64,AAAA".into());
        assert!(form.shows_image());
        form.background = BackgroundKind::Gradient;
        assert!(!form.shows_image());
    }

    #[test]
    fn test_aspect_css_is_exhaustive() {
        for aspect in CardAspect::ALL {
            assert!(aspect.css().contains('/'));
            assert!(!aspect.label().is_empty());
        }
    }
}
