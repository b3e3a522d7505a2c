//! Locale and UI strings.
//!
//! Two locales, one closed struct of strings each; components look text up
//! through [`Strings`] so there is no stringly-typed key lookup anywhere.

use storyshot_core::MoodPlaceholders;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Locale {
    Ko,
    En,
}

impl Locale {
    pub fn from_tag(tag: &str) -> Locale {
        match tag.trim().to_ascii_lowercase().as_str() {
            "en" => Locale::En,
            _ => Locale::Ko,
        }
    }

    pub fn tag(self) -> &'static str {
        match self {
            Locale::Ko => "ko",
            Locale::En => "en",
        }
    }

    pub fn toggle(self) -> Locale {
        match self {
            Locale::Ko => Locale::En,
            Locale::En => Locale::Ko,
        }
    }

    pub fn strings(self) -> &'static Strings {
        match self {
            Locale::Ko => &KO,
            Locale::En => &EN,
        }
    }

    /// Mood badge placeholder labels for the card form.
    pub fn mood_placeholders(self) -> MoodPlaceholders {
        let s = self.strings();
        MoodPlaceholders {
            calm: s.mood_calm.to_string(),
            happy: s.mood_happy.to_string(),
            tired: s.mood_tired.to_string(),
            focused: s.mood_focused.to_string(),
        }
    }
}

/// Every user-visible string in the app.
pub struct Strings {
    pub app_title: &'static str,
    pub app_tagline: &'static str,

    // Composer form
    pub field_title: &'static str,
    pub field_main: &'static str,
    pub field_secondary: &'static str,
    pub field_date: &'static str,
    pub field_mood_text: &'static str,
    pub field_mood_emoji: &'static str,
    pub placeholder_main: &'static str,
    pub placeholder_date: &'static str,
    pub mood_calm: &'static str,
    pub mood_happy: &'static str,
    pub mood_tired: &'static str,
    pub mood_focused: &'static str,
    pub section_mood: &'static str,
    pub section_background: &'static str,
    pub section_aspect: &'static str,
    pub background_gradient: &'static str,
    pub background_image: &'static str,
    pub gradient_sunset: &'static str,
    pub gradient_ocean: &'static str,
    pub gradient_mono: &'static str,
    pub overlay_intensity: &'static str,
    pub pick_image: &'static str,
    pub pick_image_error: &'static str,

    // Preview affordances
    pub drag_hint: &'static str,
    pub resize_hint: &'static str,
    pub text_color: &'static str,

    // Export / share
    pub download_png: &'static str,
    pub export_failed: &'static str,
    pub share_to_gallery: &'static str,
    pub share_title: &'static str,
    pub share_caption_title: &'static str,
    pub share_caption_body: &'static str,
    pub share_submit: &'static str,
    pub share_submitting: &'static str,
    pub share_failed: &'static str,
    pub share_done: &'static str,
    pub cancel: &'static str,
    pub close: &'static str,

    // Gallery
    pub gallery_link: &'static str,
    pub composer_link: &'static str,
    pub gallery_title: &'static str,
    pub gallery_intro: &'static str,
    pub gallery_share_file: &'static str,
    pub gallery_loading: &'static str,
    pub gallery_empty: &'static str,
    pub gallery_error: &'static str,
    pub gallery_error_setup_hint: &'static str,
    pub gallery_end: &'static str,
    pub gallery_download: &'static str,
    pub untitled_card: &'static str,
}

static KO: Strings = Strings {
    app_title: "Storyshot",
    app_tagline: "한 줄, 한 순간.",

    field_title: "제목 (선택)",
    field_main: "오늘의 한 문장",
    field_secondary: "보조 문장 (선택)",
    field_date: "날짜",
    field_mood_text: "기분 문구 (선택)",
    field_mood_emoji: "기분 이모지",
    placeholder_main: "오늘을 한 문장으로 남겨보세요.",
    placeholder_date: "오늘",
    mood_calm: "편한 하루",
    mood_happy: "좋은 하루",
    mood_tired: "조금 지침",
    mood_focused: "집중",
    section_mood: "오늘의 기분",
    section_background: "배경",
    section_aspect: "카드 비율",
    background_gradient: "그라데이션",
    background_image: "사진",
    gradient_sunset: "선셋",
    gradient_ocean: "오션",
    gradient_mono: "모노",
    overlay_intensity: "오버레이 강도",
    pick_image: "사진 선택",
    pick_image_error: "사진을 불러오지 못했어요.",

    drag_hint: "드래그: 위치 변경 · 클릭: 색상 변경",
    resize_hint: "드래그: 넓이 조절",
    text_color: "텍스트 색상",

    download_png: "PNG로 저장",
    export_failed: "카드를 저장하지 못했어요. 다시 시도해주세요.",
    share_to_gallery: "갤러리에 공유",
    share_title: "갤러리에 공유하기",
    share_caption_title: "제목 (선택)",
    share_caption_body: "글",
    share_submit: "공유",
    share_submitting: "공유 중...",
    share_failed: "공유에 실패했어요. 잠시 후 다시 시도해주세요.",
    share_done: "갤러리에 공유되었어요!",
    cancel: "취소",
    close: "닫기",

    gallery_link: "갤러리",
    composer_link: "카드 만들기",
    gallery_title: "갤러리",
    gallery_intro: "다른 사람들이 남긴 순간들",
    gallery_share_file: "내 카드 올리기",
    gallery_loading: "불러오는 중...",
    gallery_empty: "아직 공유된 카드가 없어요.",
    gallery_error: "갤러리를 불러오지 못했어요.",
    gallery_error_setup_hint: "백엔드 설정(URL과 키)을 확인해주세요.",
    gallery_end: "마지막 카드까지 보셨어요.",
    gallery_download: "이미지 저장",
    untitled_card: "제목 없음",
};

static EN: Strings = Strings {
    app_title: "Storyshot",
    app_tagline: "One line, one moment.",

    field_title: "Title (optional)",
    field_main: "Today in one sentence",
    field_secondary: "Secondary line (optional)",
    field_date: "Date",
    field_mood_text: "Mood label (optional)",
    field_mood_emoji: "Mood emoji",
    placeholder_main: "Leave today behind in one sentence.",
    placeholder_date: "Today",
    mood_calm: "Easy day",
    mood_happy: "Good day",
    mood_tired: "A little tired",
    mood_focused: "In focus",
    section_mood: "Today's mood",
    section_background: "Background",
    section_aspect: "Card ratio",
    background_gradient: "Gradient",
    background_image: "Photo",
    gradient_sunset: "Sunset",
    gradient_ocean: "Ocean",
    gradient_mono: "Mono",
    overlay_intensity: "Overlay intensity",
    pick_image: "Pick a photo",
    pick_image_error: "Could not load that photo.",

    drag_hint: "Drag: move · Click: change color",
    resize_hint: "Drag: adjust width",
    text_color: "Text color",

    download_png: "Download PNG",
    export_failed: "Could not save the card. Please try again.",
    share_to_gallery: "Share to gallery",
    share_title: "Share to the gallery",
    share_caption_title: "Title (optional)",
    share_caption_body: "Caption",
    share_submit: "Share",
    share_submitting: "Sharing...",
    share_failed: "Sharing failed. Please try again in a moment.",
    share_done: "Shared to the gallery!",
    cancel: "Cancel",
    close: "Close",

    gallery_link: "Gallery",
    composer_link: "Make a card",
    gallery_title: "Gallery",
    gallery_intro: "Moments other people left behind",
    gallery_share_file: "Upload my card",
    gallery_loading: "Loading...",
    gallery_empty: "No shared cards yet.",
    gallery_error: "Could not load the gallery.",
    gallery_error_setup_hint: "Check the backend configuration (URL and key).",
    gallery_end: "You've reached the end.",
    gallery_download: "Save image",
    untitled_card: "Untitled",
};

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_tag_defaults_to_korean() {
        assert_eq!(Locale::from_tag("en"), Locale::En);
        assert_eq!(Locale::from_tag("EN "), Locale::En);
        assert_eq!(Locale::from_tag("ko"), Locale::Ko);
        assert_eq!(Locale::from_tag("fr"), Locale::Ko);
    }

    #[test]
    fn test_toggle_round_trips() {
        assert_eq!(Locale::Ko.toggle().toggle(), Locale::Ko);
    }

    #[test]
    fn test_mood_placeholders_follow_locale() {
        assert_eq!(Locale::En.mood_placeholders().focused, "In focus");
    }
}
