//! Wire types for shared gallery cards
//!
//! Field names follow the backend table (`shared_cards`), so these types
//! serialize straight into PostgREST requests and responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// One approved card row, as returned by the backend.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SharedCard {
    /// Server-assigned opaque id
    pub id: String,
    /// Public URL of the rendered card image
    pub image_url: String,
    /// First line = title, remainder = body (see [`crate::caption`])
    pub caption: Option<String>,
    /// Locale the card was composed in
    pub locale: String,
    /// Only `"approved"` rows are ever fetched
    pub status: String,
    pub created_at: DateTime<Utc>,
}

/// Insert payload for a new card row.
#[derive(Debug, Clone, Serialize)]
pub struct NewSharedCard {
    pub image_url: String,
    pub caption: Option<String>,
    pub locale: String,
    pub status: String,
}

impl NewSharedCard {
    /// New row with `status` set to `"approved"` at insert time
    /// (no moderation queue in current scope).
    pub fn approved(image_url: String, caption: Option<String>, locale: String) -> Self {
        NewSharedCard {
            image_url,
            caption,
            locale,
            status: "approved".to_string(),
        }
    }
}

/// Result of a successful share (upload + insert).
#[derive(Debug, Clone, PartialEq)]
pub struct SharedUpload {
    pub id: String,
    pub image_url: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_card_parses_backend_row() {
        let json = r#"{
            "id": "b7e6",
            "image_url": "https://cdn.example/card-images/1.png",
            "caption": "Title\nBody line",
            "locale": "ko",
            "status": "approved",
            "created_at": "2026-02-10T08:30:00Z"
        }"#;
        let card: SharedCard = serde_json::from_str(json).unwrap();
        assert_eq!(card.id, "b7e6");
        assert_eq!(card.caption.as_deref(), Some("Title\nBody line"));
        assert_eq!(card.status, "approved");
    }

    #[test]
    fn test_null_caption_is_none() {
        let json = r#"{
            "id": "x",
            "image_url": "u",
            "caption": null,
            "locale": "en",
            "status": "approved",
            "created_at": "2026-02-10T08:30:00Z"
        }"#;
        let card: SharedCard = serde_json::from_str(json).unwrap();
        assert!(card.caption.is_none());
    }

    #[test]
    fn test_approved_constructor_sets_status() {
        let row = NewSharedCard::approved("url".into(), None, "en".into());
        assert_eq!(row.status, "approved");
    }
}
