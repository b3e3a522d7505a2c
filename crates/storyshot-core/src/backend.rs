//! Gallery backend client
//!
//! Thin REST client for the hosted backend (Supabase-style): PostgREST
//! row queries/inserts plus a storage bucket for card images. The client
//! is constructed once from [`BackendConfig`] and injected wherever it is
//! needed; when configuration is absent the gallery and share features are
//! disabled and nothing here is ever called.
//!
//! Failures are converted to [`StoryError`] at this boundary; nothing
//! propagates into rendering code.

use async_trait::async_trait;
use serde::Deserialize;

use crate::error::StoryError;
use crate::feed::CardStore;
use crate::types::{NewSharedCard, SharedCard, SharedUpload};

/// Storage bucket holding rendered card images.
pub const BUCKET: &str = "card-images";
/// Table holding shared card rows.
const TABLE: &str = "shared_cards";

/// Backend endpoint configuration, resolved once at startup.
#[derive(Debug, Clone, Default)]
pub struct BackendConfig {
    pub url: Option<String>,
    pub anon_key: Option<String>,
}

impl BackendConfig {
    /// Read from `STORYSHOT_SUPABASE_URL` / `STORYSHOT_SUPABASE_ANON_KEY`.
    pub fn from_env() -> Self {
        BackendConfig {
            url: std::env::var("STORYSHOT_SUPABASE_URL").ok().filter(|s| !s.is_empty()),
            anon_key: std::env::var("STORYSHOT_SUPABASE_ANON_KEY")
                .ok()
                .filter(|s| !s.is_empty()),
        }
    }

    /// Gallery/share features are enabled only when both values are set.
    pub fn enabled(&self) -> bool {
        self.url.is_some() && self.anon_key.is_some()
    }
}

/// REST client for the shared gallery.
#[derive(Debug, Clone)]
pub struct GalleryClient {
    http: reqwest::Client,
    base_url: String,
    anon_key: String,
}

#[derive(Deserialize)]
struct InsertedRow {
    id: String,
}

impl GalleryClient {
    /// Build a client if the config is complete; `None` disables the
    /// gallery entirely.
    pub fn from_config(config: &BackendConfig) -> Option<Self> {
        match (&config.url, &config.anon_key) {
            (Some(url), Some(key)) => Some(GalleryClient {
                http: reqwest::Client::new(),
                base_url: url.trim_end_matches('/').to_string(),
                anon_key: key.clone(),
            }),
            _ => None,
        }
    }

    fn list_url(&self, page: usize, page_size: usize) -> String {
        format!(
            "{}/rest/v1/{}?select=id,image_url,caption,locale,status,created_at\
             &status=eq.approved&order=created_at.desc&offset={}&limit={}",
            self.base_url,
            TABLE,
            page * page_size,
            page_size,
        )
    }

    fn object_url(&self, name: &str) -> String {
        format!("{}/storage/v1/object/{}/{}", self.base_url, BUCKET, name)
    }

    /// Durably fetchable URL for an uploaded object.
    fn public_object_url(&self, name: &str) -> String {
        format!(
            "{}/storage/v1/object/public/{}/{}",
            self.base_url, BUCKET, name
        )
    }

    /// One page of approved cards, newest first.
    pub async fn list_approved(
        &self,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<SharedCard>, StoryError> {
        let response = self
            .http
            .get(self.list_url(page, page_size))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(StoryError::Backend(response.status().as_u16()));
        }
        let cards = response.json::<Vec<SharedCard>>().await?;
        Ok(cards)
    }

    /// Store an image blob in the bucket and return its public URL.
    pub async fn upload_image(
        &self,
        bytes: Vec<u8>,
        content_type: &str,
    ) -> Result<String, StoryError> {
        let name = object_name(content_type);
        let response = self
            .http
            .post(self.object_url(&name))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("content-type", content_type.to_string())
            .header("x-upsert", "false")
            .body(bytes)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(StoryError::Backend(response.status().as_u16()));
        }
        Ok(self.public_object_url(&name))
    }

    /// Insert one card row and return its server-assigned id.
    pub async fn insert_card(&self, row: &NewSharedCard) -> Result<String, StoryError> {
        let response = self
            .http
            .post(format!("{}/rest/v1/{}", self.base_url, TABLE))
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("prefer", "return=representation")
            .json(row)
            .send()
            .await?;
        if !response.status().is_success() {
            return Err(StoryError::Backend(response.status().as_u16()));
        }
        let rows = response.json::<Vec<InsertedRow>>().await?;
        rows.into_iter()
            .next()
            .map(|r| r.id)
            .ok_or_else(|| StoryError::Serialization("insert returned no row".to_string()))
    }

    /// Upload a rendered card and insert its row.
    ///
    /// Not atomic: if the insert fails after the upload succeeded, the
    /// blob stays in storage as an orphan.
    pub async fn share_card(
        &self,
        png_bytes: Vec<u8>,
        caption: Option<String>,
        locale: &str,
    ) -> Result<SharedUpload, StoryError> {
        let image_url = self.upload_image(png_bytes, "image/png").await?;
        let row = NewSharedCard::approved(
            image_url.clone(),
            caption.filter(|c| !c.trim().is_empty()),
            locale.to_string(),
        );
        let id = self.insert_card(&row).await?;
        tracing::info!(%id, "card shared to gallery");
        Ok(SharedUpload { id, image_url })
    }
}

#[async_trait]
impl CardStore for GalleryClient {
    async fn list_approved(
        &self,
        page: usize,
        page_size: usize,
    ) -> Result<Vec<SharedCard>, StoryError> {
        GalleryClient::list_approved(self, page, page_size).await
    }
}

/// Timestamped random object name, e.g. `1770000000000-9f3a21bc.png`.
fn object_name(content_type: &str) -> String {
    let ext = match content_type {
        "image/jpeg" => "jpg",
        "image/webp" => "webp",
        _ => "png",
    };
    format!(
        "{}-{:08x}.{}",
        chrono::Utc::now().timestamp_millis(),
        rand::random::<u32>(),
        ext
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn client() -> GalleryClient {
        GalleryClient::from_config(&BackendConfig {
            url: Some("https://proj.supabase.co/".to_string()),
            anon_key: Some("anon".to_string()),
        })
        .unwrap()
    }

    #[test]
    fn test_config_enabled_requires_both_values() {
        assert!(!BackendConfig::default().enabled());
        assert!(!BackendConfig {
            url: Some("https://x".into()),
            anon_key: None
        }
        .enabled());
        assert!(BackendConfig {
            url: Some("https://x".into()),
            anon_key: Some("k".into())
        }
        .enabled());
    }

    #[test]
    fn test_partial_config_yields_no_client() {
        assert!(GalleryClient::from_config(&BackendConfig::default()).is_none());
    }

    #[test]
    fn test_list_url_range_math() {
        let c = client();
        let url = c.list_url(2, 6);
        assert!(url.starts_with("https://proj.supabase.co/rest/v1/shared_cards?"));
        assert!(url.contains("status=eq.approved"));
        assert!(url.contains("order=created_at.desc"));
        assert!(url.contains("offset=12"));
        assert!(url.contains("limit=6"));
    }

    #[test]
    fn test_public_url_points_into_bucket() {
        let c = client();
        assert_eq!(
            c.public_object_url("a.png"),
            "https://proj.supabase.co/storage/v1/object/public/card-images/a.png"
        );
    }

    #[test]
    fn test_object_name_extension_follows_content_type() {
        assert!(object_name("image/png").ends_with(".png"));
        assert!(object_name("image/jpeg").ends_with(".jpg"));
        assert!(object_name("image/webp").ends_with(".webp"));
        assert!(object_name("application/octet-stream").ends_with(".png"));
        assert_ne!(object_name("image/png"), object_name("image/png"));
    }
}
