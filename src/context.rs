//! Context providers for Storyshot.
//!
//! The gallery backend client is constructed once at startup from
//! [`LaunchOptions`] and handed to components through Dioxus context as an
//! explicit `Option<Arc<GalleryClient>>` - `None` means the gallery and
//! share features are disabled and their affordances stay hidden.

use std::sync::{Arc, OnceLock};

use dioxus::prelude::*;
use storyshot_core::{BackendConfig, GalleryClient};

use crate::i18n::Locale;

/// Options resolved in `main` before the UI launches.
#[derive(Debug, Clone)]
pub struct LaunchOptions {
    pub locale: Locale,
    pub backend: BackendConfig,
}

/// Set once from command line / environment in `main`.
pub static LAUNCH: OnceLock<LaunchOptions> = OnceLock::new();

pub fn launch_options() -> LaunchOptions {
    LAUNCH.get().cloned().unwrap_or_else(|| LaunchOptions {
        locale: Locale::Ko,
        backend: BackendConfig::default(),
    })
}

/// Shared backend client; `None` when the backend is not configured.
pub type SharedBackend = Option<Arc<GalleryClient>>;

/// Hook to access the gallery client from context.
pub fn use_backend() -> Signal<SharedBackend> {
    use_context::<Signal<SharedBackend>>()
}

/// Hook to access the active locale from context.
pub fn use_locale() -> Signal<Locale> {
    use_context::<Signal<Locale>>()
}
