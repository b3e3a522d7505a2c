use std::sync::Arc;

use dioxus::prelude::*;
use storyshot_core::GalleryClient;

use crate::context::{launch_options, SharedBackend};
use crate::i18n::Locale;
use crate::pages::{Gallery, Home};
use crate::theme::GLOBAL_STYLES;

/// Application routes.
///
/// - `/` - Card composer
/// - `/gallery` - Shared gallery feed
#[derive(Clone, Routable, PartialEq)]
pub enum Route {
    #[route("/")]
    Home {},
    #[route("/gallery")]
    Gallery {},
}

/// Root application component.
///
/// Provides global styles, the backend client, and the locale context.
#[component]
pub fn App() -> Element {
    let options = launch_options();

    let backend: Signal<SharedBackend> =
        use_signal(|| GalleryClient::from_config(&options.backend).map(Arc::new));
    let locale: Signal<Locale> = use_signal(|| options.locale);

    use_context_provider(|| backend);
    use_context_provider(|| locale);

    rsx! {
        style { {GLOBAL_STYLES} }
        Router::<Route> {}
    }
}
