#![allow(non_snake_case)]

mod app;
mod components;
pub mod context;
mod export;
mod i18n;
mod pages;
mod theme;

use clap::Parser;
use dioxus::desktop::{Config, WindowBuilder};
use storyshot_core::BackendConfig;

use crate::i18n::Locale;

/// Storyshot - story card composer with a shared gallery
#[derive(Parser, Debug)]
#[command(name = "storyshot-desktop")]
#[command(about = "Compose a story card, export it as PNG, share it to the gallery")]
struct Args {
    /// UI locale (ko or en)
    #[arg(short, long, default_value = "ko")]
    locale: String,

    /// Gallery backend URL (overrides STORYSHOT_SUPABASE_URL)
    #[arg(long)]
    supabase_url: Option<String>,

    /// Gallery backend anon key (overrides STORYSHOT_SUPABASE_ANON_KEY)
    #[arg(long)]
    supabase_key: Option<String>,
}

fn main() {
    tracing_subscriber::fmt::init();

    let args = Args::parse();

    let locale = Locale::from_tag(&args.locale);

    // Backend configuration is resolved exactly once; everything else
    // receives the constructed client (or None) through context.
    let mut backend = BackendConfig::from_env();
    if args.supabase_url.is_some() {
        backend.url = args.supabase_url;
    }
    if args.supabase_key.is_some() {
        backend.anon_key = args.supabase_key;
    }

    tracing::info!(
        locale = locale.tag(),
        gallery_enabled = backend.enabled(),
        "starting storyshot"
    );

    let _ = context::LAUNCH.set(context::LaunchOptions { locale, backend });

    let config = Config::new().with_window(
        WindowBuilder::new()
            .with_title("Storyshot")
            .with_inner_size(dioxus::desktop::LogicalSize::new(1100.0, 860.0))
            .with_resizable(true),
    );

    dioxus::LaunchBuilder::desktop()
        .with_cfg(config)
        .launch(app::App);
}
