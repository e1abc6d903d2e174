//! Lyra - A desktop music player with synchronized lyrics
//! Built with iced for the UI and rodio for playback

#![cfg_attr(not(debug_assertions), windows_subsystem = "windows")]

mod app;
mod audio;
mod features;
mod ui;
mod utils;

use std::path::PathBuf;

use anyhow::Context;

use crate::features::{Catalog, Settings};

/// Catalog used when neither the command line nor the settings name one
const DEFAULT_CATALOG_PATH: &str = "data.json";

fn main() -> anyhow::Result<()> {
    // Initialize tracing for logging
    tracing_subscriber::fmt::init();

    let settings = Settings::load();
    let catalog_path = resolve_catalog_path(std::env::args().nth(1), &settings);
    let catalog = Catalog::load(&catalog_path)?;

    iced::application(
        move || app::App::new(catalog.clone(), settings.clone()),
        app::App::update,
        app::App::view,
    )
    .title(app::App::title)
    .theme(app::App::theme)
    .subscription(app::App::subscription)
    .window_size(iced::Size::new(1200.0, 760.0))
    .antialiasing(true)
    .run()
    .context("Failed to run the player window")
}

/// Command-line argument first, then settings, then the working directory
fn resolve_catalog_path(arg: Option<String>, settings: &Settings) -> PathBuf {
    arg.map(PathBuf::from)
        .or_else(|| settings.catalog_path.clone())
        .unwrap_or_else(|| PathBuf::from(DEFAULT_CATALOG_PATH))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_catalog_path_prefers_argument() {
        let settings = Settings {
            catalog_path: Some(PathBuf::from("/music/from-settings.json")),
            ..Settings::default()
        };
        assert_eq!(
            resolve_catalog_path(Some("cli.json".to_string()), &settings),
            PathBuf::from("cli.json")
        );
        assert_eq!(
            resolve_catalog_path(None, &settings),
            PathBuf::from("/music/from-settings.json")
        );
        assert_eq!(
            resolve_catalog_path(None, &Settings::default()),
            PathBuf::from("data.json")
        );
    }
}
