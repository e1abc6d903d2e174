// src/app/state.rs
//! Application state definitions

use crate::audio::RodioMedia;
use crate::features::{PlayerController, Settings};
use crate::ui::pages::PlayerPage;

/// Main application state
pub struct App {
    /// Playback core driving the player page
    pub player: PlayerController<RodioMedia, PlayerPage>,
    /// Settings read at startup
    pub settings: Settings,
}
