//! Main application module

mod message;
mod state;
mod update;
mod view;

use iced::time::Duration;
use iced::{Task, Theme};

use crate::audio::RodioMedia;
use crate::features::{Catalog, PlaybackStateMachine, PlayerController, Settings};
use crate::ui::pages::PlayerPage;
pub use message::Message;
pub use state::App;

impl App {
    /// Create new application instance with the first track loaded, paused
    pub fn new(catalog: Catalog, settings: Settings) -> (Self, Task<Message>) {
        let player = PlayerController::new(
            catalog,
            RodioMedia::new(),
            PlayerPage::new(),
            PlaybackStateMachine::new(settings.loop_mode),
            settings.volume,
        );

        (Self { player, settings }, Task::none())
    }

    /// Application theme
    pub fn theme(&self) -> Theme {
        if self.settings.display.dark_mode {
            Theme::Dark
        } else {
            Theme::Light
        }
    }

    /// Window title naming the loaded track
    pub fn title(&self) -> String {
        match self.player.catalog().get(self.player.current_index()) {
            Some(track) => format!("Lyra - {} - {}", track.name, track.singer),
            None => "Lyra".to_string(),
        }
    }

    /// Subscriptions for keyboard events and playback ticks
    pub fn subscription(&self) -> iced::Subscription<Message> {
        use iced::keyboard;

        let keyboard_sub = keyboard::listen().filter_map(|event| match event {
            keyboard::Event::KeyPressed { key, modifiers, .. } => {
                Some(Message::KeyPressed(key, modifiers))
            }
            _ => None,
        });

        // Media events only arrive while a track plays
        let playback_sub = if self.player.is_playing() {
            iced::time::every(Duration::from_millis(self.settings.tick_interval_ms))
                .map(|_| Message::PlaybackTick)
        } else {
            iced::Subscription::none()
        };

        iced::Subscription::batch([keyboard_sub, playback_sub])
    }
}
