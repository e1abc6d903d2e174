//! Message update handlers - thin dispatcher delegating to submodules

mod keyboard;
mod playback;

use iced::Task;

use super::{App, Message};
use crate::ui::pages::player::scroll_lyrics;

impl App {
    /// Handle messages by delegating to appropriate submodule handlers
    pub fn update(&mut self, message: Message) -> Task<Message> {
        let task = if let Some(task) = self.handle_playback(&message) {
            task
        } else if let Some(task) = self.handle_keyboard(&message) {
            task
        } else {
            Task::none()
        };

        // Follow the lyric highlight the handler may have moved
        match self.player.presenter_mut().take_pending_scroll() {
            Some(offset) => Task::batch([task, scroll_lyrics(offset)]),
            None => task,
        }
    }
}
