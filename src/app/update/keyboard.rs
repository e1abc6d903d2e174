// src/app/update/keyboard.rs
//! Keyboard message handlers

use iced::Task;
use iced::keyboard::key::Named;
use iced::keyboard::{Key, Modifiers};

use crate::app::message::Message;
use crate::app::state::App;

/// Map a key press to the player message it triggers
pub fn action_for_key(key: &Key, modifiers: Modifiers) -> Option<Message> {
    if modifiers.control() || modifiers.alt() || modifiers.logo() {
        return None;
    }

    match key {
        Key::Named(Named::Space) => Some(Message::TogglePlayback),
        Key::Named(Named::Escape) => Some(Message::CancelDrag),
        _ => None,
    }
}

impl App {
    /// Handle keyboard-related messages
    pub fn handle_keyboard(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::KeyPressed(key, modifiers) => match action_for_key(key, *modifiers) {
                Some(action) => Some(self.update(action)),
                None => Some(Task::none()),
            },

            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_toggles_playback() {
        let action = action_for_key(&Key::Named(Named::Space), Modifiers::empty());
        assert!(matches!(action, Some(Message::TogglePlayback)));
    }

    #[test]
    fn test_escape_cancels_drag() {
        let action = action_for_key(&Key::Named(Named::Escape), Modifiers::empty());
        assert!(matches!(action, Some(Message::CancelDrag)));
    }

    #[test]
    fn test_other_keys_are_ignored() {
        assert!(action_for_key(&Key::Named(Named::Enter), Modifiers::empty()).is_none());
        assert!(action_for_key(&Key::Character("a".into()), Modifiers::empty()).is_none());
        assert!(action_for_key(&Key::Named(Named::Space), Modifiers::CTRL).is_none());
    }
}
