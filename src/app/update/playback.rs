// src/app/update/playback.rs
//! Playback control message handlers

use iced::Task;

use crate::app::message::Message;
use crate::app::state::App;
use crate::features::SkipDirection;

impl App {
    /// Handle playback-related messages
    pub fn handle_playback(&mut self, message: &Message) -> Option<Task<Message>> {
        match message {
            Message::TogglePlayback => {
                self.player.toggle_play();
                Some(Task::none())
            }

            Message::NextSong => {
                self.player.skip(SkipDirection::Next);
                Some(Task::none())
            }

            Message::PrevSong => {
                self.player.skip(SkipDirection::Previous);
                Some(Task::none())
            }

            Message::SelectTrack(index) => {
                self.player.select_track(*index);
                Some(Task::none())
            }

            Message::CycleLoopMode => {
                self.player.cycle_loop_mode();
                Some(Task::none())
            }

            Message::ToggleMute => {
                self.player.toggle_mute();
                Some(Task::none())
            }

            Message::Pointer(control, event) => {
                self.player.pointer(*control, *event);
                Some(Task::none())
            }

            Message::CancelDrag => {
                self.player.cancel_drag();
                Some(Task::none())
            }

            Message::PlaybackTick => {
                self.player.pump();
                Some(Task::none())
            }

            _ => None,
        }
    }
}
