// src/app/view.rs
//! Application view rendering

use iced::Element;

use super::App;
use super::message::Message;

impl App {
    /// Build the view
    pub fn view(&self) -> Element<'_, Message> {
        self.player.presenter().view()
    }
}
