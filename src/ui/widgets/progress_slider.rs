//! Progress and volume bars
//!
//! Both bars forward raw pointer input to the seek protocol; the fill they
//! draw is whatever the presenter last received.

use iced::{Background, Border, Color, Element, Length};

use super::drag_bar::{self, DragBar};
use crate::app::Message;
use crate::features::SeekControl;
use crate::ui::theme;

const PROGRESS_WIDTH: f32 = 400.0;
const VOLUME_WIDTH: f32 = 100.0;

fn handle_radius(status: drag_bar::Status) -> f32 {
    match status {
        drag_bar::Status::Hovered | drag_bar::Status::Dragged => 6.0,
        // Hide handle when not interacting
        drag_bar::Status::Active => 0.0,
    }
}

fn rail(filled: Color, remaining: Color) -> drag_bar::Rail {
    drag_bar::Rail {
        backgrounds: (Background::Color(filled), Background::Color(remaining)),
        width: 4.0,
        border: Border {
            radius: 2.0.into(),
            width: 0.0,
            color: Color::TRANSPARENT,
        },
    }
}

/// Build the playback progress bar
///
/// `progress` is the played fraction (0.0 to 1.0)
pub fn view(progress: f32) -> Element<'static, Message> {
    DragBar::new(progress, |event| Message::Pointer(SeekControl::Progress, event))
        .width(Length::Fixed(PROGRESS_WIDTH))
        .height(16)
        .style(|iced_theme, status| drag_bar::Style {
            rail: rail(theme::ACCENT_PINK, theme::divider(iced_theme)),
            handle_radius: handle_radius(status),
            handle_background: Background::Color(theme::ACCENT_PINK),
        })
        .into()
}

/// Build the volume bar
///
/// `volume` is the level (0.0 to 1.0)
pub fn volume_slider(volume: f32) -> Element<'static, Message> {
    DragBar::new(volume, |event| Message::Pointer(SeekControl::Volume, event))
        .width(Length::Fixed(VOLUME_WIDTH))
        .height(16)
        .style(|iced_theme, status| drag_bar::Style {
            rail: rail(theme::text_primary(iced_theme), theme::divider(iced_theme)),
            handle_radius: handle_radius(status),
            handle_background: Background::Color(theme::text_primary(iced_theme)),
        })
        .into()
}
