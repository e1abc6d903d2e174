//! Playback control widgets
//!
//! Previous, play/pause and next buttons for the player bar.

use iced::widget::{Space, button, container, row, svg};
use iced::{Alignment, Element, Padding};

use crate::app::Message;
use crate::ui::{icons, theme};

const PLAY_BUTTON_SIZE: f32 = 40.0;
const PLAY_ICON_SIZE: f32 = 18.0;
const SKIP_ICON_SIZE: f32 = 20.0;
const SKIP_PADDING: f32 = 8.0;
const SPACING: f32 = 8.0;

/// Build the play/pause button
///
/// `is_playing` selects the pause icon.
pub fn play_button(is_playing: bool) -> Element<'static, Message> {
    let play_icon = if is_playing { icons::PAUSE } else { icons::PLAY };

    let inner_padding = (PLAY_BUTTON_SIZE - PLAY_ICON_SIZE) / 2.0;
    // The play triangle is not symmetric
    let offset = if is_playing { 0.0 } else { 2.0 };

    button(
        container(
            svg(svg::Handle::from_memory(play_icon.as_bytes()))
                .width(PLAY_ICON_SIZE)
                .height(PLAY_ICON_SIZE)
                .style(|theme, _status| svg::Style {
                    color: Some(theme::background(theme)),
                }),
        )
        .padding(Padding {
            top: inner_padding,
            bottom: inner_padding,
            left: inner_padding + offset,
            right: inner_padding - offset,
        }),
    )
    .padding(0)
    .width(PLAY_BUTTON_SIZE)
    .height(PLAY_BUTTON_SIZE)
    .style(|theme, status| {
        let bg = match status {
            button::Status::Hovered => theme::play_button_hover(theme),
            _ => theme::text_primary(theme),
        };
        button::Style {
            background: Some(iced::Background::Color(bg)),
            border: iced::Border {
                radius: (PLAY_BUTTON_SIZE / 2.0).into(),
                ..Default::default()
            },
            ..Default::default()
        }
    })
    .on_press(Message::TogglePlayback)
    .into()
}

/// Small round icon button used for skip, loop and mute
pub fn icon_button(icon: &'static str, on_press: Message) -> button::Button<'static, Message> {
    button(
        svg(svg::Handle::from_memory(icon.as_bytes()))
            .width(SKIP_ICON_SIZE)
            .height(SKIP_ICON_SIZE)
            .style(|theme, _status| svg::Style {
                color: Some(theme::text_secondary(theme)),
            }),
    )
    .padding(SKIP_PADDING)
    .style(theme::icon_button)
    .on_press(on_press)
}

/// Build the complete playback controls row (prev, play, next)
pub fn view(is_playing: bool) -> Element<'static, Message> {
    row![
        icon_button(icons::SKIP_PREV, Message::PrevSong),
        Space::new().width(SPACING),
        play_button(is_playing),
        Space::new().width(SPACING),
        icon_button(icons::SKIP_NEXT, Message::NextSong),
    ]
    .align_y(Alignment::Center)
    .into()
}

/// Build the mute toggle
pub fn mute_button(muted: bool) -> Element<'static, Message> {
    let icon = if muted {
        icons::VOLUME_MUTED
    } else {
        icons::VOLUME
    };
    icon_button(icon, Message::ToggleMute).into()
}
