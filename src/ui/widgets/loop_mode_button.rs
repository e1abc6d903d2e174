//! Loop mode button widget
//!
//! Toggle button with tooltip that cycles the loop mode.

use iced::widget::{text, tooltip};
use iced::{Background, Border, Element};

use super::playback_controls::icon_button;
use crate::app::Message;
use crate::features::LoopMode;
use crate::ui::{icons, theme};

fn icon(mode: LoopMode) -> &'static str {
    match mode {
        LoopMode::ListRepeat => icons::LOOP_ALL,
        LoopMode::SingleRepeat => icons::LOOP_ONE,
        LoopMode::Shuffle => icons::SHUFFLE,
        LoopMode::SequentialStop => icons::PLAY_SEQUENTIAL,
    }
}

/// Build the loop mode button with tooltip
pub fn view(mode: LoopMode) -> Element<'static, Message> {
    tooltip(
        icon_button(icon(mode), Message::CycleLoopMode),
        text(mode.display_name()).size(12),
        tooltip::Position::Top,
    )
    .gap(4)
    .style(|iced_theme| iced::widget::container::Style {
        background: Some(Background::Color(theme::surface_container(iced_theme))),
        border: Border {
            radius: 4.0.into(),
            color: theme::divider(iced_theme),
            width: 1.0,
        },
        ..Default::default()
    })
    .into()
}
