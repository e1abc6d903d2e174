//! Theme system for the player
//! Supports both dark and light modes with consistent color palette

use iced::color;
use iced::widget::{button, container, scrollable};
use iced::{Background, Border, Color, Shadow, Theme};

// ============================================================================
// Color Palette - Dynamic based on theme
// ============================================================================

/// Check if theme is dark mode
fn is_dark(theme: &Theme) -> bool {
    matches!(
        theme,
        Theme::Dark
            | Theme::Dracula
            | Theme::Nord
            | Theme::SolarizedDark
            | Theme::GruvboxDark
            | Theme::CatppuccinMocha
            | Theme::TokyoNight
            | Theme::TokyoNightStorm
            | Theme::KanagawaWave
            | Theme::KanagawaDragon
            | Theme::Moonfly
            | Theme::Nightfly
            | Theme::Oxocarbon
    )
}

// Dark mode colors
mod dark {
    use super::*;
    pub const BACKGROUND: Color = color!(0x000000);
    pub const SIDEBAR: Color = color!(0x121212);
    pub const SURFACE: Color = color!(0x1a1a1a);
    pub const BORDER: Color = color!(0x282828);
    pub const TEXT_MUTED: Color = color!(0x888888);
    pub const TEXT_SECONDARY: Color = color!(0xb3b3b3);
    pub const TEXT_PRIMARY: Color = color!(0xffffff);
}

// Light mode colors
mod light {
    use super::*;
    pub const BACKGROUND: Color = color!(0xffffff);
    pub const SIDEBAR: Color = color!(0xf5f5f5);
    pub const SURFACE: Color = color!(0xeeeeee);
    pub const BORDER: Color = color!(0xdddddd);
    pub const TEXT_MUTED: Color = color!(0x777777);
    pub const TEXT_SECONDARY: Color = color!(0x555555);
    pub const TEXT_PRIMARY: Color = color!(0x1a1a1a);
}

/// Get background color based on theme
pub fn background(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BACKGROUND
    } else {
        light::BACKGROUND
    }
}

/// Get sidebar color based on theme
pub fn sidebar_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SIDEBAR
    } else {
        light::SIDEBAR
    }
}

/// Get surface color based on theme
pub fn surface(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::SURFACE
    } else {
        light::SURFACE
    }
}

/// Get border color based on theme
pub fn border_color(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::BORDER
    } else {
        light::BORDER
    }
}

/// Get muted text color based on theme
pub fn text_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_MUTED
    } else {
        light::TEXT_MUTED
    }
}

/// Get secondary text color based on theme
pub fn text_secondary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_SECONDARY
    } else {
        light::TEXT_SECONDARY
    }
}

/// Get primary text color based on theme
pub fn text_primary(theme: &Theme) -> Color {
    if is_dark(theme) {
        dark::TEXT_PRIMARY
    } else {
        light::TEXT_PRIMARY
    }
}

/// Neon pink accent color (same for both modes)
pub const ACCENT_PINK: Color = color!(0xff1493);

// ============================================================================
// Container Styles
// ============================================================================

/// Main content area background
pub fn main_content(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(background(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Song info side panel
pub fn sidebar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(sidebar_bg(theme))),
        text_color: Some(text_primary(theme)),
        ..Default::default()
    }
}

/// Player bar along the bottom edge
pub fn player_bar(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(player_bar_bg(theme))),
        text_color: Some(text_primary(theme)),
        border: Border {
            width: 1.0,
            color: divider(theme),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Track list row, highlighted while its track plays
pub fn track_row(theme: &Theme, playing: bool) -> container::Style {
    container::Style {
        background: playing.then(|| Background::Color(hover_bg_alpha(theme, 0.08))),
        text_color: Some(if playing {
            ACCENT_PINK
        } else {
            text_primary(theme)
        }),
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Cover placeholder in the song info panel
pub fn cover_placeholder(theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(placeholder_bg(theme))),
        text_color: Some(text_muted(theme)),
        border: Border {
            radius: 8.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

// ============================================================================
// Button Styles
// ============================================================================

/// Icon button (circular)
pub fn icon_button(theme: &Theme, status: button::Status) -> button::Style {
    let base = button::Style {
        background: Some(Background::Color(Color::TRANSPARENT)),
        text_color: text_secondary(theme),
        border: Border {
            radius: 50.0.into(),
            ..Default::default()
        },
        ..Default::default()
    };

    match status {
        button::Status::Hovered => button::Style {
            background: Some(Background::Color(surface(theme))),
            text_color: text_primary(theme),
            ..base
        },
        _ => base,
    }
}

/// Transparent row button in the track list
pub fn row_button(theme: &Theme, status: button::Status) -> button::Style {
    let bg = match status {
        button::Status::Hovered => hover_bg(theme),
        _ => Color::TRANSPARENT,
    };
    button::Style {
        background: Some(Background::Color(bg)),
        text_color: text_primary(theme),
        border: Border {
            radius: 6.0.into(),
            ..Default::default()
        },
        ..Default::default()
    }
}

/// Hover background color based on theme
pub fn hover_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.12)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.08)
    }
}

/// Play button hover color - slightly lighter/darker than text_primary
pub fn play_button_hover(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.9, 0.9, 0.9)
    } else {
        Color::from_rgb(0.25, 0.25, 0.25)
    }
}

/// Surface container color (for tooltips, panels)
pub fn surface_container(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.15, 0.15, 0.15)
    } else {
        Color::from_rgb(0.92, 0.92, 0.92)
    }
}

/// Divider/separator color
pub fn divider(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.1)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.1)
    }
}

// ============================================================================
// Scrollable Styles
// ============================================================================

/// Scrollbar style for the track list
pub fn dark_scrollable(theme: &Theme, _status: scrollable::Status) -> scrollable::Style {
    let scrollbar = scrollable::Rail {
        background: Some(Background::Color(Color::TRANSPARENT)),
        border: Border::default(),
        scroller: scrollable::Scroller {
            background: Background::Color(border_color(theme)),
            border: Border {
                radius: 4.0.into(),
                ..Default::default()
            },
        },
    };

    scrollable::Style {
        container: container::Style::default(),
        vertical_rail: scrollbar.clone(),
        horizontal_rail: scrollbar,
        gap: None,
        auto_scroll: scrollable::AutoScroll {
            background: Background::Color(surface(theme)),
            border: Border::default(),
            shadow: Shadow::default(),
            icon: text_muted(theme),
        },
    }
}

// ============================================================================
// Theme-aware color helpers for components
// ============================================================================

/// Placeholder background (for missing covers, etc.)
pub fn placeholder_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.18, 0.18, 0.18)
    } else {
        Color::from_rgb(0.9, 0.9, 0.9)
    }
}

/// Player bar background
pub fn player_bar_bg(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgb(0.08, 0.08, 0.08)
    } else {
        Color::from_rgb(0.95, 0.95, 0.95)
    }
}

/// Dimmed text color (for indices, durations)
pub fn dimmed_text(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.5)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.6)
    }
}

/// Icon color (muted)
pub fn icon_muted(theme: &Theme) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, 0.4)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, 0.4)
    }
}

/// Hover background with alpha
pub fn hover_bg_alpha(theme: &Theme, alpha: f32) -> Color {
    if is_dark(theme) {
        Color::from_rgba(1.0, 1.0, 1.0, alpha)
    } else {
        Color::from_rgba(0.0, 0.0, 0.0, alpha * 0.7)
    }
}

/// Lyric line color, accent for the highlighted line
pub fn lyric_text(theme: &Theme, active: bool) -> Color {
    if active {
        ACCENT_PINK
    } else {
        dimmed_text(theme)
    }
}
