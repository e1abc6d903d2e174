//! UI layer - iced views, widgets and styling

pub mod icons;
pub mod pages;
pub mod theme;
pub mod widgets;
