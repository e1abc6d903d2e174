//! Reusable UI widgets
//!
//! Widgets combine basic iced elements into reusable UI patterns. They hold no
//! player state; everything they show is passed in by the page.

pub mod drag_bar;
pub mod loop_mode_button;
pub mod playback_controls;
pub mod progress_slider;
