//! Media resource capability set
//!
//! The player core drives playback only through [`MediaResource`], so any
//! backend exposing play/pause, position, volume, mute and the two playback
//! events can stand in for the rodio one.

use std::path::Path;

/// Notification drained from a media resource
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum MediaEvent {
    /// Playback position in seconds
    PositionChanged(f64),
    /// The loaded track played to its end
    Ended,
}

/// Playback primitive used by the player controller
pub trait MediaResource {
    /// Replace the current source; the new source starts paused at 0
    fn load(&mut self, path: &Path) -> anyhow::Result<()>;

    fn play(&mut self);

    fn pause(&mut self);

    fn is_paused(&self) -> bool;

    /// Current position in seconds
    fn position(&self) -> f64;

    fn set_position(&mut self, seconds: f64);

    /// Volume in `[0, 1]`, independent of the muted flag
    fn volume(&self) -> f32;

    fn set_volume(&mut self, volume: f32);

    fn is_muted(&self) -> bool;

    fn set_muted(&mut self, muted: bool);

    /// Drain events produced since the last call
    fn poll_events(&mut self) -> Vec<MediaEvent>;
}
