//! Application messages

use iced::keyboard::{Key, Modifiers};

use crate::features::{PointerEvent, SeekControl};

/// Application messages
#[derive(Debug, Clone)]
pub enum Message {
    // ============ Playback controls ============
    /// Toggle play/pause
    TogglePlayback,
    /// Play next song
    NextSong,
    /// Play previous song
    PrevSong,
    /// Track list row clicked
    SelectTrack(usize),
    /// Cycle to next loop mode
    CycleLoopMode,
    /// Toggle muted flag
    ToggleMute,
    /// Pointer input on the progress or volume bar
    Pointer(SeekControl, PointerEvent),
    /// Abort an active drag
    CancelDrag,
    /// Playback tick (drains media events)
    PlaybackTick,

    // ============ Keyboard events ============
    /// Keyboard key pressed
    KeyPressed(Key, Modifiers),
}
