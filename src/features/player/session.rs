//! Per-track playback session

use crate::features::catalog::Track;
use crate::features::lyrics::{HighlightTracker, LyricLine, parse_lrc};

/// State tied to the loaded track
///
/// Built in one step from a catalog entry and swapped in whole, so a tick
/// never sees lyrics of one track with the duration of another.
#[derive(Debug, Clone, Default)]
pub struct PlaybackSession {
    track_index: usize,
    lyrics: Vec<LyricLine>,
    duration: f64,
    highlight: HighlightTracker,
}

impl PlaybackSession {
    pub fn new(track_index: usize, track: &Track) -> Self {
        Self {
            track_index,
            lyrics: parse_lrc(&track.lyrics),
            duration: track.duration_secs(),
            highlight: HighlightTracker::default(),
        }
    }

    pub fn track_index(&self) -> usize {
        self.track_index
    }

    pub fn lyrics(&self) -> &[LyricLine] {
        &self.lyrics
    }

    /// Track duration in seconds, never negative
    pub fn duration(&self) -> f64 {
        self.duration
    }

    /// Last highlighted lyric line
    pub fn highlighted(&self) -> Option<usize> {
        self.highlight.current()
    }

    /// Progress fraction for a playback position
    pub fn fraction_at(&self, position: f64) -> f32 {
        if self.duration > 0.0 {
            (position / self.duration).clamp(0.0, 1.0) as f32
        } else {
            0.0
        }
    }

    /// Move the highlight to `position`, returning the new line on change
    pub fn update_highlight(&mut self, position: f64) -> Option<usize> {
        self.highlight.update(&self.lyrics, position)
    }
}
