//! Presentation callbacks invoked by the player controller
//!
//! Pure rendering side effects; nothing flows back into the controller.

use crate::features::catalog::Track;
use crate::features::lyrics::LyricLine;
use crate::features::playback::LoopMode;

/// Receiver of player display updates
pub trait Presenter {
    /// Render the full track list
    fn render_track_list(&mut self, tracks: &[Track]);

    /// Render the lyric lines of a newly loaded track
    fn render_lyrics(&mut self, lyrics: &[LyricLine]);

    /// Move the highlight marker to a lyric line and scroll it into view
    fn highlight_lyric(&mut self, index: usize);

    /// Mark a track list row as playing or not
    fn set_row_playing(&mut self, index: usize, playing: bool);

    /// Show the play button as "playing" (pause affordance) or not
    fn set_play_button(&mut self, playing: bool);

    /// Current and total time in seconds
    fn set_time_label(&mut self, current: f64, total: f64);

    /// Progress bar fill in `[0, 1]`
    fn set_progress(&mut self, fraction: f32);

    /// Volume bar fill in `[0, 1]`
    fn set_volume(&mut self, fraction: f32);

    fn set_muted_indicator(&mut self, muted: bool);

    /// Song info panel and player bar title
    fn show_track_info(&mut self, track: &Track);

    fn set_loop_mode(&mut self, mode: LoopMode);
}
