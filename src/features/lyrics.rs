//! Lyrics module - parsing and synchronization
//!
//! - `parser`: LRC text to time-ordered lyric lines
//! - `indexer`: binary search for the active line at a playback position

pub mod indexer;
pub mod parser;

pub use indexer::{HighlightTracker, find_active_index};
pub use parser::{LyricLine, parse_lrc};
