//! Audio playback module
//!
//! - `MediaResource`: capability set the player core drives
//! - `RodioMedia`: rodio-backed implementation used by the application

mod media;
mod player;

pub use media::{MediaEvent, MediaResource};
pub use player::RodioMedia;
