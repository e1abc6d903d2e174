//! Feature modules - business logic separated from UI
//!
//! Each feature module contains the core logic for a specific functionality.
//! Features should not depend on UI components directly.

pub mod catalog;
pub mod lyrics;
pub mod playback;
pub mod player;
pub mod seek;
pub mod settings;

pub use catalog::{Catalog, Track};
pub use playback::{LoopMode, PlaybackStateMachine, SkipDirection};
pub use player::{PlayerController, Presenter};
pub use seek::{PointerEvent, SeekControl};
pub use settings::Settings;
