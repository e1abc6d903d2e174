//! Player core
//!
//! - `controller`: wires media events, pointer drags and track transitions
//! - `presenter`: display callbacks the controller drives
//! - `session`: state of the loaded track

mod controller;
mod presenter;
mod session;

pub use controller::PlayerController;
pub use presenter::Presenter;
pub use session::PlaybackSession;
