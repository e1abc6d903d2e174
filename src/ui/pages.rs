//! Pages module
//! Full-page views for the player

pub mod player;

pub use player::PlayerPage;
