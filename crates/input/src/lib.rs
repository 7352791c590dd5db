//! Input module (engine-facing).
//!
//! Maps host input into [`crate::types::Command`] values. Terminal key events come
//! from `crossterm`; touch gestures go through [`SwipeTracker`], which needs no UI
//! framework at all. Neither mapper touches the game: the host forwards the
//! resulting commands to the controller.

pub mod map;
pub mod swipe;

pub use tourney_tetris_types as types;

pub use map::{handle_key_event, should_quit, should_reset};
pub use swipe::SwipeTracker;
