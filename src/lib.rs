//! Tourney Tetris (workspace facade crate).
//!
//! Re-exports the workspace crates as `tourney_tetris::{types,core,input,adapter}`
//! and adds [`view`], the text view used by the terminal binary.

pub use tourney_tetris_adapter as adapter;
pub use tourney_tetris_core as core;
pub use tourney_tetris_input as input;
pub use tourney_tetris_types as types;

pub mod view;
