//! Core game logic - pure, deterministic, and testable
//!
//! This crate contains the board, the piece catalog, movement rules, the shadow
//! projection, scoring and the game controller. It has **zero dependencies** on UI,
//! networking, or I/O:
//!
//! - **Deterministic**: the same seed and the same command/tick sequence produce
//!   identical games
//! - **Clock-free**: gravity is requested through [`TimerService`]; hosts decide
//!   how ticks are delivered
//! - **Portable**: runs headless, in a terminal, or behind any other host
//!
//! # Module Structure
//!
//! - [`board`]: 12x20 board with collision checks and cascading row clears
//! - [`pieces`]: shape catalog (four rotations per shape, relative cell offsets)
//! - [`piece`]: the active piece and its absolute cells
//! - [`movement`]: shift, fall and rotation with wall correction
//! - [`shadow`]: landing-position projection
//! - [`scoring`]: row rewards and the level-dependent fall interval
//! - [`timer`]: gravity timer interface and a manual implementation
//! - [`session`]: attempt policy and score submission
//! - [`controller`]: the status machine and command processing
//! - [`snapshot`]: read-only view for renderers
//!
//! # Example
//!
//! ```
//! use tourney_tetris_core::GameController;
//! use tourney_tetris_types::{Command, GameStatus};
//!
//! let mut game = GameController::with_seed(12345);
//! game.start();
//!
//! game.apply_command(Command::Right);
//! game.apply_command(Command::Rotate);
//! game.tick();
//!
//! assert_eq!(game.status(), GameStatus::InProgress);
//! ```

pub mod board;
pub mod controller;
pub mod movement;
pub mod piece;
pub mod pieces;
pub mod rng;
pub mod scoring;
pub mod session;
pub mod shadow;
pub mod snapshot;
pub mod timer;

pub use tourney_tetris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, RenderGrid};
pub use controller::GameController;
pub use movement::FallOutcome;
pub use piece::{ActivePiece, PieceCells};
pub use pieces::{bounding_size, get_shape};
pub use rng::{ShapePicker, SimpleRng};
pub use scoring::{clear_and_score, fall_interval_ms, row_score, ClearResult};
pub use session::{ProgressState, ScoreSubmission, SessionConfig};
pub use shadow::ShadowPiece;
pub use snapshot::{ActiveSnapshot, GameSnapshot};
pub use timer::{ManualTimer, TimerId, TimerService};
