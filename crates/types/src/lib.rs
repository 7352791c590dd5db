//! Core types module - shared data structures and constants
//!
//! This module defines the fundamental types used throughout the workspace.
//! All types are pure data structures with no external dependencies, making them
//! usable in any context (engine, runtime, input mapping, rendering hosts).
//!
//! # Board Dimensions
//!
//! - **Width**: 12 columns (indexed 0-11)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//! - **Spawn anchor**: (5, 1)
//!
//! # Fall Speed
//!
//! The gravity timer interval depends on the level:
//!
//! | Constant | Value | Description |
//! |----------|-------|-------------|
//! | `GAME_LOWEST_SPEED_MS` | 510 | Interval before any level bonus |
//! | `GAME_HIGHEST_SPEED_MS` | 300 | Fastest interval |
//! | `MAX_LEVEL` | 20 | Levels above this no longer speed up the game |
//!
//! `interval = max(300, 510 - min(level, 20) * 10)`
//!
//! # Examples
//!
//! ```
//! use tourney_tetris_types::{Command, Shape, Rotation, BOARD_WIDTH, BOARD_HEIGHT};
//!
//! let shape = Shape::from_id(2).unwrap();
//! assert_eq!(shape, Shape::I);
//!
//! assert_eq!(Rotation::R3.rotate_cw(), Rotation::R0);
//!
//! assert_eq!(Command::from_str("rotate"), Some(Command::Rotate));
//!
//! assert_eq!(BOARD_WIDTH, 12);
//! assert_eq!(BOARD_HEIGHT, 20);
//! ```

/// Board width in cells (12 columns)
pub const BOARD_WIDTH: u8 = 12;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Spawn anchor column: `floor(W / 2) - 1`
pub const SPAWN_X: i8 = (BOARD_WIDTH / 2) as i8 - 1;

/// Spawn anchor row
pub const SPAWN_Y: i8 = 1;

/// Slowest fall interval in milliseconds, before any level bonus
pub const GAME_LOWEST_SPEED_MS: u32 = 510;

/// Fastest fall interval in milliseconds
pub const GAME_HIGHEST_SPEED_MS: u32 = 300;

/// Levels above this no longer shorten the fall interval
pub const MAX_LEVEL: u32 = 20;

/// Interval reduction per level in milliseconds
pub const LEVEL_SPEEDUP_MS: u32 = 10;

/// Level at the start of every attempt
pub const INITIAL_LEVEL: u32 = 1;

/// Score increment numerator (divided by 100, multiplied by the timer id)
pub const SCORE_INCREMENT_FACTOR: u64 = 100;

/// Number of playable shapes
pub const NUMBER_OF_SHAPES: u8 = 7;

/// Render-grid marker for a shadow cell
pub const SHADOW_MARKER: i8 = -1;

/// Maximum horizontal travel (px) for a touch gesture to count as a sideways swipe
pub const SWIPE_DELTA_PX: i32 = 80;

/// Maximum duration (ms) of a downward swipe
pub const SWIPE_DOWN_TIME_THRESHOLD_MS: u64 = 150;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn spawn_anchor_matches_board_width() {
        assert_eq!(SPAWN_X, 5);
        assert_eq!(SPAWN_Y, 1);
    }

    #[test]
    fn speed_constants() {
        assert_eq!(GAME_LOWEST_SPEED_MS, 510);
        assert_eq!(GAME_HIGHEST_SPEED_MS, 300);
        assert_eq!(MAX_LEVEL, 20);
        assert_eq!(SCORE_INCREMENT_FACTOR, 100);
    }
}

/// The piece shapes of the catalog
///
/// Id 0 is a placeholder that is never spawned; ids 1..=7 are playable:
/// - **Cube** (1): 2x2 square
/// - **I** (2): straight bar
/// - **T** (3)
/// - **InverseL** (4)
/// - **L** (5)
/// - **Z** (6)
/// - **InverseZ** (7)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Shape {
    Placeholder,
    Cube,
    I,
    T,
    InverseL,
    L,
    Z,
    InverseZ,
}

impl Shape {
    /// All playable shapes in id order
    pub const PLAYABLE: [Shape; NUMBER_OF_SHAPES as usize] = [
        Shape::Cube,
        Shape::I,
        Shape::T,
        Shape::InverseL,
        Shape::L,
        Shape::Z,
        Shape::InverseZ,
    ];

    /// Numeric shape id (0..=7)
    pub fn id(self) -> u8 {
        match self {
            Shape::Placeholder => 0,
            Shape::Cube => 1,
            Shape::I => 2,
            Shape::T => 3,
            Shape::InverseL => 4,
            Shape::L => 5,
            Shape::Z => 6,
            Shape::InverseZ => 7,
        }
    }

    /// Shape from its numeric id
    ///
    /// # Examples
    ///
    /// ```
    /// use tourney_tetris_types::Shape;
    ///
    /// assert_eq!(Shape::from_id(1), Some(Shape::Cube));
    /// assert_eq!(Shape::from_id(0), Some(Shape::Placeholder));
    /// assert_eq!(Shape::from_id(8), None);
    /// ```
    pub fn from_id(id: u8) -> Option<Self> {
        match id {
            0 => Some(Shape::Placeholder),
            1 => Some(Shape::Cube),
            2 => Some(Shape::I),
            3 => Some(Shape::T),
            4 => Some(Shape::InverseL),
            5 => Some(Shape::L),
            6 => Some(Shape::Z),
            7 => Some(Shape::InverseZ),
            _ => None,
        }
    }

    pub fn is_playable(self) -> bool {
        self != Shape::Placeholder
    }

    /// Parse shape from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "placeholder" => Some(Shape::Placeholder),
            "cube" | "o" => Some(Shape::Cube),
            "i" => Some(Shape::I),
            "t" => Some(Shape::T),
            "inverse_l" | "j" => Some(Shape::InverseL),
            "l" => Some(Shape::L),
            "z" => Some(Shape::Z),
            "inverse_z" | "s" => Some(Shape::InverseZ),
            _ => None,
        }
    }

    /// Convert to lowercase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Shape::Placeholder => "placeholder",
            Shape::Cube => "cube",
            Shape::I => "i",
            Shape::T => "t",
            Shape::InverseL => "inverse_l",
            Shape::L => "l",
            Shape::Z => "z",
            Shape::InverseZ => "inverse_z",
        }
    }
}

/// Rotation state index (0..=3)
///
/// Each catalog entry defines one cell layout per state. Rotating always advances
/// to the next state: R0 → R1 → R2 → R3 → R0.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Rotation {
    R0,
    R1,
    R2,
    R3,
}

impl Rotation {
    /// Advance to the next rotation state
    ///
    /// # Examples
    ///
    /// ```
    /// use tourney_tetris_types::Rotation;
    ///
    /// assert_eq!(Rotation::R0.rotate_cw(), Rotation::R1);
    /// assert_eq!(Rotation::R3.rotate_cw(), Rotation::R0);
    /// ```
    pub fn rotate_cw(&self) -> Self {
        match self {
            Rotation::R0 => Rotation::R1,
            Rotation::R1 => Rotation::R2,
            Rotation::R2 => Rotation::R3,
            Rotation::R3 => Rotation::R0,
        }
    }

    pub fn index(self) -> usize {
        match self {
            Rotation::R0 => 0,
            Rotation::R1 => 1,
            Rotation::R2 => 2,
            Rotation::R3 => 3,
        }
    }

    pub fn from_index(index: usize) -> Option<Self> {
        match index {
            0 => Some(Rotation::R0),
            1 => Some(Rotation::R1),
            2 => Some(Rotation::R2),
            3 => Some(Rotation::R3),
            _ => None,
        }
    }
}

/// Discrete commands consumed by the game controller
///
/// Both player input and the gravity timer are expressed as commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Command {
    /// Move piece one column left
    Left,
    /// Move piece one column right
    Right,
    /// Move piece one row down, locking it when blocked
    Down,
    /// Advance to the next rotation state
    Rotate,
    /// Switch between InProgress and Paused
    TogglePause,
}

impl Command {
    /// Parse command from string (case-insensitive)
    ///
    /// Unknown names are malformed input and yield `None`.
    ///
    /// # Examples
    ///
    /// ```
    /// use tourney_tetris_types::Command;
    ///
    /// assert_eq!(Command::from_str("Left"), Some(Command::Left));
    /// assert_eq!(Command::from_str("togglePause"), Some(Command::TogglePause));
    /// assert_eq!(Command::from_str("hardDrop"), None);
    /// ```
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "left" => Some(Command::Left),
            "right" => Some(Command::Right),
            "down" => Some(Command::Down),
            "rotate" => Some(Command::Rotate),
            "togglepause" | "pause" => Some(Command::TogglePause),
            _ => None,
        }
    }

    /// Convert to camelCase string
    pub fn as_str(&self) -> &'static str {
        match self {
            Command::Left => "left",
            Command::Right => "right",
            Command::Down => "down",
            Command::Rotate => "rotate",
            Command::TogglePause => "togglePause",
        }
    }
}

/// Overall game status
///
/// - `NotStarted` → `InProgress` on explicit start
/// - `InProgress` ⇄ `Paused` on pause toggle
/// - `InProgress` → `End` when a spawned piece overlaps the stack
/// - any → `Expired` when the enclosing session expires
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum GameStatus {
    #[default]
    NotStarted,
    InProgress,
    Paused,
    End,
    Expired,
}

impl GameStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            GameStatus::NotStarted => "notStarted",
            GameStatus::InProgress => "inProgress",
            GameStatus::Paused => "paused",
            GameStatus::End => "end",
            GameStatus::Expired => "expired",
        }
    }

    /// Whether the game can never resume without a reset
    pub fn is_terminal(&self) -> bool {
        matches!(self, GameStatus::End | GameStatus::Expired)
    }
}

/// Core-side event emitted after a piece locks.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub rows_cleared: u32,
    pub score_gained: u64,
    pub level: u32,
    pub fall_interval_ms: u32,
}

/// A cell on the game board
///
/// - `None`: Empty cell
/// - `Some(Shape)`: Cell occupied by a piece of the given shape
///
/// The shadow marker only exists in render grids, never on the board.
pub type Cell = Option<Shape>;

/// Render-grid value of a board cell (0 empty, else the shape id)
pub fn cell_id(cell: Cell) -> i8 {
    cell.map_or(0, |shape| shape.id() as i8)
}
