//! Read-only view of the game handed to the renderer after every event.

use crate::board::RenderGrid;
use crate::piece::{ActivePiece, PieceCells};
use crate::shadow::ShadowPiece;
use crate::types::{
    GameStatus, Rotation, Shape, BOARD_HEIGHT, BOARD_WIDTH, INITIAL_LEVEL, SHADOW_MARKER,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActiveSnapshot {
    pub shape: Shape,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
    pub cells: PieceCells,
}

impl From<ActivePiece> for ActiveSnapshot {
    fn from(value: ActivePiece) -> Self {
        Self {
            shape: value.shape,
            rotation: value.rotation,
            x: value.x,
            y: value.y,
            cells: value.cells(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameSnapshot {
    /// Board cells (live piece included) with empty shadow cells set to `-1`
    pub grid: RenderGrid,
    pub shadow: ShadowPiece,
    pub active: Option<ActiveSnapshot>,
    pub status: GameStatus,
    pub score: u64,
    pub level: u32,
    pub lines: u32,
    pub fall_interval_ms: u32,
    pub timer_id: u32,
    pub piece_id: u32,
    pub seed: u32,
    pub has_focus: bool,
    pub previous_score: Option<u64>,
    pub multiple_attempts: bool,
}

impl GameSnapshot {
    pub fn clear(&mut self) {
        self.grid = [[0i8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        self.shadow.clear();
        self.active = None;
        self.status = GameStatus::NotStarted;
        self.score = 0;
        self.level = INITIAL_LEVEL;
        self.lines = 0;
        self.fall_interval_ms = 0;
        self.timer_id = 0;
        self.piece_id = 0;
        self.seed = 0;
        self.has_focus = true;
        self.previous_score = None;
        self.multiple_attempts = true;
    }

    /// Mark empty shadow cells in the render grid
    pub fn overlay_shadow(&mut self) {
        for &(x, y) in &self.shadow {
            let slot = &mut self.grid[y as usize][x as usize];
            if *slot == 0 {
                *slot = SHADOW_MARKER;
            }
        }
    }

    pub fn playable(&self) -> bool {
        self.status == GameStatus::InProgress && self.has_focus
    }

    /// Whether a start request would begin a new attempt
    pub fn can_start(&self) -> bool {
        self.status == GameStatus::NotStarted
            && (self.previous_score.is_none() || self.multiple_attempts)
    }

    /// Render-grid value at `(x, y)`; `None` outside the board
    pub fn cell(&self, x: i8, y: i8) -> Option<i8> {
        if x < 0 || y < 0 {
            return None;
        }
        self.grid
            .get(y as usize)
            .and_then(|row| row.get(x as usize))
            .copied()
    }
}

impl Default for GameSnapshot {
    fn default() -> Self {
        let mut s = Self {
            grid: [[0i8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize],
            shadow: ShadowPiece::new(),
            active: None,
            status: GameStatus::NotStarted,
            score: 0,
            level: INITIAL_LEVEL,
            lines: 0,
            fall_interval_ms: 0,
            timer_id: 0,
            piece_id: 0,
            seed: 0,
            has_focus: true,
            previous_score: None,
            multiple_attempts: true,
        };
        s.clear();
        s
    }
}
