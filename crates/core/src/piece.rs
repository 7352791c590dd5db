//! Active piece - the tetromino under player and gravity control

use crate::board::Board;
use crate::pieces::{bounding_size, get_shape};
use crate::types::{Rotation, Shape, SPAWN_X, SPAWN_Y};

/// Absolute board cells of a piece
pub type PieceCells = [(i8, i8); 4];

/// Active falling piece
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Shape,
    pub rotation: Rotation,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Create a new piece at the spawn anchor
    pub fn spawn(shape: Shape) -> Self {
        Self {
            shape,
            rotation: Rotation::R0,
            x: SPAWN_X,
            y: SPAWN_Y,
        }
    }

    pub fn new(shape: Shape, rotation: Rotation, x: i8, y: i8) -> Self {
        Self {
            shape,
            rotation,
            x,
            y,
        }
    }

    /// Absolute cells for the current rotation and anchor
    pub fn cells(&self) -> PieceCells {
        let mut out = get_shape(self.shape, self.rotation);
        for cell in &mut out {
            cell.0 += self.x;
            cell.1 += self.y;
        }
        out
    }

    /// Check if all cells are inside the board and empty
    pub fn fits(&self, board: &Board) -> bool {
        board.can_place(&self.cells())
    }

    /// Bounding box `(width, height)` of the current rotation
    pub fn bounding_size(&self) -> (i8, i8) {
        bounding_size(self.shape, self.rotation)
    }

    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }
}
