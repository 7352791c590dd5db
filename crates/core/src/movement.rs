//! Movement module - translation, rotation and gravity against the board
//!
//! Every function takes the board with the active piece already lifted out, so a
//! piece never collides with its own previous cells. Rejected requests return
//! `None` and leave the caller's piece untouched.

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::types::{Shape, BOARD_WIDTH};

/// Result of a gravity step
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FallOutcome {
    /// Piece moved one row down
    Fell(ActivePiece),
    /// Piece is resting and must lock where it is
    Landed,
}

/// Try to move the piece horizontally by `dx` columns
pub fn shift(board: &Board, piece: &ActivePiece, dx: i8) -> Option<ActivePiece> {
    let moved = piece.shifted(dx, 0);
    moved.fits(board).then_some(moved)
}

/// Try a gravity step
pub fn fall(board: &Board, piece: &ActivePiece) -> FallOutcome {
    let moved = piece.shifted(0, 1);
    if moved.fits(board) {
        FallOutcome::Fell(moved)
    } else {
        FallOutcome::Landed
    }
}

/// Try to advance the piece to its next rotation state
///
/// Tall pieces (bounding height greater than width in the current state) that
/// touch a wall after turning are pushed away from it by their bounding width:
/// right when a cell lands on column 0, left when a cell lands on column `W`.
/// The I bar is pushed one extra column left. The corrected placement must still
/// fit, otherwise the rotation is rejected.
pub fn rotate(board: &Board, piece: &ActivePiece) -> Option<ActivePiece> {
    let mut turned = ActivePiece {
        rotation: piece.rotation.rotate_cw(),
        ..*piece
    };
    let cells = turned.cells();

    let touches_left = cells.iter().any(|&(x, _)| x == 0);
    let touches_right = cells.iter().any(|&(x, _)| x == BOARD_WIDTH as i8);
    let (width, height) = piece.bounding_size();
    let tall = height > width;

    if touches_left && tall {
        turned.x += width;
    }
    if touches_right && tall {
        turned.x -= width;
        if turned.shape == Shape::I {
            turned.x -= 1;
        }
    }

    turned.fits(board).then_some(turned)
}
