//! Shadow module - ghost piece projection
//!
//! The shadow shows where the active piece would come to rest. The piece's cells
//! are grouped by row; a candidate landing row is accepted when every column of
//! every group is empty from the candidate cell all the way up to row 0. Rows are
//! scanned from the bottom, so the first accepted row is the landing.
//!
//! The projection is suppressed while the landing is within the piece's own row
//! span, which keeps the ghost from overlapping the live piece.

use arrayvec::ArrayVec;

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::types::BOARD_HEIGHT;

/// Absolute shadow cells (empty when there is nothing to draw)
pub type ShadowPiece = ArrayVec<(i8, i8), 4>;

/// Cells of one row of the piece
#[derive(Debug, Clone)]
struct Level {
    y: i8,
    columns: ArrayVec<i8, 4>,
}

/// Group piece cells by row, deepest row first
fn levels(piece: &ActivePiece) -> ArrayVec<Level, 4> {
    let mut cells = piece.cells();
    cells.sort_by(|a, b| b.1.cmp(&a.1));

    let mut out: ArrayVec<Level, 4> = ArrayVec::new();
    for (x, y) in cells {
        match out.iter_mut().find(|level| level.y == y) {
            Some(level) => level.columns.push(x),
            None => {
                let mut columns = ArrayVec::new();
                columns.push(x);
                out.push(Level { y, columns });
            }
        }
    }
    out
}

/// Column `x` is empty from row `y` up to the top
fn column_clear_above(board: &Board, x: i8, y: i8) -> bool {
    (0..=y).all(|row| board.is_valid(x, row))
}

/// Project the landing cells of `piece`
///
/// `board` must not contain the piece itself.
pub fn project(board: &Board, piece: &ActivePiece) -> ShadowPiece {
    let levels = levels(piece);
    let span = levels.len() as i8;

    for row in (0..BOARD_HEIGHT as i8).rev() {
        let mut shadow = ShadowPiece::new();
        let mut landed = true;

        for (depth, level) in levels.iter().enumerate() {
            let target = row - depth as i8;
            if target - level.y <= span {
                // Too close to the piece: every row above is closer still.
                return ShadowPiece::new();
            }
            if !level
                .columns
                .iter()
                .all(|&x| column_clear_above(board, x, target))
            {
                landed = false;
                break;
            }
            for &x in &level.columns {
                shadow.push((x, target));
            }
        }

        if landed {
            return shadow;
        }
    }

    ShadowPiece::new()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Rotation, Shape};

    #[test]
    fn test_cube_on_empty_board_lands_on_floor() {
        let board = Board::new();
        let piece = ActivePiece::spawn(Shape::Cube);
        let shadow = project(&board, &piece);
        let mut cells = shadow.to_vec();
        cells.sort();
        assert_eq!(cells, vec![(5, 18), (5, 19), (6, 18), (6, 19)]);
    }

    #[test]
    fn test_shadow_rests_on_highest_block_in_column() {
        let mut board = Board::new();
        board.set(6, 10, Some(Shape::T));
        let piece = ActivePiece::spawn(Shape::Cube);
        let mut cells = project(&board, &piece).to_vec();
        cells.sort();
        assert_eq!(cells, vec![(5, 8), (5, 9), (6, 8), (6, 9)]);
    }

    #[test]
    fn test_shadow_keeps_piece_layout() {
        // T in R0: stem column 5 spans rows 0..=2, nub at (6, 1).
        let board = Board::new();
        let piece = ActivePiece::spawn(Shape::T);
        let mut cells = project(&board, &piece).to_vec();
        cells.sort();
        assert_eq!(cells, vec![(5, 17), (5, 18), (5, 19), (6, 18)]);
    }

    #[test]
    fn test_shadow_hidden_near_landing() {
        let board = Board::new();
        let piece = ActivePiece::new(Shape::Cube, Rotation::R0, 5, 16);
        assert!(project(&board, &piece).is_empty());
        let higher = ActivePiece::new(Shape::Cube, Rotation::R0, 5, 15);
        assert_eq!(project(&board, &higher).len(), 4);
    }

    #[test]
    fn test_projection_is_idempotent() {
        let mut board = Board::new();
        board.set(3, 12, Some(Shape::L));
        let piece = ActivePiece::new(Shape::InverseL, Rotation::R1, 4, 3);
        assert_eq!(project(&board, &piece), project(&board, &piece));
    }
}
