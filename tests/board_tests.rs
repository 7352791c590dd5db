//! Board tests - grid access, collision and row clearing

use tourney_tetris::core::Board;
use tourney_tetris::types::{Shape, BOARD_HEIGHT, BOARD_WIDTH, SHADOW_MARKER};

fn fill_row(board: &mut Board, y: i8, shape: Shape) {
    for x in 0..BOARD_WIDTH as i8 {
        board.set(x, y, Some(shape));
    }
}

#[test]
fn test_board_new_empty() {
    let board = Board::new();
    assert_eq!(board.width(), BOARD_WIDTH);
    assert_eq!(board.height(), BOARD_HEIGHT);

    for y in 0..BOARD_HEIGHT as i8 {
        for x in 0..BOARD_WIDTH as i8 {
            assert!(board.is_valid(x, y), "Cell ({}, {}) should be valid", x, y);
            assert_eq!(board.get(x, y), Some(None));
        }
    }
}

#[test]
fn test_board_get_out_of_bounds() {
    let board = Board::new();

    assert_eq!(board.get(-1, 0), None);
    assert_eq!(board.get(0, -1), None);
    assert_eq!(board.get(BOARD_WIDTH as i8, 0), None);
    assert_eq!(board.get(0, BOARD_HEIGHT as i8), None);
}

#[test]
fn test_board_set_and_get() {
    let mut board = Board::new();

    assert!(board.set(5, 10, Some(Shape::T)));
    assert_eq!(board.get(5, 10), Some(Some(Shape::T)));

    assert!(board.set(0, 0, Some(Shape::I)));
    assert_eq!(board.get(0, 0), Some(Some(Shape::I)));

    assert!(board.set(5, 10, None));
    assert_eq!(board.get(5, 10), Some(None));

    assert!(!board.set(-1, 0, Some(Shape::T)));
    assert!(!board.set(0, BOARD_HEIGHT as i8, Some(Shape::T)));
}

#[test]
fn test_out_of_bounds_counts_as_blocked() {
    let mut board = Board::new();
    assert!(!board.is_occupied(5, 10));

    board.set(5, 10, Some(Shape::T));
    assert!(board.is_occupied(5, 10));

    // Walls and floor block like filled cells.
    assert!(board.is_occupied(-1, 0));
    assert!(board.is_occupied(BOARD_WIDTH as i8, 0));
    assert!(board.is_occupied(0, BOARD_HEIGHT as i8));
    assert!(board.is_out_of_bounds(0, BOARD_HEIGHT as i8));
    assert!(!board.is_out_of_bounds(0, 0));
}

#[test]
fn test_can_place_and_lift() {
    let mut board = Board::new();
    let cube = [(3, 5), (4, 5), (3, 6), (4, 6)];
    assert!(board.can_place(&cube));

    board.place(&cube, Shape::Cube);
    assert_eq!(board.filled_count(), 4);
    assert!(!board.can_place(&cube));

    board.lift(&cube);
    assert_eq!(board.filled_count(), 0);

    assert!(!board.can_place(&[(11, 5), (12, 5)]));
}

#[test]
fn test_board_is_row_full() {
    let mut board = Board::new();
    assert!(!board.is_row_full(5));
    assert!(board.is_row_empty(5));

    fill_row(&mut board, 5, Shape::T);
    assert!(board.is_row_full(5));

    for x in 0..BOARD_WIDTH as i8 - 1 {
        board.set(x, 6, Some(Shape::I));
    }
    assert!(!board.is_row_full(6));
    assert!(!board.is_row_empty(6));
}

#[test]
fn test_board_clear_row() {
    let mut board = Board::new();
    fill_row(&mut board, 5, Shape::T);
    board.set(0, 3, Some(Shape::I));
    board.set(1, 4, Some(Shape::Cube));
    board.set(7, 0, Some(Shape::Z));

    assert_eq!(board.clear_row(5), 1);

    assert_eq!(board.get(1, 5), Some(Some(Shape::Cube)));
    assert_eq!(board.get(0, 4), Some(Some(Shape::I)));
    assert_eq!(board.get(0, 3), Some(None));
    // Top row content moves down, a fresh empty row takes its place.
    assert_eq!(board.get(7, 1), Some(Some(Shape::Z)));
    assert!(board.is_row_empty(0));
}

#[test]
fn test_bottom_row_clear_shifts_everything_down() {
    let mut board = Board::new();
    fill_row(&mut board, 19, Shape::L);
    board.set(2, 18, Some(Shape::T));
    board.set(9, 10, Some(Shape::Z));

    let cleared = board.clear_completed_rows();
    assert_eq!(cleared.as_slice(), &[19]);
    assert_eq!(board.get(2, 19), Some(Some(Shape::T)));
    assert_eq!(board.get(9, 11), Some(Some(Shape::Z)));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_cascade_clears_stacked_rows() {
    let mut board = Board::new();
    fill_row(&mut board, 18, Shape::I);
    fill_row(&mut board, 19, Shape::Cube);
    board.set(0, 17, Some(Shape::T));

    let cleared = board.clear_completed_rows();
    // Row 19 goes first, row 18 then drops into 19 and is cleared again.
    assert_eq!(cleared.as_slice(), &[19, 19]);
    assert_eq!(board.get(0, 19), Some(Some(Shape::T)));
    assert_eq!(board.filled_count(), 1);
}

#[test]
fn test_non_adjacent_rows_keep_order() {
    let mut board = Board::new();
    fill_row(&mut board, 19, Shape::I);
    board.set(4, 18, Some(Shape::T));
    fill_row(&mut board, 17, Shape::I);
    board.set(5, 16, Some(Shape::Z));

    let cleared = board.clear_completed_rows();
    assert_eq!(cleared.len(), 2);
    assert_eq!(board.get(4, 19), Some(Some(Shape::T)));
    assert_eq!(board.get(5, 18), Some(Some(Shape::Z)));
    assert_eq!(board.filled_count(), 2);
}

#[test]
fn test_render_grid_uses_shape_ids() {
    let mut board = Board::new();
    board.set(0, 0, Some(Shape::Cube));
    board.set(11, 19, Some(Shape::InverseZ));

    let mut grid = [[SHADOW_MARKER; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
    board.write_render_grid(&mut grid);
    assert_eq!(grid[0][0], 1);
    assert_eq!(grid[19][11], 7);
    assert_eq!(grid[5][5], 0);
}

#[test]
fn test_from_rows_aligns_to_bottom() {
    let mut row = [0u8; BOARD_WIDTH as usize];
    row[0] = 3;
    row[1] = 9;
    let board = Board::from_rows(&[row, [2; BOARD_WIDTH as usize]]);

    assert_eq!(board.get(0, 18), Some(Some(Shape::T)));
    assert_eq!(board.get(1, 18), Some(None));
    assert!(board.is_row_full(19));
    assert_eq!(board.filled_count(), 13);
}
