//! Board module - manages the game grid
//!
//! The board is a 12x20 grid where each cell can be empty or hold a shape.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..11 (left to right), y ranges 0..19 (top to bottom)
//!
//! The live piece is written into the board like any placed cell; callers lift it
//! out before testing a move so the piece never collides with itself.

use arrayvec::ArrayVec;

use crate::types::{cell_id, Cell, Shape, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row-major render grid (`0` empty, shape id otherwise)
pub type RenderGrid = [[i8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// Row indices removed by a single clearing pass
pub type ClearedRows = ArrayVec<u8, { BOARD_HEIGHT as usize }>;

/// The game board - 12 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq)]
pub struct Board {
    /// Flat array of cells, row-major order (y * WIDTH + x)
    cells: [Cell; BOARD_SIZE],
}

impl Board {
    /// Create a new empty board
    pub fn new() -> Self {
        Self {
            cells: [None; BOARD_SIZE],
        }
    }

    /// Calculate flat index from (x, y) coordinates
    #[inline(always)]
    fn index(x: i8, y: i8) -> Option<usize> {
        if x < 0 || x >= BOARD_WIDTH as i8 || y < 0 || y >= BOARD_HEIGHT as i8 {
            return None;
        }
        Some((y as usize) * (BOARD_WIDTH as usize) + (x as usize))
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Set cell at position (x, y)
    /// Returns false if out of bounds
    pub fn set(&mut self, x: i8, y: i8, cell: Cell) -> bool {
        match Self::index(x, y) {
            Some(idx) => {
                self.cells[idx] = cell;
                true
            }
            None => false,
        }
    }

    /// Check if position is valid (within bounds and empty)
    pub fn is_valid(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(None))
    }

    /// Check if position is blocked: filled, or outside the grid
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        !self.is_valid(x, y)
    }

    /// Check if position is out of bounds
    pub fn is_out_of_bounds(&self, x: i8, y: i8) -> bool {
        Self::index(x, y).is_none()
    }

    /// Check if a row is completely filled
    pub fn is_row_full(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_some())
    }

    /// Check if a row has no filled cell
    pub fn is_row_empty(&self, y: usize) -> bool {
        if y >= BOARD_HEIGHT as usize {
            return false;
        }
        let start = y * BOARD_WIDTH as usize;
        let end = start + BOARD_WIDTH as usize;
        self.cells[start..end].iter().all(|cell| cell.is_none())
    }

    /// Clear a row and shift all rows above down
    /// Returns the number of lines cleared (1 or 0)
    pub fn clear_row(&mut self, y: usize) -> usize {
        if y >= BOARD_HEIGHT as usize {
            return 0;
        }

        let width = BOARD_WIDTH as usize;

        // copy_within handles the overlapping ranges
        for row in (1..=y).rev() {
            let src_start = (row - 1) * width;
            let dst_start = row * width;
            self.cells
                .copy_within(src_start..src_start + width, dst_start);
        }

        for cell in &mut self.cells[0..width] {
            *cell = None;
        }

        1
    }

    /// Remove every complete row, bottom to top
    ///
    /// After each removal the scan restarts from the bottom so rows that were
    /// shifted down are evaluated again. Returns the removed row indices in
    /// removal order (an index may repeat when stacked rows were complete).
    pub fn clear_completed_rows(&mut self) -> ClearedRows {
        let mut cleared = ClearedRows::new();
        'scan: loop {
            for y in (0..BOARD_HEIGHT as usize).rev() {
                if self.is_row_full(y) {
                    self.clear_row(y);
                    cleared.push(y as u8);
                    continue 'scan;
                }
            }
            break;
        }
        cleared
    }

    /// Check that every cell is inside the grid and empty
    pub fn can_place(&self, cells: &[(i8, i8)]) -> bool {
        cells.iter().all(|&(x, y)| self.is_valid(x, y))
    }

    /// Write cells with the given shape
    /// Cells outside the grid are skipped
    pub fn place(&mut self, cells: &[(i8, i8)], shape: Shape) {
        for &(x, y) in cells {
            self.set(x, y, Some(shape));
        }
    }

    /// Empty the given cells
    pub fn lift(&mut self, cells: &[(i8, i8)]) {
        for &(x, y) in cells {
            self.set(x, y, None);
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Number of filled cells
    pub fn filled_count(&self) -> usize {
        self.cells.iter().filter(|c| c.is_some()).count()
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        for cell in &mut self.cells {
            *cell = None;
        }
    }

    /// Export the board as shape ids
    pub fn write_render_grid(&self, out: &mut RenderGrid) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, slot) in row.iter_mut().enumerate() {
                *slot = cell_id(self.cells[y * width + x]);
            }
        }
    }

    /// Build a board from rows of shape ids (`0` is empty)
    ///
    /// Rows are aligned to the bottom of the board; unknown ids are treated as empty.
    pub fn from_rows(rows: &[[u8; BOARD_WIDTH as usize]]) -> Self {
        let mut board = Self::new();
        let height = BOARD_HEIGHT as usize;
        let skip = rows.len().saturating_sub(height);
        let offset = height - (rows.len() - skip);
        for (i, row) in rows.iter().skip(skip).enumerate() {
            for (x, &id) in row.iter().enumerate() {
                let cell = Shape::from_id(id).filter(|s| s.is_playable());
                board.set(x as i8, (offset + i) as i8, cell);
            }
        }
        board
    }
}

impl Default for Board {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(11, 0), Some(11));
        assert_eq!(Board::index(0, 1), Some(12));
        assert_eq!(Board::index(11, 19), Some(239));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(12, 0), None);
        assert_eq!(Board::index(0, 20), None);
    }

    #[test]
    fn test_out_of_bounds_is_occupied() {
        let board = Board::new();
        assert!(board.is_occupied(-1, 5));
        assert!(board.is_occupied(12, 5));
        assert!(board.is_occupied(3, 20));
        assert!(board.is_occupied(3, -1));
        assert!(!board.is_occupied(3, 5));
    }

    #[test]
    fn test_cascading_clear_reuses_index() {
        let mut board = Board::new();
        for y in 18..20 {
            for x in 0..12 {
                board.set(x, y, Some(Shape::T));
            }
        }
        board.set(0, 17, Some(Shape::I));

        let cleared = board.clear_completed_rows();
        assert_eq!(cleared.as_slice(), &[19, 19]);
        assert_eq!(board.get(0, 19), Some(Some(Shape::I)));
        assert_eq!(board.filled_count(), 1);
    }

    #[test]
    fn test_from_rows_aligns_to_bottom() {
        let mut row = [0u8; 12];
        row[0] = 1;
        row[11] = 9;
        let board = Board::from_rows(&[row]);
        assert_eq!(board.get(0, 19), Some(Some(Shape::Cube)));
        assert_eq!(board.get(11, 19), Some(None));
        assert_eq!(board.filled_count(), 1);
    }
}
