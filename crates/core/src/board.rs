//! Board module - manages the grid of locked cells
//!
//! The board is a 10x22 grid where each cell can be empty or filled with a piece kind.
//! Uses a flat array for better cache locality and zero-allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..21 (top to bottom).
//! The falling piece is never stored here; renderers compose it on top.

use arrayvec::ArrayVec;

use crate::types::{Cell, PieceKind, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one clear pass, bottom to top.
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 22 rows using flat array storage
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

    #[inline(always)]
    fn index_or_panic(x: i8, y: i8) -> usize {
        match Self::index(x, y) {
            Some(idx) => idx,
            None => panic!(
                "cell ({}, {}) is outside the {}x{} board",
                x, y, BOARD_WIDTH, BOARD_HEIGHT
            ),
        }
    }

    /// Get width of the board
    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

    /// Get height of the board
    pub fn height(&self) -> u8 {
        BOARD_HEIGHT
    }

    /// Cell contents at (x, y).
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the board. Callers bounds-check first.
    pub fn cell_at(&self, x: i8, y: i8) -> Cell {
        self.cells[Self::index_or_panic(x, y)]
    }

    /// Unconditional write of a cell value.
    ///
    /// # Panics
    ///
    /// Panics if (x, y) is outside the board.
    pub fn set_cell(&mut self, x: i8, y: i8, cell: Cell) {
        self.cells[Self::index_or_panic(x, y)] = cell;
    }

    /// Get cell at position (x, y)
    /// Returns None if out of bounds
    pub fn get(&self, x: i8, y: i8) -> Option<Cell> {
        Self::index(x, y).map(|idx| self.cells[idx])
    }

    /// Check if position is within bounds and filled
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
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

    /// Clear all full rows and return the row indices that were cleared (sorted bottom to top)
    ///
    /// Prepared boards may have more full rows than a single lock could complete; every
    /// one of them is reported.
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        // at most BOARD_HEIGHT rows exist, so the push cannot overflow
        self.compact(|y| cleared_rows.push(y));
        cleared_rows
    }

    /// Clear all full rows and return how many were removed.
    pub fn clear_full_lines(&mut self) -> usize {
        self.compact(|_| {})
    }

    /// Single bottom-to-top pass with a read and a write cursor, so rows that
    /// slide down are never re-examined. Rows freed at the top are emptied.
    fn compact(&mut self, mut on_cleared: impl FnMut(usize)) -> usize {
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;
        let mut count = 0;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                on_cleared(read_y);
                count += 1;
            } else {
                write_y -= 1;
                if write_y != read_y {
                    // copy_within handles the overlapping ranges
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        self.cells[..write_y * width].fill(None);
        count
    }

    /// Write the four absolute cells of a piece with its kind.
    ///
    /// # Panics
    ///
    /// Panics if any cell is outside the board.
    pub fn lock_cells(&mut self, cells: &[(i8, i8); 4], kind: PieceKind) {
        for &(x, y) in cells {
            self.set_cell(x, y, Some(kind));
        }
    }

    /// Get a reference to the internal cells array
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Write the board as a compact u8 grid (0 = empty, otherwise [`PieceKind::code`]).
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        let width = BOARD_WIDTH as usize;
        for (y, row) in out.iter_mut().enumerate() {
            for (x, slot) in row.iter_mut().enumerate() {
                *slot = self.cells[y * width + x].map(|k| k.code()).unwrap_or(0);
            }
        }
    }

    /// Set every cell to empty
    pub fn reset(&mut self) {
        self.cells.fill(None);
    }

    /// Create from a 2D vector for testing (converts to flat array)
    #[cfg(test)]
    pub fn from_cells(cells_2d: Vec<Vec<Cell>>) -> Self {
        assert_eq!(cells_2d.len(), BOARD_HEIGHT as usize);
        assert!(cells_2d.iter().all(|row| row.len() == BOARD_WIDTH as usize));

        let mut flat = [None; BOARD_SIZE];
        for (y, row) in cells_2d.iter().enumerate() {
            for (x, cell) in row.iter().enumerate() {
                flat[y * BOARD_WIDTH as usize + x] = *cell;
            }
        }
        Self { cells: flat }
    }

    /// Convert to 2D vector for testing/display
    #[cfg(test)]
    pub fn to_cells(&self) -> Vec<Vec<Cell>> {
        self.cells
            .chunks(BOARD_WIDTH as usize)
            .map(|row| row.to_vec())
            .collect()
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

    fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set_cell(x, y, Some(kind));
        }
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 21), Some(219));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 22), None);
    }

    #[test]
    fn test_board_flat_array() {
        let mut board = Board::new();

        board.set_cell(0, 0, Some(PieceKind::I));
        board.set_cell(5, 10, Some(PieceKind::T));

        assert_eq!(board.cell_at(0, 0), Some(PieceKind::I));
        assert_eq!(board.cell_at(5, 10), Some(PieceKind::T));

        assert_eq!(board.cells[0], Some(PieceKind::I));
        assert_eq!(board.cells[10 * 10 + 5], Some(PieceKind::T));
    }

    #[test]
    #[should_panic(expected = "outside the 10x22 board")]
    fn test_cell_at_out_of_bounds_panics() {
        Board::new().cell_at(10, 0);
    }

    #[test]
    #[should_panic]
    fn test_set_cell_negative_panics() {
        Board::new().set_cell(0, -1, Some(PieceKind::O));
    }

    #[test]
    fn test_board_from_cells_roundtrip() {
        let mut cells_2d = vec![vec![None; 10]; 22];
        cells_2d[5][3] = Some(PieceKind::O);
        cells_2d[21][7] = Some(PieceKind::L);

        let board = Board::from_cells(cells_2d.clone());
        assert_eq!(cells_2d, board.to_cells());
    }

    #[test]
    fn test_clear_full_rows_reports_indices_bottom_up() {
        let mut board = Board::new();
        fill_row(&mut board, 20, PieceKind::I);
        fill_row(&mut board, 21, PieceKind::I);
        board.set_cell(0, 19, Some(PieceKind::T));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[21, 20]);
        assert_eq!(board.cell_at(0, 21), Some(PieceKind::T));
        assert_eq!(board.cell_at(0, 19), None);
    }

    #[test]
    fn test_clear_non_adjacent_rows() {
        let mut board = Board::new();
        fill_row(&mut board, 21, PieceKind::J);
        board.set_cell(4, 20, Some(PieceKind::S));
        fill_row(&mut board, 19, PieceKind::J);
        board.set_cell(2, 18, Some(PieceKind::Z));

        assert_eq!(board.clear_full_lines(), 2);
        assert_eq!(board.cell_at(4, 21), Some(PieceKind::S));
        assert_eq!(board.cell_at(2, 20), Some(PieceKind::Z));
        assert!(!board.is_row_full(21));
        assert!(!board.is_row_full(20));
    }

    #[test]
    fn test_write_u8_grid() {
        let mut board = Board::new();
        board.set_cell(1, 2, Some(PieceKind::T));
        let mut grid = [[0u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[2][1], PieceKind::T.code());
        assert_eq!(grid[0][0], 0);
    }

    #[test]
    fn test_reset_empties_everything() {
        let mut board = Board::new();
        fill_row(&mut board, 3, PieceKind::O);
        board.reset();
        assert!(board.cells().iter().all(Option::is_none));
    }
}
