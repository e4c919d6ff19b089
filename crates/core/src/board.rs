//! Board module - the settled-cell grid
//!
//! The board is a 10x20 grid where each cell is empty or holds a piece kind.
//! Uses a flat array for cache locality and zero allocation.
//! Coordinates: (x, y) where x ranges 0..9 (left to right), y ranges 0..19 (top to bottom)

use arrayvec::ArrayVec;
use tracing::error;

use crate::shape::Shape;
use crate::types::{cell_id, Cell, BOARD_HEIGHT, BOARD_WIDTH};

/// Total number of cells on the board
const BOARD_SIZE: usize = (BOARD_WIDTH as usize) * (BOARD_HEIGHT as usize);

/// Row indices removed by one clear, bottom to top (indices before the clear)
pub type ClearedRows = ArrayVec<usize, { BOARD_HEIGHT as usize }>;

/// The game board - 10 columns x 20 rows using flat array storage
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
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

    pub fn width(&self) -> u8 {
        BOARD_WIDTH
    }

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

    /// Check if position is occupied (within bounds and filled)
    pub fn is_occupied(&self, x: i8, y: i8) -> bool {
        matches!(self.get(x, y), Some(Some(_)))
    }

    /// Whether `shape` placed with its top-left corner at `(x, y)` overlaps a
    /// settled cell or leaves the board on any side.
    pub fn collides(&self, shape: &Shape, x: i8, y: i8) -> bool {
        shape
            .filled_cells()
            .any(|(dx, dy, _)| !self.is_valid(x + dx, y + dy))
    }

    /// Write every filled cell of `shape` at `(x, y)` into the board.
    ///
    /// Callers check [`Board::collides`] first. A cell that lands out of
    /// bounds or on a filled cell is an invariant breach: it panics in debug
    /// builds and is logged and skipped otherwise.
    pub fn merge(&mut self, shape: &Shape, x: i8, y: i8) {
        for (dx, dy, kind) in shape.filled_cells() {
            let (px, py) = (x + dx, y + dy);
            let open = self.is_valid(px, py);
            debug_assert!(open, "merge onto blocked cell ({}, {})", px, py);
            if !open {
                error!(x = px, y = py, "merge onto blocked cell skipped");
                continue;
            }
            self.set(px, py, Some(kind));
        }
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

    /// Remove all full rows, shifting the rows above down and filling the top
    /// with empty rows. Returns the removed row indices, bottom to top.
    ///
    /// Scans bottom to top with a separate write cursor, so a row that moves
    /// into a just-cleared index is still examined (it is read at its
    /// old index before anything is written there).
    pub fn clear_full_rows(&mut self) -> ClearedRows {
        let mut cleared_rows = ClearedRows::new();
        let width = BOARD_WIDTH as usize;
        let mut write_y = BOARD_HEIGHT as usize;

        for read_y in (0..BOARD_HEIGHT as usize).rev() {
            if self.is_row_full(read_y) {
                cleared_rows.push(read_y);
            } else {
                write_y -= 1;
                if write_y != read_y {
                    let src_start = read_y * width;
                    let dst_start = write_y * width;
                    self.cells
                        .copy_within(src_start..src_start + width, dst_start);
                }
            }
        }

        for cell in &mut self.cells[..write_y * width] {
            *cell = None;
        }

        cleared_rows
    }

    /// Remove all full rows and return how many were removed.
    pub fn clear_completed_lines(&mut self) -> usize {
        self.clear_full_rows().len()
    }

    /// Get a reference to the internal cells array (row-major)
    pub fn cells(&self) -> &[Cell] {
        &self.cells
    }

    /// Iterate rows top to bottom.
    pub fn rows(&self) -> impl Iterator<Item = &[Cell]> {
        self.cells.chunks_exact(BOARD_WIDTH as usize)
    }

    /// Write cell ids into a fixed grid (for snapshots and renderers).
    pub fn write_u8_grid(&self, out: &mut [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize]) {
        for (dst, src) in out.iter_mut().zip(self.rows()) {
            for (d, s) in dst.iter_mut().zip(src) {
                *d = cell_id(*s);
            }
        }
    }

    pub fn is_empty(&self) -> bool {
        self.cells.iter().all(|c| c.is_none())
    }

    /// Clear the entire board
    pub fn clear(&mut self) {
        self.cells.fill(None);
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
    use crate::catalog::shape_for;
    use crate::types::PieceKind;

    fn fill_row(board: &mut Board, y: i8, kind: PieceKind) {
        for x in 0..BOARD_WIDTH as i8 {
            board.set(x, y, Some(kind));
        }
    }

    #[test]
    fn test_board_index_calculation() {
        assert_eq!(Board::index(0, 0), Some(0));
        assert_eq!(Board::index(9, 0), Some(9));
        assert_eq!(Board::index(0, 1), Some(10));
        assert_eq!(Board::index(9, 19), Some(199));
        assert_eq!(Board::index(-1, 0), None);
        assert_eq!(Board::index(10, 0), None);
        assert_eq!(Board::index(0, 20), None);
        assert_eq!(Board::index(0, -1), None);
    }

    #[test]
    fn test_collides_with_walls_floor_and_ceiling() {
        let board = Board::new();
        let o = shape_for(PieceKind::O);

        assert!(!board.collides(&o, 0, 0));
        assert!(!board.collides(&o, 8, 18));
        assert!(board.collides(&o, -1, 5));
        assert!(board.collides(&o, 9, 5));
        assert!(board.collides(&o, 4, 19));
        assert!(board.collides(&o, 4, -1));
    }

    #[test]
    fn test_empty_shape_rows_may_hang_outside() {
        // The I piece's top row is empty, so it may sit one row above the board.
        let board = Board::new();
        let i = shape_for(PieceKind::I);
        assert!(!board.collides(&i, 0, -1));
        assert!(board.collides(&i, 0, -2));
        // Bottom two rows of the grid are empty too.
        assert!(!board.collides(&i, 6, 18));
    }

    #[test]
    fn test_collides_with_settled_cells() {
        let mut board = Board::new();
        board.set(5, 11, Some(PieceKind::Z));
        let t = shape_for(PieceKind::T);
        // T row 1 spans x..x+3; at (4, 10) it covers (4..=6, 11).
        assert!(board.collides(&t, 4, 10));
        // Blank corner of the grid over the settled cell does not count.
        assert!(!board.collides(&t, 5, 11));
    }

    #[test]
    fn test_merge_writes_only_filled_cells() {
        let mut board = Board::new();
        board.set(0, 0, Some(PieceKind::J));
        let s = shape_for(PieceKind::S);
        board.merge(&s, 0, 0);

        assert_eq!(board.get(0, 0), Some(Some(PieceKind::J)));
        assert_eq!(board.get(1, 0), Some(Some(PieceKind::S)));
        assert_eq!(board.get(2, 0), Some(Some(PieceKind::S)));
        assert_eq!(board.get(0, 1), Some(Some(PieceKind::S)));
        assert_eq!(board.get(1, 1), Some(Some(PieceKind::S)));
        assert_eq!(board.get(2, 1), Some(None));
    }

    #[test]
    fn test_clear_full_rows_reports_pre_clear_indices() {
        let mut board = Board::new();
        fill_row(&mut board, 19, PieceKind::I);
        fill_row(&mut board, 17, PieceKind::I);
        board.set(3, 18, Some(PieceKind::T));

        let cleared = board.clear_full_rows();
        assert_eq!(cleared.as_slice(), &[19, 17]);
        assert_eq!(board.get(3, 19), Some(Some(PieceKind::T)));
        assert!(!board.is_row_full(19));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
    }

    #[test]
    fn test_adjacent_full_rows_are_all_cleared() {
        let mut board = Board::new();
        for y in 16..20 {
            fill_row(&mut board, y, PieceKind::L);
        }
        board.set(0, 15, Some(PieceKind::O));

        assert_eq!(board.clear_completed_lines(), 4);
        assert_eq!(board.get(0, 19), Some(Some(PieceKind::O)));
        assert_eq!(board.cells().iter().filter(|c| c.is_some()).count(), 1);
    }

    #[test]
    fn test_write_u8_grid() {
        let mut board = Board::new();
        board.set(2, 3, Some(PieceKind::O));
        let mut grid = [[9u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];
        board.write_u8_grid(&mut grid);
        assert_eq!(grid[3][2], 4);
        assert_eq!(grid[0][0], 0);
    }
}
