//! Shape module - square cell grids for pieces
//!
//! A shape is a square grid (2x2, 3x3 or 4x4) of cells stored in a fixed
//! 4x4 array. Only the top-left `size x size` square is meaningful; the rest
//! is always empty. Every filled cell of a shape holds the same piece kind.
//!
//! Coordinates: `(x, y)` where `x` is the column and `y` the row, both
//! relative to the top-left corner of the grid.

use thiserror::Error;

use crate::rotation;
use crate::types::{cell_from_id, cell_id, Cell, CellValueError, PieceKind, RotateDirection};

/// Largest supported shape edge (the I piece)
pub const MAX_SHAPE_SIZE: usize = 4;

/// Reasons a raw grid is not a valid shape
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ShapeError {
    #[error("shape has no filled cells")]
    Empty,
    #[error("shape size {0} exceeds the 4x4 limit")]
    TooLarge(usize),
    #[error("row {row} has {len} cells, expected {size}")]
    NotSquare { row: usize, len: usize, size: usize },
    #[error(transparent)]
    InvalidCell(#[from] CellValueError),
    #[error("shape mixes piece kinds {first:?} and {other:?}")]
    MixedKinds { first: PieceKind, other: PieceKind },
}

/// A square grid of cells in one rotation state
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Shape {
    pub(crate) size: u8,
    pub(crate) cells: [[Cell; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl Shape {
    /// Build a shape from an occupancy mask; non-zero mask entries become `kind`.
    pub(crate) fn from_mask(kind: PieceKind, size: u8, mask: &[[u8; 4]; 4]) -> Self {
        let mut cells = [[None; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in mask.iter().enumerate().take(size as usize) {
            for (x, &v) in row.iter().enumerate().take(size as usize) {
                if v != 0 {
                    cells[y][x] = Some(kind);
                }
            }
        }
        Self { size, cells }
    }

    /// Build a shape from rows of raw cell ids.
    ///
    /// Rejects grids that are not square, larger than 4x4, contain invalid
    /// ids, mix piece kinds, or have no filled cell.
    pub fn from_rows<R: AsRef<[u8]>>(rows: &[R]) -> Result<Self, ShapeError> {
        let size = rows.len();
        if size > MAX_SHAPE_SIZE {
            return Err(ShapeError::TooLarge(size));
        }

        let mut cells = [[None; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        let mut kind: Option<PieceKind> = None;

        for (y, row) in rows.iter().enumerate() {
            let row = row.as_ref();
            if row.len() != size {
                return Err(ShapeError::NotSquare {
                    row: y,
                    len: row.len(),
                    size,
                });
            }
            for (x, &id) in row.iter().enumerate() {
                let cell = cell_from_id(id)?;
                if let Some(k) = cell {
                    match kind {
                        Some(first) if first != k => {
                            return Err(ShapeError::MixedKinds { first, other: k })
                        }
                        _ => kind = Some(k),
                    }
                }
                cells[y][x] = cell;
            }
        }

        if kind.is_none() {
            return Err(ShapeError::Empty);
        }

        Ok(Self {
            size: size as u8,
            cells,
        })
    }

    /// Edge length of the square grid
    pub fn size(&self) -> u8 {
        self.size
    }

    /// Cell at `(x, y)`; empty outside the grid.
    pub fn get(&self, x: i8, y: i8) -> Cell {
        if x < 0 || y < 0 || x >= self.size as i8 || y >= self.size as i8 {
            return None;
        }
        self.cells[y as usize][x as usize]
    }

    /// The piece kind this shape is made of.
    pub fn kind(&self) -> Option<PieceKind> {
        self.filled_cells().next().map(|(_, _, kind)| kind)
    }

    /// Iterate filled cells as `(x, y, kind)` in row-major order.
    pub fn filled_cells(&self) -> impl Iterator<Item = (i8, i8, PieceKind)> + '_ {
        let size = self.size as usize;
        self.cells[..size].iter().enumerate().flat_map(move |(y, row)| {
            row[..size]
                .iter()
                .enumerate()
                .filter_map(move |(x, cell)| cell.map(|kind| (x as i8, y as i8, kind)))
        })
    }

    /// Number of filled cells
    pub fn cell_count(&self) -> usize {
        self.filled_cells().count()
    }

    /// Raw cell ids (row-major), zero-padded to 4x4.
    pub fn to_ids(&self) -> [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE] {
        let mut out = [[0u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE];
        for (y, row) in self.cells.iter().enumerate() {
            for (x, &cell) in row.iter().enumerate() {
                out[y][x] = cell_id(cell);
            }
        }
        out
    }

    /// Return this shape rotated 90 degrees.
    pub fn rotated(&self, direction: RotateDirection) -> Shape {
        rotation::rotate(self, direction)
    }
}
