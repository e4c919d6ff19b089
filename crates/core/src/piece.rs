//! Active falling piece

use crate::board::Board;
use crate::shape::Shape;
use crate::types::{PieceKind, BOARD_WIDTH};

/// The falling piece: its current shape grid and the board position of the
/// grid's top-left corner.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ActivePiece {
    pub shape: Shape,
    pub x: i8,
    pub y: i8,
}

impl ActivePiece {
    /// Place a shape at the spawn position: horizontally centered, top row.
    pub fn spawn(shape: Shape) -> Self {
        let x = (BOARD_WIDTH / 2) as i8 - (shape.size() / 2) as i8;
        Self { shape, x, y: 0 }
    }

    pub fn kind(&self) -> Option<PieceKind> {
        self.shape.kind()
    }

    /// Same piece moved by `(dx, dy)`.
    pub fn shifted(&self, dx: i8, dy: i8) -> Self {
        Self {
            x: self.x + dx,
            y: self.y + dy,
            ..*self
        }
    }

    pub fn collides(&self, board: &Board) -> bool {
        board.collides(&self.shape, self.x, self.y)
    }

    /// Board coordinates of every filled cell.
    pub fn cells(&self) -> impl Iterator<Item = (i8, i8, PieceKind)> + '_ {
        self.shape
            .filled_cells()
            .map(move |(dx, dy, kind)| (self.x + dx, self.y + dy, kind))
    }

    /// Row the piece would settle on if dropped straight down.
    pub fn landing_y(&self, board: &Board) -> i8 {
        let mut probe = *self;
        while !probe.shifted(0, 1).collides(board) {
            probe.y += 1;
        }
        probe.y
    }
}
