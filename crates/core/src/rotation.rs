//! Rotation engine - grid rotation with a horizontal wall-kick search
//!
//! Rotation is transpose-then-reverse on the square grid:
//! - clockwise: transpose, then reverse each row
//! - counter-clockwise: transpose, then reverse the row order
//!
//! Both are exact only because every shape grid is square.
//!
//! When the rotated piece collides, it is nudged sideways by a cumulative
//! offset sequence `+1, -2, +3, -4, ...`, which probes `x, x+1, x-1, x+2, ...`.
//! After each nudge the next offset is computed; once a positive offset
//! exceeds the grid size the search gives up without probing the position
//! it just moved to. That leaves these probes per grid size:
//!
//! | Size | Probed columns |
//! |------|----------------|
//! | 2 | x, x+1 |
//! | 3 | x, x+1, x-1, x+2 |
//! | 4 | x, x+1, x-1, x+2 |
//!
//! Kicks are horizontal only.

use tracing::trace;

use crate::board::Board;
use crate::piece::ActivePiece;
use crate::shape::Shape;
use crate::types::RotateDirection;

/// Rotate a shape 90 degrees, returning a new grid.
pub fn rotate(shape: &Shape, direction: RotateDirection) -> Shape {
    let n = shape.size as usize;
    let mut out = *shape;

    for y in 0..n {
        for x in 0..y {
            let tmp = out.cells[x][y];
            out.cells[x][y] = out.cells[y][x];
            out.cells[y][x] = tmp;
        }
    }

    match direction {
        RotateDirection::Clockwise => {
            for row in out.cells[..n].iter_mut() {
                row[..n].reverse();
            }
        }
        RotateDirection::CounterClockwise => {
            out.cells[..n].reverse();
        }
    }

    out
}

/// Rotate the piece and resolve collisions with the kick search.
///
/// Returns the rotated (and possibly shifted) piece, or `None` when every
/// probed position collides; the caller then keeps the current piece.
pub fn attempt_rotate(
    board: &Board,
    piece: &ActivePiece,
    direction: RotateDirection,
) -> Option<ActivePiece> {
    let limit = piece.shape.size() as i8;
    let mut candidate = ActivePiece {
        shape: rotate(&piece.shape, direction),
        ..*piece
    };
    let mut offset: i8 = 1;

    while candidate.collides(board) {
        candidate.x += offset;
        offset = -(offset + offset.signum());
        if offset > limit {
            trace!(
                x = piece.x,
                y = piece.y,
                direction = direction.as_str(),
                "rotation blocked, no kick fits"
            );
            return None;
        }
        trace!(x = candidate.x, "probing wall kick");
    }

    Some(candidate)
}
