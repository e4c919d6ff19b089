//! Piece catalog - the seven canonical tetromino shapes
//!
//! Shapes are listed in their spawn orientation. `shape_for` always hands out
//! a fresh copy, so rotating a piece never touches the templates.

use crate::rng::SimpleRng;
use crate::shape::Shape;
use crate::types::PieceKind;

type Mask = [[u8; 4]; 4];

const I_MASK: Mask = [[0, 0, 0, 0], [1, 1, 1, 1], [0, 0, 0, 0], [0, 0, 0, 0]];
const J_MASK: Mask = [[1, 0, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
const L_MASK: Mask = [[0, 0, 1, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
const O_MASK: Mask = [[1, 1, 0, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
const S_MASK: Mask = [[0, 1, 1, 0], [1, 1, 0, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
const T_MASK: Mask = [[0, 1, 0, 0], [1, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]];
const Z_MASK: Mask = [[1, 1, 0, 0], [0, 1, 1, 0], [0, 0, 0, 0], [0, 0, 0, 0]];

/// Grid size and occupancy mask for a piece kind
fn template(kind: PieceKind) -> (u8, &'static Mask) {
    match kind {
        PieceKind::I => (4, &I_MASK),
        PieceKind::J => (3, &J_MASK),
        PieceKind::L => (3, &L_MASK),
        PieceKind::O => (2, &O_MASK),
        PieceKind::S => (3, &S_MASK),
        PieceKind::T => (3, &T_MASK),
        PieceKind::Z => (3, &Z_MASK),
    }
}

/// Spawn-orientation shape for a piece kind
pub fn shape_for(kind: PieceKind) -> Shape {
    let (size, mask) = template(kind);
    Shape::from_mask(kind, size, mask)
}

/// Pick one of the seven kinds uniformly at random.
pub fn random_kind(rng: &mut SimpleRng) -> PieceKind {
    PieceKind::ALL[rng.next_range(PieceKind::ALL.len() as u32) as usize]
}

/// A fresh spawn-orientation shape of a uniformly random kind.
pub fn random_piece(rng: &mut SimpleRng) -> Shape {
    shape_for(random_kind(rng))
}
