//! Snapshot module - read-only view of a session for renderers and tooling

use serde::{Deserialize, Serialize};

use crate::piece::ActivePiece;
use crate::shape::{Shape, MAX_SHAPE_SIZE};
use crate::types::{SessionState, BOARD_HEIGHT, BOARD_WIDTH};

/// Settled cells as piece ids, `board[y][x]`, 0 = empty.
pub type BoardGrid = [[u8; BOARD_WIDTH as usize]; BOARD_HEIGHT as usize];

/// A shape grid as piece ids; only the top-left `size` x `size` region is used.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ShapeSnapshot {
    pub size: u8,
    pub cells: [[u8; MAX_SHAPE_SIZE]; MAX_SHAPE_SIZE],
}

impl ShapeSnapshot {
    /// Filled cells as `(dx, dy, id)`, row-major.
    pub fn filled(&self) -> impl Iterator<Item = (u8, u8, u8)> + '_ {
        let n = self.size as usize;
        self.cells[..n].iter().enumerate().flat_map(move |(y, row)| {
            row[..n]
                .iter()
                .enumerate()
                .filter(|(_, id)| **id != 0)
                .map(move |(x, id)| (x as u8, y as u8, *id))
        })
    }
}

impl From<&Shape> for ShapeSnapshot {
    fn from(shape: &Shape) -> Self {
        Self {
            size: shape.size(),
            cells: shape.to_ids(),
        }
    }
}

/// The falling piece and where its grid's top-left corner sits.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ActiveSnapshot {
    pub shape: ShapeSnapshot,
    pub x: i8,
    pub y: i8,
}

impl ActiveSnapshot {
    /// Board coordinates of each filled cell, with its piece id.
    pub fn cells(&self) -> impl Iterator<Item = (i16, i16, u8)> + '_ {
        self.shape.filled().map(move |(dx, dy, id)| {
            (
                self.x as i16 + dx as i16,
                self.y as i16 + dy as i16,
                id,
            )
        })
    }
}

impl From<&ActivePiece> for ActiveSnapshot {
    fn from(piece: &ActivePiece) -> Self {
        Self {
            shape: ShapeSnapshot::from(&piece.shape),
            x: piece.x,
            y: piece.y,
        }
    }
}

/// Everything a frontend needs to draw one frame.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub board: BoardGrid,
    pub active: Option<ActiveSnapshot>,
    pub next: Option<ShapeSnapshot>,
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
    pub state: SessionState,
    pub paused: bool,
    pub game_over: bool,
    pub episode_id: u32,
}

impl GameSnapshot {
    /// Whether gameplay input currently has any effect.
    pub fn playable(&self) -> bool {
        self.state == SessionState::Running
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::shape_for;
    use crate::types::PieceKind;

    #[test]
    fn test_shape_snapshot_filled_cells() {
        let snap = ShapeSnapshot::from(&shape_for(PieceKind::S));
        let cells: Vec<_> = snap.filled().collect();
        assert_eq!(cells, vec![(1, 0, 5), (2, 0, 5), (0, 1, 5), (1, 1, 5)]);
    }

    #[test]
    fn test_active_snapshot_cells_are_board_relative() {
        let piece = ActivePiece {
            shape: shape_for(PieceKind::I),
            x: -1,
            y: 4,
        };
        let snap = ActiveSnapshot::from(&piece);
        let cells: Vec<_> = snap.cells().map(|(x, y, _)| (x, y)).collect();
        assert_eq!(cells, vec![(-1, 5), (0, 5), (1, 5), (2, 5)]);
    }

    #[test]
    fn test_default_snapshot_is_not_playable() {
        let snap = GameSnapshot::default();
        assert!(!snap.playable());
        assert_eq!(snap.state, SessionState::Idle);
    }

    #[test]
    fn test_snapshot_serializes_to_json() {
        let mut snap = GameSnapshot {
            score: 40,
            level: 1,
            state: SessionState::Running,
            ..Default::default()
        };
        snap.board[19][0] = 7;
        let json = serde_json::to_value(&snap).unwrap();
        assert_eq!(json["score"], 40);
        assert_eq!(json["board"][19][0], 7);
        assert!(json["active"].is_null());

        let back: GameSnapshot = serde_json::from_value(json).unwrap();
        assert_eq!(back, snap);
    }
}
