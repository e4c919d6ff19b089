//! Core types module - shared data structures and constants
//!
//! Everything here is plain data: the fixed board dimensions, timing and
//! scoring constants, the seven piece kinds and the commands a frontend can
//! send into a game session.
//!
//! # Board Dimensions
//!
//! - **Width**: 10 columns (indexed 0-9)
//! - **Height**: 20 rows (indexed 0-19, row 0 is the top)
//!
//! # Cell Values
//!
//! A board cell is either empty or holds one of the seven piece kinds. The
//! numeric id of a cell (used by snapshots and renderers) is `0` for empty and
//! `1..=7` for the kinds in the order I, J, L, O, S, T, Z.
//!
//! | Id | Kind | Color |
//! |----|------|-------|
//! | 1 | I | `#FF0D72` |
//! | 2 | J | `#0DC2FF` |
//! | 3 | L | `#0DFF72` |
//! | 4 | O | `#F538FF` |
//! | 5 | S | `#FF8E0D` |
//! | 6 | T | `#FFE138` |
//! | 7 | Z | `#3877FF` |
//!
//! # Examples
//!
//! ```
//! use falltris_types::{cell_from_id, GameAction, PieceKind, RotateDirection, BOARD_WIDTH};
//!
//! assert_eq!(PieceKind::T.id(), 6);
//! assert_eq!(cell_from_id(6).unwrap(), Some(PieceKind::T));
//! assert_eq!(cell_from_id(0).unwrap(), None);
//! assert!(cell_from_id(8).is_err());
//!
//! assert_eq!(RotateDirection::Clockwise.opposite(), RotateDirection::CounterClockwise);
//! assert_eq!(GameAction::from_str("hardDrop"), Some(GameAction::HardDrop));
//! assert_eq!(BOARD_WIDTH, 10);
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Board width in cells (10 columns)
pub const BOARD_WIDTH: u8 = 10;

/// Board height in cells (20 rows)
pub const BOARD_HEIGHT: u8 = 20;

/// Frame length used by the terminal frontend (16ms ≈ 60 FPS)
pub const TICK_MS: u32 = 16;

/// Gravity interval at level 1 (one row per second)
pub const BASE_DROP_MS: u32 = 1000;

/// Gravity speed-up per level
pub const DROP_INTERVAL_STEP_MS: u32 = 50;

/// Fastest gravity interval
pub const DROP_INTERVAL_MIN_MS: u32 = 100;

/// Cleared lines needed per level
pub const LINES_PER_LEVEL: u32 = 10;

/// Line clear scoring (classic rules), indexed by lines cleared, multiplied by level
pub const LINE_SCORES: [u32; 5] = [0, 40, 100, 300, 1200];

/// Tetromino piece kinds, in cell-id order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PieceKind {
    I,
    J,
    L,
    O,
    S,
    T,
    Z,
}

impl PieceKind {
    /// All kinds, indexed by `id() - 1`.
    pub const ALL: [PieceKind; 7] = [
        PieceKind::I,
        PieceKind::J,
        PieceKind::L,
        PieceKind::O,
        PieceKind::S,
        PieceKind::T,
        PieceKind::Z,
    ];

    /// Numeric cell id (1..=7).
    pub const fn id(self) -> u8 {
        match self {
            PieceKind::I => 1,
            PieceKind::J => 2,
            PieceKind::L => 3,
            PieceKind::O => 4,
            PieceKind::S => 5,
            PieceKind::T => 6,
            PieceKind::Z => 7,
        }
    }

    /// Display color as `(r, g, b)`.
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            PieceKind::I => (0xFF, 0x0D, 0x72),
            PieceKind::J => (0x0D, 0xC2, 0xFF),
            PieceKind::L => (0x0D, 0xFF, 0x72),
            PieceKind::O => (0xF5, 0x38, 0xFF),
            PieceKind::S => (0xFF, 0x8E, 0x0D),
            PieceKind::T => (0xFF, 0xE1, 0x38),
            PieceKind::Z => (0x38, 0x77, 0xFF),
        }
    }
}

/// Rejected raw cell value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CellValueError {
    #[error("cell value {0} is not a piece id (expected 1..=7)")]
    NotAPiece(u8),
    #[error("cell value {0} is out of range (expected 0..=7)")]
    OutOfRange(u8),
}

impl TryFrom<u8> for PieceKind {
    type Error = CellValueError;

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            1..=7 => Ok(PieceKind::ALL[(value - 1) as usize]),
            0 => Err(CellValueError::NotAPiece(value)),
            _ => Err(CellValueError::OutOfRange(value)),
        }
    }
}

/// Cell on the board (None = empty, Some = filled with piece kind)
pub type Cell = Option<PieceKind>;

/// Numeric id of a cell: 0 for empty, otherwise the piece id.
pub fn cell_id(cell: Cell) -> u8 {
    cell.map_or(0, PieceKind::id)
}

/// Parse a raw cell id (0 = empty).
pub fn cell_from_id(id: u8) -> Result<Cell, CellValueError> {
    match id {
        0 => Ok(None),
        _ => PieceKind::try_from(id).map(Some),
    }
}

/// Rotation direction
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum RotateDirection {
    Clockwise,
    CounterClockwise,
}

impl RotateDirection {
    pub fn opposite(self) -> Self {
        match self {
            RotateDirection::Clockwise => RotateDirection::CounterClockwise,
            RotateDirection::CounterClockwise => RotateDirection::Clockwise,
        }
    }

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "cw" | "clockwise" => Some(RotateDirection::Clockwise),
            "ccw" | "counterclockwise" => Some(RotateDirection::CounterClockwise),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            RotateDirection::Clockwise => "cw",
            RotateDirection::CounterClockwise => "ccw",
        }
    }
}

/// Horizontal move of the active piece, one column at a time
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum MoveDirection {
    Left,
    Right,
}

impl MoveDirection {
    /// Column offset of one step.
    pub fn dx(self) -> i8 {
        match self {
            MoveDirection::Left => -1,
            MoveDirection::Right => 1,
        }
    }
}

/// Commands a frontend forwards into a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum GameAction {
    Start,
    MoveLeft,
    MoveRight,
    SoftDrop,
    HardDrop,
    RotateCw,
    RotateCcw,
    Pause,
    Restart,
}

impl GameAction {
    /// Parse action from string (case-insensitive)
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "start" => Some(GameAction::Start),
            "moveleft" => Some(GameAction::MoveLeft),
            "moveright" => Some(GameAction::MoveRight),
            "softdrop" => Some(GameAction::SoftDrop),
            "harddrop" => Some(GameAction::HardDrop),
            "rotatecw" => Some(GameAction::RotateCw),
            "rotateccw" => Some(GameAction::RotateCcw),
            "pause" => Some(GameAction::Pause),
            "restart" => Some(GameAction::Restart),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            GameAction::Start => "start",
            GameAction::MoveLeft => "moveLeft",
            GameAction::MoveRight => "moveRight",
            GameAction::SoftDrop => "softDrop",
            GameAction::HardDrop => "hardDrop",
            GameAction::RotateCw => "rotateCw",
            GameAction::RotateCcw => "rotateCcw",
            GameAction::Pause => "pause",
            GameAction::Restart => "restart",
        }
    }
}

/// Lifecycle of a game session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SessionState {
    #[default]
    Idle,
    Running,
    Paused,
    GameOver,
}

impl SessionState {
    pub fn as_str(&self) -> &'static str {
        match self {
            SessionState::Idle => "idle",
            SessionState::Running => "running",
            SessionState::Paused => "paused",
            SessionState::GameOver => "gameOver",
        }
    }
}
