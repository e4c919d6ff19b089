//! Core game logic - pure, deterministic, and testable
//!
//! Everything needed to play a falling-block game with no terminal, clock or
//! file access. Frontends feed commands and elapsed time in and read
//! snapshots out.
//!
//! - **Deterministic**: the same seed and the same frames give the same game
//! - **Allocation-free hot path**: board, shapes and snapshots are fixed arrays
//!
//! # Module Structure
//!
//! - [`board`]: 10x20 grid of settled cells, collision, merge and line clears
//! - [`shape`]: square piece grids (2x2, 3x3, 4x4)
//! - [`catalog`]: the seven canonical shapes and random selection
//! - [`piece`]: the falling piece and its position
//! - [`rotation`]: grid rotation and the horizontal wall-kick search
//! - [`scoring`]: line scores, levels and gravity speed
//! - [`session`]: the game state machine
//! - [`snapshot`]: render-ready copies of a session
//! - [`replay`]: frame recordings for re-simulation
//! - [`rng`]: seeded LCG
//!
//! # Example
//!
//! ```
//! use falltris_core::GameSession;
//! use falltris_core::types::{GameAction, SessionState};
//!
//! let mut game = GameSession::new(12345);
//! game.start();
//!
//! game.apply_action(GameAction::MoveRight);
//! game.apply_action(GameAction::RotateCw);
//! game.apply_action(GameAction::HardDrop);
//!
//! // Hard drops award no points on their own.
//! assert_eq!(game.score(), 0);
//! assert_eq!(game.state(), SessionState::Running);
//! ```
//!
//! # Timing
//!
//! Call [`GameSession::tick`](session::GameSession::tick) (or `step`) every
//! frame with the elapsed milliseconds. Gravity moves the piece one row once
//! the accumulated time exceeds the level's drop interval (1000ms at level 1,
//! 50ms faster per level, never below 100ms).

pub mod board;
pub mod catalog;
pub mod piece;
pub mod replay;
pub mod rng;
pub mod rotation;
pub mod scoring;
pub mod session;
pub mod shape;
pub mod snapshot;

pub use falltris_types as types;

// Re-export commonly used types for convenience
pub use board::{Board, ClearedRows};
pub use catalog::{random_piece, shape_for};
pub use piece::ActivePiece;
pub use replay::{Frame, RecordingSession, Replay};
pub use rng::SimpleRng;
pub use rotation::{attempt_rotate, rotate};
pub use scoring::{calculate_level, calculate_line_score, get_drop_interval_ms, ScoreResult, Stats};
pub use session::{GameSession, LockEvent};
pub use shape::{Shape, ShapeError};
pub use snapshot::{ActiveSnapshot, BoardGrid, GameSnapshot, ShapeSnapshot};
