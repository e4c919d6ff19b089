//! Terminal input module (engine-facing).
//!
//! Maps `crossterm` key events into [`crate::types::GameAction`] and collects
//! them per frame. Key-repeat events are treated as presses, so holding a key
//! repeats the command at the terminal's auto-repeat rate.

pub mod frame;
pub mod map;

pub use falltris_types as types;

pub use frame::{CommandBuffer, Commands, InputOutcome, MAX_COMMANDS_PER_FRAME};
pub use map::{action_for_key, is_actionable, should_quit};
