//! Terminal "game renderer" module.
//!
//! A small, game-oriented rendering layer: snapshots are drawn into a plain
//! framebuffer which is then flushed to the terminal. No widget toolkit.
//!
//! - Keeps `core` free of any terminal code
//! - 2 columns per board cell so blocks look square

pub mod fb;
pub mod game_view;
pub mod renderer;

pub use falltris_core as core;
pub use falltris_types as types;

pub use fb::{FrameBuffer, Glyph, Rgb, Style};
pub use game_view::{AnchorY, GameView, Viewport};
pub use renderer::{changed_rows, encode_diff_into, encode_full_into, TerminalRenderer};
