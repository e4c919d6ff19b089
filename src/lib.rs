//! Falltris (workspace facade crate).
//!
//! Re-exports the member crates as `falltris::{core, input, term, types}` so
//! binaries, tests and benches depend on one package. The environment
//! [`config`] lives here because only the frontend reads it.

pub mod config;

pub use falltris_core as core;
pub use falltris_input as input;
pub use falltris_term as term;
pub use falltris_types as types;
