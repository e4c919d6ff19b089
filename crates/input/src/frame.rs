//! Per-frame command buffer.
//!
//! The main loop feeds every terminal event of a frame into a
//! [`CommandBuffer`], then drains it once and hands the commands to the
//! session in arrival order.

use arrayvec::ArrayVec;
use crossterm::event::{Event, KeyEvent};
use tracing::warn;

use crate::map::{action_for_key, should_quit};
use crate::types::GameAction;

/// Upper bound on commands kept for a single frame.
pub const MAX_COMMANDS_PER_FRAME: usize = 32;

/// Commands collected during one frame, in arrival order.
pub type Commands = ArrayVec<GameAction, MAX_COMMANDS_PER_FRAME>;

/// What a single terminal event did to the buffer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputOutcome {
    /// Not a game key (or a key release).
    Ignored,
    Queued(GameAction),
    /// The frame already holds the maximum number of commands.
    Dropped(GameAction),
    Quit,
}

#[derive(Debug, Clone, Default)]
pub struct CommandBuffer {
    pending: Commands,
    dropped: u32,
}

impl CommandBuffer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue an action; returns false if the frame is full.
    pub fn push(&mut self, action: GameAction) -> bool {
        if self.pending.try_push(action).is_err() {
            self.dropped = self.dropped.saturating_add(1);
            warn!(action = action.as_str(), "command buffer full, input dropped");
            return false;
        }
        true
    }

    pub fn handle_key(&mut self, key: KeyEvent) -> InputOutcome {
        if should_quit(key) {
            return InputOutcome::Quit;
        }
        match action_for_key(key) {
            Some(action) if self.push(action) => InputOutcome::Queued(action),
            Some(action) => InputOutcome::Dropped(action),
            None => InputOutcome::Ignored,
        }
    }

    /// Feed any terminal event; only key events matter.
    pub fn handle_event(&mut self, event: &Event) -> InputOutcome {
        match event {
            Event::Key(key) => self.handle_key(*key),
            _ => InputOutcome::Ignored,
        }
    }

    /// Take this frame's commands, leaving the buffer empty.
    pub fn drain(&mut self) -> Commands {
        std::mem::take(&mut self.pending)
    }

    pub fn as_slice(&self) -> &[GameAction] {
        &self.pending
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn clear(&mut self) {
        self.pending.clear();
    }

    /// Commands lost to a full buffer since creation.
    pub fn dropped(&self) -> u32 {
        self.dropped
    }
}
