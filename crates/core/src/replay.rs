//! Replay module - frame recordings for deterministic re-simulation
//!
//! A session is fully determined by its seed and the sequence of frames it
//! was stepped with (commands plus elapsed time). Recordings are plain serde
//! data; reading and writing them is left to the caller.

use serde::{Deserialize, Serialize};

use crate::session::GameSession;
use crate::types::GameAction;

/// One stepped frame: commands applied in order, then a gravity tick.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Frame {
    pub actions: Vec<GameAction>,
    pub elapsed_ms: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Replay {
    pub seed: u32,
    pub frames: Vec<Frame>,
}

impl Replay {
    pub fn new(seed: u32) -> Self {
        Self {
            seed,
            frames: Vec::new(),
        }
    }

    pub fn push(&mut self, actions: &[GameAction], elapsed_ms: u32) {
        self.frames.push(Frame {
            actions: actions.to_vec(),
            elapsed_ms,
        });
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    /// Total simulated time covered by the recording.
    pub fn duration_ms(&self) -> u64 {
        self.frames.iter().map(|f| f.elapsed_ms as u64).sum()
    }

    /// Re-run every frame in a fresh session.
    pub fn run(&self) -> GameSession {
        let mut session = GameSession::new(self.seed);
        for frame in &self.frames {
            session.step(&frame.actions, frame.elapsed_ms);
        }
        session
    }
}

/// A session that records every frame it is stepped with.
#[derive(Debug, Clone)]
pub struct RecordingSession {
    session: GameSession,
    replay: Replay,
}

impl RecordingSession {
    pub fn new(seed: u32) -> Self {
        Self {
            session: GameSession::new(seed),
            replay: Replay::new(seed),
        }
    }

    /// Step the inner session and append the frame to the recording.
    pub fn step(&mut self, actions: &[GameAction], elapsed_ms: u32) -> bool {
        self.replay.push(actions, elapsed_ms);
        self.session.step(actions, elapsed_ms)
    }

    pub fn session(&self) -> &GameSession {
        &self.session
    }

    pub fn replay(&self) -> &Replay {
        &self.replay
    }

    pub fn into_replay(self) -> Replay {
        self.replay
    }
}
