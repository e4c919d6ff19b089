//! Game session - the state machine tying board, pieces and scoring together
//!
//! ```text
//!   Idle --start--> Running <--toggle_pause--> Paused
//!                     |
//!          blocked spawn
//!                     v
//!                  GameOver --restart--> Running
//! ```
//!
//! `restart` is only accepted once the game is over, and `Paused` only
//! answers to `toggle_pause`. While the session is not `Running`, movement,
//! rotation, drops and gravity are ignored; snapshots are always available so
//! a frontend can keep rendering.

use tracing::{debug, info};

use crate::board::Board;
use crate::catalog::random_piece;
use crate::piece::ActivePiece;
use crate::rng::SimpleRng;
use crate::rotation::attempt_rotate;
use crate::scoring::Stats;
use crate::shape::Shape;
use crate::snapshot::{ActiveSnapshot, GameSnapshot, ShapeSnapshot};
use crate::types::{GameAction, MoveDirection, RotateDirection, SessionState};

/// What happened when the last piece landed (consumed by frontends)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LockEvent {
    pub lines_cleared: u32,
    pub points: u32,
    pub level: u32,
    pub leveled_up: bool,
    /// The piece spawned after this landing was blocked.
    pub game_over: bool,
}

/// One falling-block game
#[derive(Debug, Clone)]
pub struct GameSession {
    board: Board,
    active: Option<ActivePiece>,
    next: Option<Shape>,
    rng: SimpleRng,
    stats: Stats,
    state: SessionState,
    /// Time accumulated towards the next gravity step.
    drop_timer_ms: u32,
    /// Incremented on every restart.
    episode_id: u32,
    /// Pieces spawned in the current episode.
    pieces_spawned: u32,
    last_event: Option<LockEvent>,
}

impl GameSession {
    /// Create an idle session whose piece sequence is fixed by `seed`.
    ///
    /// The first preview piece is drawn right away so it can be shown
    /// before the game starts.
    pub fn new(seed: u32) -> Self {
        let mut rng = SimpleRng::new(seed);
        let next = Some(random_piece(&mut rng));

        Self {
            board: Board::new(),
            active: None,
            next,
            rng,
            stats: Stats::new(),
            state: SessionState::Idle,
            drop_timer_ms: 0,
            episode_id: 0,
            pieces_spawned: 0,
            last_event: None,
        }
    }

    pub fn state(&self) -> SessionState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == SessionState::Running
    }

    pub fn paused(&self) -> bool {
        self.state == SessionState::Paused
    }

    pub fn game_over(&self) -> bool {
        self.state == SessionState::GameOver
    }

    pub fn board(&self) -> &Board {
        &self.board
    }

    pub fn active(&self) -> Option<&ActivePiece> {
        self.active.as_ref()
    }

    pub fn next_shape(&self) -> Option<&Shape> {
        self.next.as_ref()
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    pub fn score(&self) -> u32 {
        self.stats.score
    }

    pub fn lines(&self) -> u32 {
        self.stats.lines
    }

    pub fn level(&self) -> u32 {
        self.stats.level
    }

    pub fn drop_interval_ms(&self) -> u32 {
        self.stats.drop_interval_ms
    }

    pub fn drop_timer_ms(&self) -> u32 {
        self.drop_timer_ms
    }

    pub fn seed(&self) -> u32 {
        self.rng.seed()
    }

    pub fn episode_id(&self) -> u32 {
        self.episode_id
    }

    pub fn pieces_spawned(&self) -> u32 {
        self.pieces_spawned
    }

    /// Take and clear the last landing event.
    pub fn take_last_event(&mut self) -> Option<LockEvent> {
        self.last_event.take()
    }

    /// Start the game from `Idle`. The queued preview becomes the first piece.
    pub fn start(&mut self) -> bool {
        if self.state != SessionState::Idle {
            return false;
        }
        info!(seed = self.rng.seed(), "session started");
        self.begin();
        true
    }

    /// Discard the finished game and begin a fresh one. Ignored unless the
    /// session is in `GameOver`.
    pub fn restart(&mut self) -> bool {
        if self.state != SessionState::GameOver {
            return false;
        }
        self.episode_id = self.episode_id.wrapping_add(1);
        self.next = None;
        info!(episode = self.episode_id, "session restarted");
        self.begin();
        true
    }

    fn begin(&mut self) {
        self.board.clear();
        self.active = None;
        self.stats = Stats::new();
        self.drop_timer_ms = 0;
        self.pieces_spawned = 0;
        self.last_event = None;
        self.state = SessionState::Running;
        self.spawn_piece();
    }

    /// Switch between `Running` and `Paused`; ignored in other states.
    pub fn toggle_pause(&mut self) -> bool {
        self.state = match self.state {
            SessionState::Running => SessionState::Paused,
            SessionState::Paused => SessionState::Running,
            _ => return false,
        };
        debug!(state = self.state.as_str(), "pause toggled");
        true
    }

    /// Promote the queued piece (or a fresh one) to active and queue a new
    /// preview. Returns false, and ends the game, if the new piece is blocked.
    pub(crate) fn spawn_piece(&mut self) -> bool {
        let shape = match self.next.take() {
            Some(shape) => shape,
            None => random_piece(&mut self.rng),
        };
        self.next = Some(random_piece(&mut self.rng));

        let piece = ActivePiece::spawn(shape);
        self.active = Some(piece);
        self.pieces_spawned = self.pieces_spawned.wrapping_add(1);

        if piece.collides(&self.board) {
            self.state = SessionState::GameOver;
            info!(
                score = self.stats.score,
                lines = self.stats.lines,
                level = self.stats.level,
                "game over"
            );
            return false;
        }

        true
    }

    /// Shift the active piece one column; a blocked move is silently dropped.
    pub fn move_piece(&mut self, direction: MoveDirection) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        let moved = active.shifted(direction.dx(), 0);
        if moved.collides(&self.board) {
            return false;
        }
        self.active = Some(moved);
        true
    }

    /// Rotate the active piece with wall kicks; unchanged if no kick fits.
    pub fn rotate(&mut self, direction: RotateDirection) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        match attempt_rotate(&self.board, &active, direction) {
            Some(rotated) => {
                self.active = Some(rotated);
                true
            }
            None => false,
        }
    }

    /// Move the active piece down one row, landing it if it cannot move.
    /// Always restarts the gravity timer.
    pub fn soft_drop(&mut self) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        self.drop_timer_ms = 0;
        let lowered = active.shifted(0, 1);
        if lowered.collides(&self.board) {
            self.lock_piece(active);
        } else {
            self.active = Some(lowered);
        }
        true
    }

    /// Drop the active piece straight down and land it.
    pub fn hard_drop(&mut self) -> bool {
        if self.state != SessionState::Running {
            return false;
        }
        let Some(active) = self.active else {
            return false;
        };

        self.drop_timer_ms = 0;
        let landed = ActivePiece {
            y: active.landing_y(&self.board),
            ..active
        };
        self.lock_piece(landed);
        true
    }

    /// Merge `piece`, clear lines, score, then spawn the next piece.
    fn lock_piece(&mut self, piece: ActivePiece) {
        self.board.merge(&piece.shape, piece.x, piece.y);
        self.active = None;

        let cleared = self.board.clear_completed_lines();
        let result = self.stats.record_clear(cleared);
        debug!(
            x = piece.x,
            y = piece.y,
            lines = cleared,
            points = result.points,
            score = self.stats.score,
            "piece landed"
        );
        if result.leveled_up {
            debug!(
                level = self.stats.level,
                drop_interval_ms = self.stats.drop_interval_ms,
                "level up"
            );
        }

        let spawned = self.spawn_piece();
        self.last_event = Some(LockEvent {
            lines_cleared: cleared as u32,
            points: result.points,
            level: self.stats.level,
            leveled_up: result.leveled_up,
            game_over: !spawned,
        });
    }

    /// Advance gravity by `elapsed_ms`. Once the accumulated time exceeds the
    /// drop interval the piece soft-drops one row. Returns true on a gravity step.
    pub fn tick(&mut self, elapsed_ms: u32) -> bool {
        if self.state != SessionState::Running {
            return false;
        }

        self.drop_timer_ms = self.drop_timer_ms.saturating_add(elapsed_ms);
        if self.drop_timer_ms > self.stats.drop_interval_ms {
            self.soft_drop();
            return true;
        }
        false
    }

    /// Apply a game action
    pub fn apply_action(&mut self, action: GameAction) -> bool {
        match action {
            GameAction::Start => self.start(),
            GameAction::MoveLeft => self.move_piece(MoveDirection::Left),
            GameAction::MoveRight => self.move_piece(MoveDirection::Right),
            GameAction::SoftDrop => self.soft_drop(),
            GameAction::HardDrop => self.hard_drop(),
            GameAction::RotateCw => self.rotate(RotateDirection::Clockwise),
            GameAction::RotateCcw => self.rotate(RotateDirection::CounterClockwise),
            GameAction::Pause => self.toggle_pause(),
            GameAction::Restart => self.restart(),
        }
    }

    /// Run one frame: every command in order, then one gravity tick.
    ///
    /// Returns true if gravity stepped this frame.
    pub fn step(&mut self, actions: &[GameAction], elapsed_ms: u32) -> bool {
        for &action in actions {
            self.apply_action(action);
        }
        self.tick(elapsed_ms)
    }

    pub fn snapshot_into(&self, out: &mut GameSnapshot) {
        self.board.write_u8_grid(&mut out.board);
        out.active = self.active.as_ref().map(ActiveSnapshot::from);
        out.next = self.next.as_ref().map(ShapeSnapshot::from);
        out.score = self.stats.score;
        out.lines = self.stats.lines;
        out.level = self.stats.level;
        out.drop_interval_ms = self.stats.drop_interval_ms;
        out.state = self.state;
        out.paused = self.paused();
        out.game_over = self.game_over();
        out.episode_id = self.episode_id;
    }

    pub fn snapshot(&self) -> GameSnapshot {
        let mut s = GameSnapshot::default();
        self.snapshot_into(&mut s);
        s
    }
}

impl Default for GameSession {
    fn default() -> Self {
        Self::new(1)
    }
}
