//! Scoring module - classic line-clear scoring, levels and gravity speed
//!
//! - A landing that clears `n` lines (1..=4) awards `LINE_SCORES[n] * level`.
//! - Level starts at 1 and rises by one every 10 cleared lines.
//! - Gravity starts at 1000ms per row and speeds up by 50ms per level,
//!   never dropping below 100ms.

use crate::types::{
    BASE_DROP_MS, DROP_INTERVAL_MIN_MS, DROP_INTERVAL_STEP_MS, LINES_PER_LEVEL, LINE_SCORES,
};

/// Points for clearing `lines` rows in one landing at `level` (1-based).
pub fn calculate_line_score(lines: usize, level: u32) -> u32 {
    if lines == 0 || lines >= LINE_SCORES.len() {
        return 0;
    }
    LINE_SCORES[lines].saturating_mul(level)
}

/// Level reached after `total_lines` cleared lines.
pub fn calculate_level(total_lines: u32) -> u32 {
    total_lines / LINES_PER_LEVEL + 1
}

/// Gravity interval for a level (in milliseconds)
pub fn get_drop_interval_ms(level: u32) -> u32 {
    let speedup = level.saturating_sub(1).saturating_mul(DROP_INTERVAL_STEP_MS);
    BASE_DROP_MS
        .saturating_sub(speedup)
        .max(DROP_INTERVAL_MIN_MS)
}

/// Running score, line count, level and gravity speed of a session
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Stats {
    pub score: u32,
    pub lines: u32,
    pub level: u32,
    pub drop_interval_ms: u32,
}

/// Outcome of recording one landing
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ScoreResult {
    pub points: u32,
    pub leveled_up: bool,
}

impl Stats {
    pub fn new() -> Self {
        Self {
            score: 0,
            lines: 0,
            level: 1,
            drop_interval_ms: BASE_DROP_MS,
        }
    }

    /// Record a landing that cleared `lines` rows.
    ///
    /// Points use the level in effect before the clear; level and gravity are
    /// recomputed afterwards. A landing with no clears changes nothing.
    pub fn record_clear(&mut self, lines: usize) -> ScoreResult {
        if lines == 0 {
            return ScoreResult::default();
        }

        let points = calculate_line_score(lines, self.level);
        let previous_level = self.level;

        self.score = self.score.saturating_add(points);
        self.lines = self.lines.saturating_add(lines as u32);
        self.level = calculate_level(self.lines);
        self.drop_interval_ms = get_drop_interval_ms(self.level);

        ScoreResult {
            points,
            leveled_up: self.level > previous_level,
        }
    }
}

impl Default for Stats {
    fn default() -> Self {
        Self::new()
    }
}
