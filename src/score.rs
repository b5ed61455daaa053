//! Scoring and gravity pacing

use std::time::Duration;

/// Gravity interval at the start of a session
pub const INITIAL_GRAVITY_MS: u64 = 600;
/// Gravity never gets faster than this
pub const MIN_GRAVITY_MS: u64 = 120;
/// Speed-up per cleared row
pub const GRAVITY_STEP_MS: u64 = 20;

/// Score and pacing for one session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Score {
    /// Current score
    pub points: u64,
    /// Total lines cleared
    pub lines: u32,
    /// Milliseconds of falling time per gravity step
    gravity_ms: u64,
    /// Name of the most recent clear, for display
    pub last_clear: Option<&'static str>,
}

impl Default for Score {
    fn default() -> Self {
        Self::new()
    }
}

impl Score {
    pub fn new() -> Self {
        Self {
            points: 0,
            lines: 0,
            gravity_ms: INITIAL_GRAVITY_MS,
            last_clear: None,
        }
    }

    /// Points for clearing `rows` lines in a single pass
    pub fn points_for(rows: usize) -> u64 {
        match rows {
            1 => 100,
            2 => 300,
            3 => 500,
            4 => 800,
            _ => 0,
        }
    }

    /// Display name for a clear of `rows` lines
    pub fn clear_name(rows: usize) -> Option<&'static str> {
        match rows {
            1 => Some("Single"),
            2 => Some("Double"),
            3 => Some("Triple"),
            4 => Some("Tetris"),
            _ => None,
        }
    }

    /// Record a line clear pass and return the points gained.
    /// Any clear speeds gravity up by 20ms per row, floored at 120ms.
    pub fn add_clear(&mut self, rows: usize) -> u64 {
        if rows == 0 {
            return 0;
        }

        let gained = Self::points_for(rows);
        self.points += gained;
        self.lines += rows as u32;
        self.gravity_ms = self
            .gravity_ms
            .saturating_sub(GRAVITY_STEP_MS * rows as u64)
            .max(MIN_GRAVITY_MS);
        self.last_clear = Self::clear_name(rows);
        gained
    }

    pub fn gravity_ms(&self) -> u64 {
        self.gravity_ms
    }

    /// Current gravity interval
    pub fn gravity_interval(&self) -> Duration {
        Duration::from_millis(self.gravity_ms)
    }
}
