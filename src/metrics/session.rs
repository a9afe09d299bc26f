use std::time::{Duration, Instant};

/// In-memory stats for the current process: how long the current round has
/// been running and how many rounds have been played. Nothing here is
/// persisted; the high score lives in the game state.
pub struct SessionMetrics {
    started_at: Instant,
    elapsed: Duration,
    rounds_played: u32,
}

impl SessionMetrics {
    pub fn new() -> Self {
        Self {
            started_at: Instant::now(),
            elapsed: Duration::ZERO,
            rounds_played: 0,
        }
    }

    /// Refresh the elapsed clock; called once per rendered frame
    pub fn update(&mut self) {
        self.elapsed = self.started_at.elapsed();
    }

    pub fn on_round_start(&mut self) {
        self.started_at = Instant::now();
        self.elapsed = Duration::ZERO;
    }

    pub fn on_round_over(&mut self) {
        self.rounds_played += 1;
    }

    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    /// MM:SS for the header
    pub fn format_elapsed(&self) -> String {
        let total_secs = self.elapsed.as_secs();
        format!("{:02}:{:02}", total_secs / 60, total_secs % 60)
    }
}

impl Default for SessionMetrics {
    fn default() -> Self {
        Self::new()
    }
}
