//! Fixed-cadence tick clock.
//!
//! Converts wall-clock elapsed time into a number of due board ticks. Leftover
//! time is carried to the next call. When the caller falls far behind, the
//! backlog is coalesced: at most `max_catch_up` ticks are reported and the rest
//! is dropped.

use std::time::Duration;

use flappy_board_core::types::TICK_INTERVAL_US;

/// Ticks reported by a single `advance` after a stall
pub const DEFAULT_MAX_CATCH_UP: u32 = 5;

#[derive(Debug, Clone)]
pub struct TickClock {
    interval_us: u64,
    accumulator_us: u64,
    max_catch_up: u32,
    total_ticks: u64,
}

impl TickClock {
    pub fn new() -> Self {
        Self::with_interval(Duration::from_micros(TICK_INTERVAL_US))
    }

    pub fn with_interval(interval: Duration) -> Self {
        let interval_us = u64::try_from(interval.as_micros()).unwrap_or(u64::MAX).max(1);
        Self {
            interval_us,
            accumulator_us: 0,
            max_catch_up: DEFAULT_MAX_CATCH_UP,
            total_ticks: 0,
        }
    }

    pub fn with_max_catch_up(mut self, max_catch_up: u32) -> Self {
        self.max_catch_up = max_catch_up.max(1);
        self
    }

    pub fn interval(&self) -> Duration {
        Duration::from_micros(self.interval_us)
    }

    /// Account for `elapsed` wall-clock time and return the ticks now due.
    pub fn advance(&mut self, elapsed: Duration) -> u32 {
        let elapsed_us = u64::try_from(elapsed.as_micros()).unwrap_or(u64::MAX);
        self.accumulator_us = self.accumulator_us.saturating_add(elapsed_us);

        let due = self.accumulator_us / self.interval_us;
        self.accumulator_us %= self.interval_us;

        let due = due.min(self.max_catch_up as u64) as u32;
        self.total_ticks += due as u64;
        due
    }

    /// Time left until the next tick is due
    pub fn until_next(&self) -> Duration {
        Duration::from_micros(self.interval_us - self.accumulator_us)
    }

    pub fn total_ticks(&self) -> u64 {
        self.total_ticks
    }

    /// Drop any carried time
    pub fn reset(&mut self) {
        self.accumulator_us = 0;
    }
}

impl Default for TickClock {
    fn default() -> Self {
        Self::new()
    }
}
