//! Tick timing.
//!
//! The loop asks the scheduler whether a tick is due, tells it when one happened, and lets
//! it idle in between. Swapping the implementation changes pacing without touching the
//! game rules.

use std::thread;
use std::time::{Duration, Instant};

use crate::types::TICK_MS;

pub trait TickScheduler {
    /// Whether enough time has passed since the last successful tick.
    fn is_due(&self) -> bool;

    /// Restart the interval after a successful tick.
    fn reset(&mut self);

    /// Wait before the next check.
    fn idle(&mut self);
}

/// Time-sliced polling: sleep a fixed quantum, tick once the interval has elapsed.
#[derive(Debug, Clone)]
pub struct FixedIntervalScheduler {
    interval: Duration,
    last_tick: Instant,
}

impl FixedIntervalScheduler {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            last_tick: Instant::now(),
        }
    }

    pub fn interval(&self) -> Duration {
        self.interval
    }
}

impl Default for FixedIntervalScheduler {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_MS))
    }
}

impl TickScheduler for FixedIntervalScheduler {
    fn is_due(&self) -> bool {
        self.last_tick.elapsed() >= self.interval
    }

    fn reset(&mut self) {
        self.last_tick = Instant::now();
    }

    fn idle(&mut self) {
        thread::sleep(self.interval);
    }
}
