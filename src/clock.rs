//! Time sources for the timer loop.
//!
//! [`SystemClock`] is backed by the OS and blocks on `sleep`. [`ManualClock`]
//! keeps virtual time that only moves when `sleep` or `advance` is called, so
//! a full sixty-second run finishes instantly under test.

use chrono::{DateTime, Local};
use std::cell::Cell;
use std::thread;
use std::time::{Duration, Instant};

/// Monotonic time, wall-clock time and a blocking sleep.
pub trait Clock {
    fn now(&self) -> Instant;

    fn wall(&self) -> DateTime<Local>;

    fn sleep(&self, duration: Duration);
}

#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Instant {
        Instant::now()
    }

    fn wall(&self) -> DateTime<Local> {
        Local::now()
    }

    fn sleep(&self, duration: Duration) {
        thread::sleep(duration);
    }
}

/// Virtual clock for deterministic runs.
#[derive(Debug)]
pub struct ManualClock {
    base: Instant,
    wall_base: DateTime<Local>,
    offset: Cell<Duration>,
    drift: Duration,
}

impl ManualClock {
    pub fn new(wall_base: DateTime<Local>) -> Self {
        Self {
            base: Instant::now(),
            wall_base,
            offset: Cell::new(Duration::ZERO),
            drift: Duration::ZERO,
        }
    }

    /// Every `sleep` overshoots by `drift`, like a loaded scheduler would.
    pub fn with_drift(mut self, drift: Duration) -> Self {
        self.drift = drift;
        self
    }

    pub fn advance(&self, duration: Duration) {
        self.offset.set(self.offset.get() + duration);
    }

    pub fn elapsed(&self) -> Duration {
        self.offset.get()
    }
}

impl Default for ManualClock {
    fn default() -> Self {
        Self::new(Local::now())
    }
}

impl Clock for ManualClock {
    fn now(&self) -> Instant {
        self.base + self.offset.get()
    }

    fn wall(&self) -> DateTime<Local> {
        self.wall_base + chrono::Duration::milliseconds(self.offset.get().as_millis() as i64)
    }

    fn sleep(&self, duration: Duration) {
        self.advance(duration + self.drift);
    }
}
