/// Timed logger loop: one progress line per interval until the duration elapses
use std::fmt;
use std::time::{Duration, Instant};

use crate::clock::Clock;
use crate::error::Result;
use crate::sink::LogSink;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// One progress record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tick {
    pub timestamp: String,
    pub elapsed_secs: u64,
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[{}] logging: {}s elapsed", self.timestamp, self.elapsed_secs)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    pub ticks: u64,
    pub elapsed: Duration,
}

/// A single run: fixed start point and duration.
#[derive(Debug, Clone)]
pub struct TimerSession {
    started: Instant,
    duration: Duration,
    interval: Duration,
}

impl TimerSession {
    pub fn start<C: Clock>(clock: &C, duration: Duration, interval: Duration) -> Self {
        Self {
            started: clock.now(),
            duration,
            interval,
        }
    }

    pub fn elapsed<C: Clock>(&self, clock: &C) -> Duration {
        clock.now().saturating_duration_since(self.started)
    }

    pub fn is_finished<C: Clock>(&self, clock: &C) -> bool {
        self.elapsed(clock) >= self.duration
    }

    pub fn completion_message(&self) -> String {
        let secs = self.duration.as_secs();
        format!("Finished logging for {} second{}.", secs, if secs == 1 { "" } else { "s" })
    }

    /// Emits ticks until the duration has elapsed, then the completion line.
    pub fn run<C: Clock, S: LogSink + ?Sized>(
        &self,
        clock: &C,
        sink: &mut S,
    ) -> Result<RunSummary> {
        let mut ticks = 0;

        while !self.is_finished(clock) {
            let tick = Tick {
                timestamp: clock.wall().format(TIMESTAMP_FORMAT).to_string(),
                elapsed_secs: self.elapsed(clock).as_secs(),
            };
            sink.progress(&tick)?;
            ticks += 1;

            // never sleep past the deadline
            let remaining = self.duration.saturating_sub(self.elapsed(clock));
            clock.sleep(self.interval.min(remaining));
        }

        sink.complete(&self.completion_message())?;

        Ok(RunSummary {
            ticks,
            elapsed: self.elapsed(clock),
        })
    }
}

/// Starts a session on `clock` and runs it to completion.
pub fn run_timer<C: Clock, S: LogSink + ?Sized>(
    clock: &C,
    sink: &mut S,
    duration: Duration,
    interval: Duration,
) -> Result<RunSummary> {
    TimerSession::start(clock, duration, interval).run(clock, sink)
}
