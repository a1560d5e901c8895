//! ticker - log a timestamped progress line every second for a fixed duration.
//!
//! Three entry points share one timer loop:
//! - [`timer::run_timer`] for a bare run,
//! - [`task::run_task`], which first echoes an input payload from the environment,
//! - [`handler::handle`], a function-style handler returning a fixed response.

pub mod cli;
pub mod clock;
pub mod config;
pub mod duration;
pub mod error;
pub mod handler;
pub mod sink;
pub mod task;
pub mod timer;

pub use clock::{Clock, ManualClock, SystemClock};
pub use config::{Config, Settings};
pub use error::{Result, TickerError};
pub use handler::{Context, Response, handle};
pub use sink::{LogSink, MemorySink, StdoutSink, TracingSink};
pub use task::{TaskInput, run_task};
pub use timer::{RunSummary, Tick, TimerSession, run_timer};
