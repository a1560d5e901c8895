//! Task variant: echo an opaque input payload from the environment, then run
//! the timer loop.

use std::env;

use crate::clock::Clock;
use crate::config::Settings;
use crate::error::Result;
use crate::sink::LogSink;
use crate::timer::{RunSummary, run_timer};

/// Value used when the input variable is unset, quotes included.
pub const NO_INPUT: &str = "\"no input\"";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TaskInput {
    pub var: String,
    pub value: String,
}

impl TaskInput {
    pub fn from_env(var: &str) -> Self {
        Self::from_value(var, env::var(var).ok())
    }

    pub fn from_value(var: &str, value: Option<String>) -> Self {
        Self {
            var: var.to_string(),
            value: value.unwrap_or_else(|| NO_INPUT.to_string()),
        }
    }

    pub fn echo_line(&self) -> String {
        format!("{}: {}", self.var, self.value)
    }
}

pub fn run_task<C: Clock, S: LogSink + ?Sized>(
    input: &TaskInput,
    settings: &Settings,
    clock: &C,
    sink: &mut S,
) -> Result<RunSummary> {
    sink.echo(&input.echo_line())?;
    run_timer(clock, sink, settings.duration, settings.interval)
}
