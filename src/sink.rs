//! Output destinations for the timer loop.

use std::io::{self, Write};
use tracing::info;

use crate::error::Result;
use crate::timer::Tick;

/// Where progress and completion lines go.
pub trait LogSink {
    fn progress(&mut self, tick: &Tick) -> Result<()>;

    fn complete(&mut self, message: &str) -> Result<()>;

    /// Verbatim echo of an input payload before the loop starts.
    fn echo(&mut self, line: &str) -> Result<()>;
}

/// Plain lines on a writer, stdout by default.
pub struct StdoutSink<W: Write = io::Stdout> {
    out: W,
}

impl StdoutSink {
    pub fn new() -> Self {
        Self { out: io::stdout() }
    }
}

impl Default for StdoutSink {
    fn default() -> Self {
        Self::new()
    }
}

impl<W: Write> StdoutSink<W> {
    pub fn with_writer(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }

    fn line(&mut self, line: &str) -> Result<()> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        Ok(())
    }
}

impl<W: Write> LogSink for StdoutSink<W> {
    fn progress(&mut self, tick: &Tick) -> Result<()> {
        self.line(&tick.to_string())
    }

    fn complete(&mut self, message: &str) -> Result<()> {
        self.line(message)
    }

    fn echo(&mut self, line: &str) -> Result<()> {
        self.line(line)
    }
}

/// Routes every line through `tracing` at info level.
#[derive(Debug, Default)]
pub struct TracingSink;

impl LogSink for TracingSink {
    fn progress(&mut self, tick: &Tick) -> Result<()> {
        info!(elapsed_secs = tick.elapsed_secs, "{}", tick);
        Ok(())
    }

    fn complete(&mut self, message: &str) -> Result<()> {
        info!("{}", message);
        Ok(())
    }

    fn echo(&mut self, line: &str) -> Result<()> {
        info!("{}", line);
        Ok(())
    }
}

/// Keeps every emitted line in memory.
#[derive(Debug, Default)]
pub struct MemorySink {
    pub lines: Vec<String>,
    pub ticks: Vec<Tick>,
}

impl LogSink for MemorySink {
    fn progress(&mut self, tick: &Tick) -> Result<()> {
        self.lines.push(tick.to_string());
        self.ticks.push(tick.clone());
        Ok(())
    }

    fn complete(&mut self, message: &str) -> Result<()> {
        self.lines.push(message.to_string());
        Ok(())
    }

    fn echo(&mut self, line: &str) -> Result<()> {
        self.lines.push(line.to_string());
        Ok(())
    }
}
