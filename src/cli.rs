//! Command-line surface shared by the binary and its tests.

use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use crate::clock::Clock;
use crate::config::{Config, Settings};
use crate::error::{Result, TickerError};
use crate::handler::{Context, handle, parse_event};
use crate::sink::{StdoutSink, TracingSink};
use crate::task::{TaskInput, run_task};
use crate::timer::run_timer;

/// ticker - log progress once per interval for a fixed duration
#[derive(Parser, Debug)]
#[command(name = "ticker")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Path to configuration file (default: ~/.config/ticker/config.json)
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// How long to run, e.g. 60s, 1m30s (overrides config file)
    #[arg(short, long, global = true)]
    pub duration: Option<String>,

    /// Time between progress lines (overrides config file)
    #[arg(short, long, global = true)]
    pub interval: Option<String>,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug, Clone, PartialEq)]
pub enum Commands {
    /// Log progress lines to stdout
    Run,

    /// Echo the task input variable, then log progress lines
    Task,

    /// Run as a function handler and print the JSON response
    Invoke {
        /// Event payload as JSON
        #[arg(long, default_value = "")]
        event: String,

        /// Request id recorded in the invocation context
        #[arg(long)]
        request_id: Option<String>,
    },
}

impl Cli {
    /// Loads the config file and applies the duration/interval flags.
    pub fn settings(&self) -> Result<Settings> {
        let config = Config::load(self.config.as_deref())?;
        config.resolve(self.duration.as_deref(), self.interval.as_deref())
    }
}

/// Runs one command. `run` and `task` write their lines to `out`; `invoke`
/// logs through `tracing` and writes only the response JSON to `out`.
pub fn execute<C: Clock, W: Write>(
    command: &Commands,
    settings: &Settings,
    clock: &C,
    out: &mut W,
) -> Result<()> {
    match command {
        Commands::Run => {
            let mut sink = StdoutSink::with_writer(out);
            let summary = run_timer(clock, &mut sink, settings.duration, settings.interval)?;
            info!(ticks = summary.ticks, "run finished");
        }
        Commands::Task => {
            let input = TaskInput::from_env(&settings.input_var);
            let summary = run_task(&input, settings, clock, &mut StdoutSink::with_writer(out))?;
            info!(ticks = summary.ticks, "task finished");
        }
        Commands::Invoke { event, request_id } => {
            let event = parse_event(event)?;
            let context = Context {
                request_id: request_id.clone(),
                function_name: Some("ticker".to_string()),
            };
            let response = handle(&event, &context, settings, clock, &mut TracingSink)?;
            let json = serde_json::to_string_pretty(&response).map_err(TickerError::Encode)?;
            writeln!(out, "{}", json)?;
            out.flush()?;
        }
    }

    Ok(())
}
