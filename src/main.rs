//! ticker - log progress once per interval for a fixed duration.
//!
//! Usage:
//!   ticker run                 Log to stdout for the configured duration
//!   ticker task                Echo $SFN_TASK_INPUT first, then log
//!   ticker invoke --event JSON Run as a function handler and print the response

use clap::Parser;
use std::io;
use std::process::{self, ExitCode};
use std::sync::{Arc, Mutex};
use std::time::Instant;
use tracing::{error, warn};

use ticker::SystemClock;
use ticker::cli::{Cli, execute};

#[derive(Debug, Clone, Copy)]
enum Phase {
    Idle,
    Running(Instant),
}

fn main() -> ExitCode {
    tracing_subscriber::fmt()
        .with_writer(io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let settings = cli.settings()?;

    let phase = Arc::new(Mutex::new(Phase::Idle));
    install_interrupt_handler(Arc::clone(&phase))?;

    set_phase(&phase, Phase::Running(Instant::now()));
    let result = execute(&cli.command, &settings, &SystemClock, &mut io::stdout());
    set_phase(&phase, Phase::Idle);

    Ok(result?)
}

fn set_phase(phase: &Mutex<Phase>, next: Phase) {
    if let Ok(mut current) = phase.lock() {
        *current = next;
    }
}

fn install_interrupt_handler(phase: Arc<Mutex<Phase>>) -> Result<(), ctrlc::Error> {
    ctrlc::set_handler(move || {
        let current = phase.lock().map(|p| *p).unwrap_or(Phase::Idle);
        match current {
            Phase::Running(started) => {
                let elapsed_secs = started.elapsed().as_secs();
                warn!(elapsed_secs, "interrupted before completion");
            }
            Phase::Idle => warn!("interrupted"),
        }
        process::exit(130);
    })
}
