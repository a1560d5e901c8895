use std::time::Duration;

use clap::Parser;
use serde_json::{Value, json};
use ticker::cli::{Cli, Commands, execute};
use ticker::{ManualClock, Settings};

fn settings_for(args: &[&str]) -> (Cli, Settings) {
    let cli = Cli::try_parse_from(args).unwrap();
    let config = ticker::Config::default();
    let settings = config
        .resolve(cli.duration.as_deref(), cli.interval.as_deref())
        .unwrap();
    (cli, settings)
}

#[test]
fn invoke_prints_only_the_response_json() {
    let (cli, settings) =
        settings_for(&["ticker", "invoke", "--event", r#"{"a": 1}"#, "--duration", "3s"]);
    let clock = ManualClock::default();
    let mut out = Vec::new();

    execute(&cli.command, &settings, &clock, &mut out).unwrap();

    let stdout = String::from_utf8(out).unwrap();
    let parsed: Value = serde_json::from_str(&stdout).unwrap();
    assert_eq!(parsed, json!({ "statusCode": 200, "body": "Logging completed" }));
    assert!(!stdout.contains("logging:"));
    assert_eq!(clock.elapsed(), Duration::from_secs(3));
}

#[test]
fn invoke_rejects_malformed_event() {
    let (cli, settings) = settings_for(&["ticker", "invoke", "--event", "{nope"]);
    let mut out = Vec::new();

    let err = execute(&cli.command, &settings, &ManualClock::default(), &mut out).unwrap_err();

    assert!(matches!(err, ticker::TickerError::Event(_)));
    assert!(out.is_empty());
}

#[test]
fn run_writes_progress_then_completion() {
    let (cli, settings) = settings_for(&["ticker", "-d", "4s", "-i", "2s", "run"]);
    assert_eq!(cli.command, Commands::Run);
    let mut out = Vec::new();

    execute(&cli.command, &settings, &ManualClock::default(), &mut out).unwrap();

    let stdout = String::from_utf8(out).unwrap();
    let lines: Vec<&str> = stdout.lines().collect();
    assert_eq!(lines.len(), 3);
    assert!(lines[0].ends_with("logging: 0s elapsed"));
    assert!(lines[1].ends_with("logging: 2s elapsed"));
    assert_eq!(lines[2], "Finished logging for 4 seconds.");
}

#[test]
fn task_echoes_configured_variable_first() {
    let (cli, mut settings) = settings_for(&["ticker", "task", "--duration", "1s"]);
    settings.input_var = "TICKER_CLI_TEST_INPUT".to_string();
    // SAFETY: no other test touches this variable.
    unsafe { std::env::set_var(&settings.input_var, "abc") };
    let mut out = Vec::new();

    execute(&cli.command, &settings, &ManualClock::default(), &mut out).unwrap();

    let stdout = String::from_utf8(out).unwrap();
    assert_eq!(stdout.lines().next(), Some("TICKER_CLI_TEST_INPUT: abc"));
    assert_eq!(stdout.lines().last(), Some("Finished logging for 1 second."));
}

#[test]
fn missing_subcommand_is_a_usage_error() {
    assert!(Cli::try_parse_from(["ticker"]).is_err());
}
