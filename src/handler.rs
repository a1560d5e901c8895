//! Function-handler variant.
//!
//! [`handle`] takes an event/context pair, runs the timer loop and answers
//! with a fixed `{"statusCode": 200, "body": "Logging completed"}` record.

use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use crate::clock::Clock;
use crate::config::Settings;
use crate::error::{Result, TickerError};
use crate::sink::LogSink;
use crate::timer::run_timer;

pub const COMPLETED_BODY: &str = "Logging completed";

/// Invocation context. Every field is optional.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Context {
    #[serde(default)]
    pub request_id: Option<String>,
    #[serde(default)]
    pub function_name: Option<String>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct Response {
    pub status_code: u16,
    pub body: String,
}

impl Response {
    pub fn ok(body: impl Into<String>) -> Self {
        Self {
            status_code: 200,
            body: body.into(),
        }
    }
}

/// Parses an event payload. Empty input is a `null` event.
pub fn parse_event(raw: &str) -> Result<Value> {
    if raw.trim().is_empty() {
        return Ok(Value::Null);
    }
    serde_json::from_str(raw).map_err(TickerError::Event)
}

/// The event is accepted but not inspected.
pub fn handle<C: Clock, S: LogSink + ?Sized>(
    event: &Value,
    context: &Context,
    settings: &Settings,
    clock: &C,
    sink: &mut S,
) -> Result<Response> {
    debug!(
        request_id = context.request_id.as_deref().unwrap_or("-"),
        function = context.function_name.as_deref().unwrap_or("-"),
        event = %event,
        "handler invoked"
    );

    run_timer(clock, sink, settings.duration, settings.interval)?;

    Ok(Response::ok(COMPLETED_BODY))
}
