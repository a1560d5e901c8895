//! Error types shared by the library and the binary.

use std::path::PathBuf;
use thiserror::Error;

use crate::duration::DurationParseError;

#[derive(Debug, Error)]
pub enum TickerError {
    /// Writing to the output sink failed.
    #[error("failed to write output: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to read config file '{path}': {source}")]
    ConfigRead {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid config format in '{path}': {source}")]
    ConfigParse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid duration '{input}': {source}")]
    Duration {
        input: String,
        #[source]
        source: DurationParseError,
    },

    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("invalid event payload: {0}")]
    Event(#[source] serde_json::Error),

    #[error("failed to encode response: {0}")]
    Encode(#[source] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, TickerError>;
