/// Configuration module for run settings
use serde::{Deserialize, Serialize};
use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::duration::parse_duration;
use crate::error::{Result, TickerError};

pub const DEFAULT_DURATION: Duration = Duration::from_secs(60);
pub const DEFAULT_INTERVAL: Duration = Duration::from_secs(1);
pub const DEFAULT_INPUT_VAR: &str = "SFN_TASK_INPUT";

/// On-disk form, `~/.config/ticker/config.json`.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq)]
pub struct Config {
    #[serde(default = "default_duration")]
    pub duration: String,
    #[serde(default = "default_interval")]
    pub interval: String,
    #[serde(default = "default_input_var")]
    pub input_var: String,
}

fn default_duration() -> String {
    "60s".to_string()
}

fn default_interval() -> String {
    "1s".to_string()
}

fn default_input_var() -> String {
    DEFAULT_INPUT_VAR.to_string()
}

impl Default for Config {
    fn default() -> Self {
        Self {
            duration: default_duration(),
            interval: default_interval(),
            input_var: default_input_var(),
        }
    }
}

/// Validated settings a run is driven by.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub duration: Duration,
    pub interval: Duration,
    pub input_var: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            duration: DEFAULT_DURATION,
            interval: DEFAULT_INTERVAL,
            input_var: DEFAULT_INPUT_VAR.to_string(),
        }
    }
}

impl Config {
    pub fn from_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path).map_err(|source| TickerError::ConfigRead {
            path: path.to_path_buf(),
            source,
        })?;
        serde_json::from_str(&content).map_err(|source| TickerError::ConfigParse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// An explicit path must exist; the default path is optional.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::from_file(path);
        }

        let path = default_config_path();
        if path.exists() {
            return Self::from_file(&path);
        }

        Ok(Self::default())
    }

    /// Applies CLI overrides and validates the result.
    pub fn resolve(&self, duration: Option<&str>, interval: Option<&str>) -> Result<Settings> {
        let duration = parse(duration.unwrap_or(&self.duration))?;
        let interval = parse(interval.unwrap_or(&self.interval))?;

        if interval.is_zero() {
            return Err(TickerError::InvalidConfig(
                "interval must be greater than 0".to_string(),
            ));
        }
        if self.input_var.trim().is_empty() {
            return Err(TickerError::InvalidConfig(
                "input_var must not be empty".to_string(),
            ));
        }

        Ok(Settings {
            duration,
            interval,
            input_var: self.input_var.clone(),
        })
    }
}

fn parse(input: &str) -> Result<Duration> {
    parse_duration(input).map_err(|source| TickerError::Duration {
        input: input.to_string(),
        source,
    })
}

pub fn default_config_path() -> PathBuf {
    if let Some(home) = env::var_os("HOME") {
        PathBuf::from(home).join(".config").join("ticker").join("config.json")
    } else {
        PathBuf::from("ticker-config.json")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn defaults_resolve_to_sixty_by_one() {
        let settings = Config::default().resolve(None, None).unwrap();
        assert_eq!(settings, Settings::default());
    }

    #[test]
    fn partial_json_fills_defaults() {
        let config: Config = serde_json::from_str(r#"{ "duration": "2m" }"#).unwrap();
        assert_eq!(config.interval, "1s");
        assert_eq!(config.input_var, "SFN_TASK_INPUT");

        let settings = config.resolve(None, None).unwrap();
        assert_eq!(settings.duration, Duration::from_secs(120));
    }

    #[test]
    fn cli_overrides_take_priority() {
        let config = Config {
            duration: "10m".to_string(),
            ..Config::default()
        };
        let settings = config.resolve(Some("5s"), Some("500")).unwrap();
        assert_eq!(settings.duration, Duration::from_secs(5));
        assert_eq!(settings.interval, Duration::from_secs(500));
    }

    #[test]
    fn zero_interval_is_rejected() {
        let err = Config::default().resolve(None, Some("0s")).unwrap_err();
        assert!(matches!(err, TickerError::InvalidConfig(_)));
    }

    #[test]
    fn bad_duration_names_the_input() {
        let err = Config::default().resolve(Some("soon"), None).unwrap_err();
        assert!(matches!(err, TickerError::Duration { ref input, .. } if input == "soon"));
    }

    #[test]
    fn loads_from_explicit_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let json = r#"{ "duration": "30s", "interval": "2s", "input_var": "PAYLOAD" }"#;
        write!(file, "{}", json).unwrap();

        let config = Config::load(Some(file.path())).unwrap();
        assert_eq!(config.input_var, "PAYLOAD");
        let settings = config.resolve(None, None).unwrap();
        assert_eq!(settings.interval, Duration::from_secs(2));
    }

    #[test]
    fn invalid_json_is_a_parse_error() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, "not json").unwrap();

        let err = Config::load(Some(file.path())).unwrap_err();
        assert!(matches!(err, TickerError::ConfigParse { .. }));
    }

    #[test]
    fn missing_explicit_file_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = Config::load(Some(dir.path().join("absent.json").as_path())).unwrap_err();
        assert!(matches!(err, TickerError::ConfigRead { .. }));
    }
}
