/// Human-readable durations such as `60s`, `1m30s` or `2h`
use std::time::Duration;
use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum DurationParseError {
    #[error("empty duration string")]
    Empty,

    #[error("unit '{0}' without a preceding number")]
    MissingNumber(char),

    #[error("number out of range: {0}")]
    InvalidNumber(String),

    #[error("unknown time unit: {0}")]
    UnknownUnit(char),

    #[error("duration must end with 'h', 'm' or 's'")]
    MissingUnit,
}

/// Parses `1h`, `25m`, `30s` and combinations like `1m30s`.
/// A bare number is read as seconds.
pub fn parse_duration(input: &str) -> Result<Duration, DurationParseError> {
    let input = input.trim().to_lowercase();
    if input.is_empty() {
        return Err(DurationParseError::Empty);
    }

    if let Ok(seconds) = input.parse::<u64>() {
        return Ok(Duration::from_secs(seconds));
    }

    let mut total_seconds = 0u64;
    let mut current_number = String::new();

    for ch in input.chars() {
        if ch.is_ascii_digit() {
            current_number.push(ch);
        } else if ch.is_alphabetic() {
            if current_number.is_empty() {
                return Err(DurationParseError::MissingNumber(ch));
            }

            let number: u64 = current_number
                .parse()
                .map_err(|_| DurationParseError::InvalidNumber(current_number.clone()))?;

            let multiplier = match ch {
                'h' => 3600,
                'm' => 60,
                's' => 1,
                _ => return Err(DurationParseError::UnknownUnit(ch)),
            };

            total_seconds = number
                .checked_mul(multiplier)
                .and_then(|secs| total_seconds.checked_add(secs))
                .ok_or_else(|| DurationParseError::InvalidNumber(current_number.clone()))?;

            current_number.clear();
        } else if !ch.is_whitespace() {
            return Err(DurationParseError::UnknownUnit(ch));
        }
    }

    if !current_number.is_empty() {
        return Err(DurationParseError::MissingUnit);
    }

    Ok(Duration::from_secs(total_seconds))
}
