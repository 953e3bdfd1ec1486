//! Minute-of-day helpers.
//!
//! The builder only deals in integer minutes since midnight. Conversion
//! to and from `HH:MM` strings lives here for the CLI and config layers.

use chrono::{Local, NaiveTime, Timelike};
use serde::{Deserialize, Deserializer};

use crate::error::ValidationError;

/// Minutes since midnight, always within `0..=DAY_MINUTES`.
pub type Minute = u32;

/// Length of the day in minutes; also the latest representable minute.
pub const DAY_MINUTES: Minute = 1440;

/// Clamp a raw minute value into `[0, 1440]`.
pub fn clamp_minute(raw: i64) -> Minute {
    raw.clamp(0, DAY_MINUTES as i64) as Minute
}

/// Clamp a raw length (duration in minutes) to be non-negative.
pub fn clamp_length(raw: i64) -> Minute {
    raw.clamp(0, DAY_MINUTES as i64) as Minute
}

/// Format a minute-of-day as `HH:MM`. `1440` renders as `24:00`.
pub fn format_minute(minute: Minute) -> String {
    let minute = minute.min(DAY_MINUTES);
    format!("{:02}:{:02}", minute / 60, minute % 60)
}

/// Parse `H:MM` or `HH:MM` into a minute-of-day.
///
/// `24:00` is accepted as the end of the day.
pub fn parse_hhmm(input: &str) -> Result<Minute, ValidationError> {
    let trimmed = input.trim();
    if trimmed == "24:00" {
        return Ok(DAY_MINUTES);
    }

    let time = NaiveTime::parse_from_str(trimmed, "%H:%M")
        .map_err(|_| ValidationError::InvalidTime(input.to_string()))?;
    Ok(time.hour() * 60 + time.minute())
}

/// Current local wall-clock time as a minute-of-day.
pub fn now_minute() -> Minute {
    let now = Local::now();
    now.hour() * 60 + now.minute()
}

#[derive(Deserialize)]
#[serde(untagged)]
enum RawNumber {
    Int(i64),
    Float(f64),
}

impl RawNumber {
    fn to_i64(self) -> i64 {
        match self {
            RawNumber::Int(n) => n,
            RawNumber::Float(f) if f.is_finite() => f.trunc() as i64,
            RawNumber::Float(_) => 0,
        }
    }
}

/// Accept any integer or float; non-finite values become 0.
pub(crate) fn lenient_i64<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    RawNumber::deserialize(deserializer).map(RawNumber::to_i64)
}

/// Optional variant of [`lenient_i64`].
pub(crate) fn lenient_opt_i64<'de, D>(deserializer: D) -> Result<Option<i64>, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<RawNumber>::deserialize(deserializer).map(|raw| raw.map(RawNumber::to_i64))
}
