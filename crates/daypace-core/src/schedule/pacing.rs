//! Pacing configuration: how the day is framed around the tasks.

use serde::{Deserialize, Serialize};

use crate::time::{clamp_length, clamp_minute, lenient_i64, lenient_opt_i64, Minute};

/// Caller-supplied pacing preferences.
///
/// Fields hold raw values as entered. Anything negative or non-finite is
/// tolerated here and clamped by [`PacingConfig::normalized`].
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PacingConfig {
    /// Day start, minutes since midnight
    #[serde(default = "default_start", deserialize_with = "lenient_i64")]
    pub start: i64,
    /// Hard day end, minutes since midnight (None = open-ended)
    #[serde(default, deserialize_with = "lenient_opt_i64")]
    pub end: Option<i64>,
    /// Minutes of work between breaks (0 disables breaks)
    #[serde(default = "default_break_every", deserialize_with = "lenient_i64")]
    pub break_every: i64,
    #[serde(default = "default_break_length", deserialize_with = "lenient_i64")]
    pub break_length: i64,
    /// Warm-up ritual length (0 omits it)
    #[serde(default = "default_ritual_length", deserialize_with = "lenient_i64")]
    pub warmup_length: i64,
    /// Wrap-up ritual length (0 omits it)
    #[serde(default = "default_ritual_length", deserialize_with = "lenient_i64")]
    pub wrap_length: i64,
    #[serde(default = "default_true")]
    pub auto_lunch: bool,
}

fn default_start() -> i64 {
    9 * 60
}
fn default_break_every() -> i64 {
    90
}
fn default_break_length() -> i64 {
    10
}
fn default_ritual_length() -> i64 {
    10
}
fn default_true() -> bool {
    true
}

impl Default for PacingConfig {
    fn default() -> Self {
        Self {
            start: default_start(),
            end: None,
            break_every: default_break_every(),
            break_length: default_break_length(),
            warmup_length: default_ritual_length(),
            wrap_length: default_ritual_length(),
            auto_lunch: true,
        }
    }
}

/// Pacing with every value clamped into range.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NormalizedPacing {
    pub start: Minute,
    pub end: Option<Minute>,
    pub break_every: Minute,
    pub break_length: Minute,
    pub warmup_length: Minute,
    pub wrap_length: Minute,
    pub auto_lunch: bool,
}

impl PacingConfig {
    /// Clamp times of day into `[0, 1440]` and lengths to non-negative.
    pub fn normalized(&self) -> NormalizedPacing {
        NormalizedPacing {
            start: clamp_minute(self.start),
            end: self.end.map(clamp_minute),
            break_every: clamp_length(self.break_every),
            break_length: clamp_length(self.break_length),
            warmup_length: clamp_length(self.warmup_length),
            wrap_length: clamp_length(self.wrap_length),
            auto_lunch: self.auto_lunch,
        }
    }
}

impl NormalizedPacing {
    /// Periodic breaks need both a cadence and a length.
    pub fn breaks_enabled(&self) -> bool {
        self.break_every > 0 && self.break_length > 0
    }
}
