//! Built-in pacing presets.
//!
//! Presets are full [`PacingConfig`] values that can be applied over the
//! stored configuration in one step.

use super::PacingConfig;

/// Name of the preset matching [`PacingConfig::default`].
pub const DEFAULT_PRESET: &str = "balanced";

/// A named pacing preset.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Preset {
    pub name: &'static str,
    pub description: &'static str,
    pub pacing: PacingConfig,
}

/// All built-in presets, default first.
pub fn presets() -> Vec<Preset> {
    vec![
        Preset {
            name: DEFAULT_PRESET,
            description: "9:00 start, open end, 10 min break every 90 min, lunch on",
            pacing: PacingConfig::default(),
        },
        Preset {
            name: "deep-focus",
            description: "Long uninterrupted stretches with short rituals",
            pacing: PacingConfig {
                start: 8 * 60,
                end: Some(17 * 60),
                break_every: 120,
                break_length: 15,
                warmup_length: 5,
                wrap_length: 5,
                auto_lunch: true,
            },
        },
        Preset {
            name: "gentle",
            description: "Late start, frequent breaks, generous rituals",
            pacing: PacingConfig {
                start: 9 * 60 + 30,
                end: Some(16 * 60 + 30),
                break_every: 50,
                break_length: 10,
                warmup_length: 20,
                wrap_length: 15,
                auto_lunch: true,
            },
        },
        Preset {
            name: "sprint",
            description: "Pomodoro cadence, no lunch, no rituals",
            pacing: PacingConfig {
                start: 8 * 60,
                end: None,
                break_every: 25,
                break_length: 5,
                warmup_length: 0,
                wrap_length: 0,
                auto_lunch: false,
            },
        },
    ]
}

/// Look up a preset by name (case-insensitive).
pub fn preset(name: &str) -> Option<Preset> {
    let wanted = name.trim().to_ascii_lowercase();
    presets().into_iter().find(|p| p.name == wanted)
}

pub fn preset_names() -> Vec<&'static str> {
    presets().iter().map(|p| p.name).collect()
}
