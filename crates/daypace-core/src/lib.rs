//! # Daypace Core Library
//!
//! This library provides the core logic for Daypace, a single-day planner.
//! Given a list of tasks and pacing preferences it lays out a deterministic
//! run of time-boxed blocks: warm-up, tasks with periodic breaks and an
//! optional lunch, and a wrap-up.
//!
//! ## Architecture
//!
//! - **Schedule**: the pure, infallible day builder and its result types
//! - **Task**: the task model and queue ordering
//! - **Storage**: TOML configuration and JSON task persistence
//! - **Time**: minute-of-day helpers for formatting and parsing
//!
//! ## Key Components
//!
//! - [`build`]: lay out a day from tasks and a [`PacingConfig`]
//! - [`TaskStore`]: flat task collection on disk
//! - [`Config`]: stored pacing and display preferences

pub mod error;
pub mod schedule;
pub mod storage;
pub mod task;
pub mod time;

pub use error::{ConfigError, CoreError, ValidationError};
pub use schedule::presets::{preset, preset_names, presets, Preset};
pub use schedule::{build, BlockKind, PacingConfig, Schedule, ScheduleBlock, ScheduleSummary};
pub use storage::{Config, DisplayConfig, NewTask, TaskStore};
pub use task::{order_tasks, EnergyLevel, Task};
pub use time::{format_minute, parse_hhmm, Minute, DAY_MINUTES};
