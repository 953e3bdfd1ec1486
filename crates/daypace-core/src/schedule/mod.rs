//! Schedule types and the day builder.
//!
//! A [`Schedule`] is an ordered run of [`ScheduleBlock`]s produced by
//! [`build`] from a task list and a [`PacingConfig`]. Blocks are laid out
//! by a single forward-moving cursor, so they never overlap and never go
//! back in time.

mod builder;
mod pacing;
pub mod presets;
mod summary;

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::time::Minute;

pub use builder::{build, LUNCH_END, LUNCH_START};
pub use pacing::{NormalizedPacing, PacingConfig};
pub use summary::ScheduleSummary;

/// Kind of schedule block.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum BlockKind {
    /// Opening ritual before the first task
    Warmup,
    /// Work on a single task
    Task,
    /// Periodic rest between tasks
    Break,
    /// Fixed midday lunch window
    Lunch,
    /// Closing ritual after the last task
    Wrap,
    /// Unassigned time held open ahead of lunch
    Buffer,
}

impl BlockKind {
    pub fn as_str(self) -> &'static str {
        match self {
            BlockKind::Warmup => "warmup",
            BlockKind::Task => "task",
            BlockKind::Break => "break",
            BlockKind::Lunch => "lunch",
            BlockKind::Wrap => "wrap",
            BlockKind::Buffer => "buffer",
        }
    }
}

impl fmt::Display for BlockKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

/// A positioned interval in the day.
///
/// `start` and `end` are minutes since midnight with `start <= end <= 1440`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleBlock {
    pub id: String,
    pub kind: BlockKind,
    pub label: String,
    pub start: Minute,
    pub end: Minute,
    /// Supporting text shown under the label
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub detail: Option<String>,
    /// Originating task, only set for task blocks
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub task_id: Option<String>,
    /// Block was cut short by the day's hard end
    #[serde(default)]
    pub muted: bool,
}

impl ScheduleBlock {
    /// Get total duration in minutes
    pub fn duration(&self) -> Minute {
        self.end.saturating_sub(self.start)
    }
}

/// Output of a single [`build`] call.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Schedule {
    pub blocks: Vec<ScheduleBlock>,
    /// Final cursor position after the walk
    pub finish: Minute,
}

impl Schedule {
    /// Blocks that carry task work, in placement order.
    pub fn task_blocks(&self) -> impl Iterator<Item = &ScheduleBlock> {
        self.blocks.iter().filter(|b| b.kind == BlockKind::Task)
    }

    /// Blocks of a given kind, in placement order.
    pub fn blocks_of(&self, kind: BlockKind) -> impl Iterator<Item = &ScheduleBlock> {
        self.blocks.iter().filter(move |b| b.kind == kind)
    }
}
