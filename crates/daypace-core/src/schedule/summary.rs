//! Totals over a built schedule.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;

use super::{BlockKind, Schedule};
use crate::task::{order_tasks, Task};
use crate::time::Minute;

/// Aggregate view of a [`Schedule`] against the tasks it was built from.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ScheduleSummary {
    /// Minutes spent in task blocks
    pub focus_minutes: Minute,
    pub break_minutes: Minute,
    pub lunch_minutes: Minute,
    /// Blocks cut short by the hard end
    pub muted_blocks: usize,
    pub scheduled_tasks: usize,
    /// Tasks that got no block, in queue order
    pub unscheduled: Vec<String>,
    pub finish: Minute,
}

impl Schedule {
    /// Summarize this schedule. `tasks` should be the list passed to
    /// [`super::build`].
    pub fn summary(&self, tasks: &[Task]) -> ScheduleSummary {
        let minutes_of =
            |kind: BlockKind| -> Minute { self.blocks_of(kind).map(|b| b.duration()).sum() };

        let placed: HashSet<&str> = self
            .task_blocks()
            .filter_map(|b| b.task_id.as_deref())
            .collect();

        let unscheduled = order_tasks(tasks)
            .into_iter()
            .filter(|t| !placed.contains(t.id.as_str()))
            .map(|t| t.id.clone())
            .collect();

        ScheduleSummary {
            focus_minutes: minutes_of(BlockKind::Task),
            break_minutes: minutes_of(BlockKind::Break),
            lunch_minutes: minutes_of(BlockKind::Lunch),
            muted_blocks: self.blocks.iter().filter(|b| b.muted).count(),
            scheduled_tasks: placed.len(),
            unscheduled,
            finish: self.finish,
        }
    }
}
