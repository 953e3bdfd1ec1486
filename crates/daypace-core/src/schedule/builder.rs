//! Greedy single-pass day builder.
//!
//! Tasks are put in queue order once, up front. A cursor then walks the
//! day from the configured start, emitting a warm-up, the tasks with
//! periodic breaks and an optional lunch between them, and a wrap-up.
//! The configured end (or midnight when none is set) is a hard stop:
//! blocks that would cross it are truncated and muted.

use tracing::debug;

use super::pacing::{NormalizedPacing, PacingConfig};
use super::{BlockKind, Schedule, ScheduleBlock};
use crate::task::{order_tasks, Task};
use crate::time::{Minute, DAY_MINUTES};

/// Fixed wall-clock lunch anchor (12:30).
pub const LUNCH_START: Minute = 12 * 60 + 30;
/// End of the fixed lunch window (13:05).
pub const LUNCH_END: Minute = LUNCH_START + 35;

const WARMUP_DETAIL: &str = "Settle in and review the plan";
const BREAK_DETAIL: &str = "Stand up, stretch, refill water";
const BUFFER_DETAIL: &str = "Open time before lunch";
const WRAP_DETAIL: &str = "Review the day and note loose ends";

/// Lay out a day from `tasks` and `config`.
///
/// Never fails: out-of-range configuration is clamped and tasks with a
/// non-positive duration are left out. Identical inputs always give an
/// identical schedule.
pub fn build(tasks: &[Task], config: &PacingConfig) -> Schedule {
    let pacing = config.normalized();
    let mut walk = Walk::new(pacing);

    walk.warmup();
    for task in order_tasks(tasks) {
        if !task.is_schedulable() {
            debug!(
                task_id = %task.id,
                duration = task.duration_minutes,
                "skipping task without duration"
            );
            continue;
        }
        if let Step::Stop = walk.place(task) {
            break;
        }
    }
    walk.wrap();

    walk.finish()
}

enum Step {
    Continue,
    Stop,
}

struct Walk {
    pacing: NormalizedPacing,
    cursor: Minute,
    since_break: u64,
    blocks: Vec<ScheduleBlock>,
    structural_count: usize,
}

impl Walk {
    fn new(pacing: NormalizedPacing) -> Self {
        Self {
            pacing,
            cursor: pacing.start,
            since_break: 0,
            blocks: Vec::new(),
            structural_count: 0,
        }
    }

    /// Configured end, or midnight for an open-ended day.
    fn hard_end(&self) -> Minute {
        self.pacing.end.unwrap_or(DAY_MINUTES)
    }

    fn fits(&self, end: u64) -> bool {
        end <= u64::from(self.hard_end())
    }

    fn warmup(&mut self) {
        let length = self.pacing.warmup_length;
        if length == 0 {
            return;
        }

        let planned = u64::from(self.cursor) + u64::from(length);
        let end = self.truncate(planned);
        if end <= self.cursor {
            debug!(cursor = self.cursor, "no room for warm-up");
            return;
        }

        let muted = u64::from(end) < planned;
        self.push_structural(
            BlockKind::Warmup,
            "Warm-up",
            end,
            Some(WARMUP_DETAIL),
            muted,
        );
        self.since_break = 0;
    }

    fn place(&mut self, task: &Task) -> Step {
        if self.cursor >= self.hard_end() {
            debug!(cursor = self.cursor, "hard end reached, stopping");
            return Step::Stop;
        }

        let duration = task.duration_minutes.max(0) as u64;

        if self.pacing.breaks_enabled() && self.since_break >= u64::from(self.pacing.break_every) {
            let break_end = u64::from(self.cursor) + u64::from(self.pacing.break_length);
            if self.fits(break_end) {
                self.push_structural(
                    BlockKind::Break,
                    "Break",
                    break_end as Minute,
                    Some(BREAK_DETAIL),
                    false,
                );
                self.since_break = 0;
            } else {
                debug!(
                    cursor = self.cursor,
                    "break does not fit before end, skipping"
                );
            }
        }

        if self.pacing.auto_lunch
            && self.cursor < LUNCH_START
            && u64::from(self.cursor) + duration > u64::from(LUNCH_START)
        {
            if self.fits(u64::from(LUNCH_END)) {
                self.push_structural(
                    BlockKind::Buffer,
                    "Buffer",
                    LUNCH_START,
                    Some(BUFFER_DETAIL),
                    false,
                );
                self.push_structural(BlockKind::Lunch, "Lunch", LUNCH_END, None, false);
            } else {
                debug!(
                    cursor = self.cursor,
                    "lunch does not fit before end, cursor still moves past it"
                );
            }
            self.cursor = LUNCH_END;
            self.since_break = 0;
        }

        let planned = u64::from(self.cursor) + duration;
        let end = self.truncate(planned);
        if end <= self.cursor {
            debug!(task_id = %task.id, cursor = self.cursor, "no room left for task");
            return Step::Continue;
        }

        let muted = u64::from(end) < planned;
        if muted {
            debug!(task_id = %task.id, planned, end, "task truncated at hard end");
        }

        self.blocks.push(ScheduleBlock {
            id: task.id.clone(),
            kind: BlockKind::Task,
            label: task.title.clone(),
            start: self.cursor,
            end,
            detail: task.note.clone(),
            task_id: Some(task.id.clone()),
            muted,
        });
        self.cursor = end;
        // Counts attempted work, not the truncated span.
        self.since_break += duration;

        Step::Continue
    }

    fn wrap(&mut self) {
        let length = self.pacing.wrap_length;
        if length == 0 {
            return;
        }

        let end = u64::from(self.cursor) + u64::from(length);
        if self.fits(end) {
            self.push_structural(
                BlockKind::Wrap,
                "Wrap-up",
                end as Minute,
                Some(WRAP_DETAIL),
                false,
            );
        } else {
            debug!(
                cursor = self.cursor,
                "wrap-up does not fit before end, skipping"
            );
        }
    }

    fn finish(self) -> Schedule {
        Schedule {
            blocks: self.blocks,
            finish: self.cursor,
        }
    }

    fn truncate(&self, planned: u64) -> Minute {
        planned.min(u64::from(self.hard_end())) as Minute
    }

    /// Emit a non-task block from the cursor to `end` and advance.
    fn push_structural(
        &mut self,
        kind: BlockKind,
        label: &str,
        end: Minute,
        detail: Option<&str>,
        muted: bool,
    ) {
        self.blocks.push(ScheduleBlock {
            id: format!("{}-{}", kind.as_str(), self.structural_count),
            kind,
            label: label.to_string(),
            start: self.cursor,
            end,
            detail: detail.map(str::to_string),
            task_id: None,
            muted,
        });
        self.structural_count += 1;
        self.cursor = end;
    }
}
