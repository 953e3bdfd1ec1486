//! Plain-text rendering of a schedule.

use daypace_core::{format_minute, BlockKind, Schedule, ScheduleSummary, Task};

/// One line per block, `HH:MM-HH:MM  kind  label`, then the finish time.
pub fn timeline(schedule: &Schedule, show_notes: bool) -> String {
    let mut out = String::new();
    if schedule.blocks.is_empty() {
        out.push_str("nothing scheduled\n");
    }

    for block in &schedule.blocks {
        let marker = if block.muted { " (cut short)" } else { "" };
        out.push_str(&format!(
            "{}-{}  {:<6}  {}{}\n",
            format_minute(block.start),
            format_minute(block.end),
            block.kind,
            block.label,
            marker
        ));

        let show_detail = show_notes || block.kind != BlockKind::Task;
        if let (true, Some(detail)) = (show_detail, &block.detail) {
            out.push_str(&format!("             {detail}\n"));
        }
    }

    out.push_str(&format!("finish {}\n", format_minute(schedule.finish)));
    out
}

pub fn summary(summary: &ScheduleSummary, tasks: &[Task]) -> String {
    let mut lines = vec![
        String::new(),
        format!("focus    {}m", summary.focus_minutes),
        format!("breaks   {}m", summary.break_minutes),
        format!("lunch    {}m", summary.lunch_minutes),
        format!(
            "tasks    {} scheduled, {} cut short",
            summary.scheduled_tasks, summary.muted_blocks
        ),
    ];

    if !summary.unscheduled.is_empty() {
        lines.push("not scheduled:".to_string());
        for id in &summary.unscheduled {
            let title = tasks
                .iter()
                .find(|t| &t.id == id)
                .map(|t| t.title.as_str())
                .unwrap_or(id.as_str());
            lines.push(format!("  - {title}"));
        }
    }

    lines.push(String::new());
    lines.join("\n")
}
