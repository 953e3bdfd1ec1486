//! `daypace plan`: build and print the day.

use clap::Args;
use daypace_core::time::now_minute;
use daypace_core::{build, parse_hhmm, preset, Config, PacingConfig, TaskStore};
use serde::Serialize;

use crate::render;

#[derive(Args)]
pub struct PlanArgs {
    /// Start from a built-in preset instead of the stored pacing
    #[arg(long)]
    preset: Option<String>,
    /// Day start as HH:MM, or "now"
    #[arg(long)]
    start: Option<String>,
    /// Hard day end as HH:MM
    #[arg(long, conflicts_with = "no_end")]
    end: Option<String>,
    /// Leave the day open-ended
    #[arg(long)]
    no_end: bool,
    /// Minutes of work between breaks (0 disables breaks)
    #[arg(long)]
    break_every: Option<i64>,
    /// Break length in minutes
    #[arg(long)]
    break_length: Option<i64>,
    /// Warm-up length in minutes (0 omits it)
    #[arg(long)]
    warmup: Option<i64>,
    /// Wrap-up length in minutes (0 omits it)
    #[arg(long)]
    wrap: Option<i64>,
    /// Insert the 12:30 lunch block
    #[arg(long, conflicts_with = "no_lunch")]
    lunch: bool,
    /// Never insert lunch
    #[arg(long)]
    no_lunch: bool,
    /// Print JSON instead of the timeline
    #[arg(long)]
    json: bool,
    /// Append totals and unscheduled tasks
    #[arg(long)]
    summary: bool,
}

#[derive(Serialize)]
struct PlanOutput<'a> {
    #[serde(flatten)]
    schedule: &'a daypace_core::Schedule,
    #[serde(skip_serializing_if = "Option::is_none")]
    summary: Option<daypace_core::ScheduleSummary>,
}

impl PlanArgs {
    /// Stored (or preset) pacing with command-line overrides on top.
    fn pacing(&self, config: &Config) -> Result<PacingConfig, Box<dyn std::error::Error>> {
        let mut pacing = match &self.preset {
            Some(name) => {
                preset(name)
                    .ok_or_else(|| format!("unknown preset: {name}"))?
                    .pacing
            }
            None => config.pacing.clone(),
        };

        if let Some(start) = &self.start {
            pacing.start = if start.eq_ignore_ascii_case("now") {
                i64::from(now_minute())
            } else {
                i64::from(parse_hhmm(start)?)
            };
        }
        if let Some(end) = &self.end {
            pacing.end = Some(i64::from(parse_hhmm(end)?));
        }
        if self.no_end {
            pacing.end = None;
        }
        if let Some(minutes) = self.break_every {
            pacing.break_every = minutes;
        }
        if let Some(minutes) = self.break_length {
            pacing.break_length = minutes;
        }
        if let Some(minutes) = self.warmup {
            pacing.warmup_length = minutes;
        }
        if let Some(minutes) = self.wrap {
            pacing.wrap_length = minutes;
        }
        if self.lunch {
            pacing.auto_lunch = true;
        }
        if self.no_lunch {
            pacing.auto_lunch = false;
        }
        Ok(pacing)
    }
}

pub fn run(args: PlanArgs) -> Result<(), Box<dyn std::error::Error>> {
    let config = Config::load_or_default();
    let store = TaskStore::open_default()?;
    let pacing = args.pacing(&config)?;
    tracing::debug!(?pacing, tasks = store.list().len(), "building plan");

    let schedule = build(store.list(), &pacing);
    let summary = args.summary.then(|| schedule.summary(store.list()));

    if args.json || config.display.json_output {
        let output = PlanOutput {
            schedule: &schedule,
            summary,
        };
        println!("{}", serde_json::to_string_pretty(&output)?);
        return Ok(());
    }

    print!("{}", render::timeline(&schedule, config.display.show_notes));
    if let Some(summary) = &summary {
        print!("{}", render::summary(summary, store.list()));
    }
    Ok(())
}
