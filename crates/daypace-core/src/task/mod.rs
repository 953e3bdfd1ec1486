//! Task types for the day planner.
//!
//! A task is an immutable unit of work as far as the schedule builder is
//! concerned: the builder reorders and wraps tasks into blocks but never
//! edits them.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::ValidationError;
use crate::time::lenient_i64;

/// Lowest accepted priority.
pub const MIN_PRIORITY: i64 = 1;
/// Highest accepted priority.
pub const MAX_PRIORITY: i64 = 5;

/// Energy level a task demands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    /// Low energy (admin, inbox, chores)
    Low,
    /// Medium energy (default)
    Medium,
    /// High energy (deep work)
    High,
}

impl EnergyLevel {
    /// Ordinal weight used for tie-breaking: high > medium > low.
    pub fn rank(self) -> u8 {
        match self {
            EnergyLevel::Low => 0,
            EnergyLevel::Medium => 1,
            EnergyLevel::High => 2,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EnergyLevel::Low => "low",
            EnergyLevel::Medium => "medium",
            EnergyLevel::High => "high",
        }
    }
}

impl Default for EnergyLevel {
    fn default() -> Self {
        EnergyLevel::Medium
    }
}

impl fmt::Display for EnergyLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for EnergyLevel {
    type Err = ValidationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(EnergyLevel::Low),
            "medium" | "med" => Ok(EnergyLevel::Medium),
            "high" => Ok(EnergyLevel::High),
            other => Err(ValidationError::InvalidValue {
                field: "energy".to_string(),
                message: format!("expected low, medium or high, got '{other}'"),
            }),
        }
    }
}

/// A user-entered unit of work.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Display title
    pub title: String,
    /// Nominal duration in minutes. Stored raw; non-positive values are
    /// never scheduled.
    #[serde(deserialize_with = "lenient_i64")]
    pub duration_minutes: i64,
    /// Priority 1-5, higher is more important. Clamped when ordering.
    #[serde(deserialize_with = "lenient_i64")]
    pub priority: i64,
    /// Energy the task demands
    #[serde(default)]
    pub energy: EnergyLevel,
    /// Optional free-form note
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub note: Option<String>,
    /// Insertion order marker, only used for tie-breaking
    #[serde(default)]
    pub created_at: u64,
}

impl Task {
    /// Create a task with a fresh id and creation marker 0.
    pub fn new(
        title: impl Into<String>,
        duration_minutes: i64,
        priority: i64,
        energy: EnergyLevel,
    ) -> Self {
        Task {
            id: format!("task-{}", uuid::Uuid::new_v4()),
            title: title.into(),
            duration_minutes,
            priority,
            energy,
            note: None,
            created_at: 0,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = id.into();
        self
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.note = Some(note.into());
        self
    }

    pub fn with_created_at(mut self, created_at: u64) -> Self {
        self.created_at = created_at;
        self
    }

    /// Copy this task under a fresh id and creation marker.
    pub fn duplicate(&self, created_at: u64) -> Self {
        Task {
            id: format!("task-{}", uuid::Uuid::new_v4()),
            title: format!("{} (copy)", self.title),
            created_at,
            ..self.clone()
        }
    }

    /// Priority clamped into `1..=5`.
    pub fn effective_priority(&self) -> i64 {
        self.priority.clamp(MIN_PRIORITY, MAX_PRIORITY)
    }

    /// Whether the task contributes any time to a schedule.
    pub fn is_schedulable(&self) -> bool {
        self.duration_minutes > 0
    }

    /// Queue order: descending priority, then descending energy rank,
    /// then ascending creation marker.
    pub fn queue_cmp(&self, other: &Task) -> Ordering {
        other
            .effective_priority()
            .cmp(&self.effective_priority())
            .then_with(|| other.energy.rank().cmp(&self.energy.rank()))
            .then_with(|| self.created_at.cmp(&other.created_at))
    }
}

/// Sort tasks into queue order without touching the input slice.
///
/// The sort is stable, so tasks equal on every key keep their input order.
pub fn order_tasks(tasks: &[Task]) -> Vec<&Task> {
    let mut ordered: Vec<&Task> = tasks.iter().collect();
    ordered.sort_by(|a, b| a.queue_cmp(b));
    ordered
}

#[cfg(test)]
mod tests {
    use super::*;

    fn task(id: &str, priority: i64, energy: EnergyLevel, created_at: u64) -> Task {
        Task::new(id, 30, priority, energy)
            .with_id(id)
            .with_created_at(created_at)
    }

    #[test]
    fn energy_level_default() {
        assert_eq!(EnergyLevel::default(), EnergyLevel::Medium);
    }

    #[test]
    fn energy_rank_orders_high_first() {
        assert!(EnergyLevel::High.rank() > EnergyLevel::Medium.rank());
        assert!(EnergyLevel::Medium.rank() > EnergyLevel::Low.rank());
    }

    #[test]
    fn energy_parses_case_insensitively() {
        assert_eq!("HIGH".parse::<EnergyLevel>(), Ok(EnergyLevel::High));
        assert_eq!("med".parse::<EnergyLevel>(), Ok(EnergyLevel::Medium));
        assert!("extreme".parse::<EnergyLevel>().is_err());
    }

    #[test]
    fn order_by_priority_then_energy_then_creation() {
        let tasks = vec![
            task("late-high", 3, EnergyLevel::High, 4),
            task("low-pri", 1, EnergyLevel::High, 0),
            task("early-high", 3, EnergyLevel::High, 2),
            task("mid", 3, EnergyLevel::Medium, 1),
            task("top", 5, EnergyLevel::Low, 3),
        ];

        let ids: Vec<&str> = order_tasks(&tasks).iter().map(|t| t.id.as_str()).collect();
        assert_eq!(
            ids,
            vec!["top", "early-high", "late-high", "mid", "low-pri"]
        );
    }

    #[test]
    fn out_of_range_priority_is_clamped() {
        let tasks = vec![
            task("five", 5, EnergyLevel::Low, 0),
            task("ninety", 90, EnergyLevel::Low, 1),
            task("negative", -3, EnergyLevel::High, 2),
            task("one", 1, EnergyLevel::Low, 3),
        ];

        let ids: Vec<&str> = order_tasks(&tasks).iter().map(|t| t.id.as_str()).collect();
        // 90 behaves like 5, -3 like 1
        assert_eq!(ids, vec!["five", "ninety", "negative", "one"]);
    }

    #[test]
    fn duplicate_gets_new_identity() {
        let original = Task::new("Write report", 45, 4, EnergyLevel::High)
            .with_note("draft first")
            .with_created_at(7);
        let copy = original.duplicate(8);

        assert_ne!(copy.id, original.id);
        assert_eq!(copy.title, "Write report (copy)");
        assert_eq!(copy.duration_minutes, 45);
        assert_eq!(copy.note.as_deref(), Some("draft first"));
        assert_eq!(copy.created_at, 8);
    }

    #[test]
    fn task_serialization() {
        let task = Task::new("Inbox zero", 20, 2, EnergyLevel::Low).with_id("t-1");
        let json = serde_json::to_value(&task).unwrap();
        assert_eq!(json["energy"], "low");
        assert!(json.get("note").is_none());

        let decoded: Task = serde_json::from_value(json).unwrap();
        assert_eq!(decoded, task);
    }

    #[test]
    fn task_deserializes_float_durations() {
        let json = r#"{"id":"a","title":"A","duration_minutes":25.7,"priority":3}"#;
        let task: Task = serde_json::from_str(json).unwrap();
        assert_eq!(task.duration_minutes, 25);
        assert_eq!(task.energy, EnergyLevel::Medium);
        assert_eq!(task.created_at, 0);
    }
}
