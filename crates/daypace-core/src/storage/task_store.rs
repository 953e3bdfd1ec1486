//! JSON-file task storage.
//!
//! Tasks live in a flat list at `~/.config/daypace/tasks.json` together
//! with the next creation marker, so insertion order survives restarts.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use tracing::debug;

use super::data_dir;
use crate::error::{CoreError, Result, ValidationError};
use crate::task::{EnergyLevel, Task, MAX_PRIORITY, MIN_PRIORITY};

/// Input for [`TaskStore::add`].
#[derive(Debug, Clone)]
pub struct NewTask {
    pub title: String,
    pub duration_minutes: i64,
    pub priority: i64,
    pub energy: EnergyLevel,
    pub note: Option<String>,
}

impl NewTask {
    pub fn new(title: impl Into<String>, duration_minutes: i64) -> Self {
        Self {
            title: title.into(),
            duration_minutes,
            priority: 3,
            energy: EnergyLevel::Medium,
            note: None,
        }
    }

    fn validate(&self) -> Result<(), ValidationError> {
        if self.title.trim().is_empty() {
            return Err(ValidationError::InvalidValue {
                field: "title".to_string(),
                message: "title must not be empty".to_string(),
            });
        }
        if self.duration_minutes <= 0 {
            return Err(ValidationError::InvalidValue {
                field: "duration".to_string(),
                message: format!("duration must be positive, got {}", self.duration_minutes),
            });
        }
        if !(MIN_PRIORITY..=MAX_PRIORITY).contains(&self.priority) {
            return Err(ValidationError::InvalidValue {
                field: "priority".to_string(),
                message: format!(
                    "priority must be between {MIN_PRIORITY} and {MAX_PRIORITY}, got {}",
                    self.priority
                ),
            });
        }
        Ok(())
    }
}

#[derive(Debug, Default, Serialize, Deserialize)]
struct TaskFile {
    #[serde(default)]
    next_created_at: u64,
    #[serde(default)]
    tasks: Vec<Task>,
}

/// Flat task collection persisted as JSON.
pub struct TaskStore {
    path: Option<PathBuf>,
    file: TaskFile,
}

impl TaskStore {
    /// Open the store at `~/.config/daypace/tasks.json`.
    ///
    /// # Errors
    /// Returns an error if the data directory is unavailable or the file
    /// exists but cannot be parsed.
    pub fn open_default() -> Result<Self> {
        Self::open(&data_dir()?.join("tasks.json"))
    }

    /// Open the store at `path`. A missing file is an empty store.
    pub fn open(path: &Path) -> Result<Self> {
        let file = match std::fs::read_to_string(path) {
            Ok(content) => serde_json::from_str(&content)?,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => TaskFile::default(),
            Err(e) => return Err(e.into()),
        };
        debug!(path = %path.display(), tasks = file.tasks.len(), "opened task store");
        Ok(Self {
            path: Some(path.to_path_buf()),
            file,
        })
    }

    /// In-memory store for testing; `save` is a no-op.
    pub fn open_memory() -> Self {
        Self {
            path: None,
            file: TaskFile::default(),
        }
    }

    /// Write the store back to disk.
    pub fn save(&self) -> Result<()> {
        let Some(path) = &self.path else {
            return Ok(());
        };
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let content = serde_json::to_string_pretty(&self.file)?;
        std::fs::write(path, content)?;
        debug!(path = %path.display(), tasks = self.file.tasks.len(), "saved task store");
        Ok(())
    }

    /// Tasks in insertion order.
    pub fn list(&self) -> &[Task] {
        &self.file.tasks
    }

    pub fn get(&self, id: &str) -> Option<&Task> {
        self.file.tasks.iter().find(|t| t.id == id)
    }

    /// Validate and append a new task, assigning its id and creation marker.
    pub fn add(&mut self, new: NewTask) -> Result<Task> {
        new.validate()?;

        let created_at = self.next_marker()?;
        let mut task = Task::new(
            new.title.trim(),
            new.duration_minutes,
            new.priority,
            new.energy,
        )
        .with_created_at(created_at);
        task.note = new.note.filter(|n| !n.trim().is_empty());

        self.file.tasks.push(task.clone());
        Ok(task)
    }

    /// Append a copy of an existing task after all current tasks.
    pub fn duplicate(&mut self, id: &str) -> Result<Task> {
        let original = self
            .get(id)
            .ok_or_else(|| CoreError::TaskNotFound(id.to_string()))?
            .clone();
        let copy = original.duplicate(self.next_marker()?);
        self.file.tasks.push(copy.clone());
        Ok(copy)
    }

    pub fn remove(&mut self, id: &str) -> Result<Task> {
        let index = self
            .file
            .tasks
            .iter()
            .position(|t| t.id == id)
            .ok_or_else(|| CoreError::TaskNotFound(id.to_string()))?;
        Ok(self.file.tasks.remove(index))
    }

    /// Remove every task. Creation markers keep counting up.
    pub fn clear(&mut self) -> usize {
        let count = self.file.tasks.len();
        self.file.tasks.clear();
        count
    }

    /// Next creation marker, strictly above every marker handed out so far.
    ///
    /// # Errors
    /// Returns a validation error once the marker space is used up.
    fn next_marker(&mut self) -> Result<u64, ValidationError> {
        // Files edited by hand may carry markers past the counter.
        let floor = self.file.tasks.iter().try_fold(0u64, |floor, t| {
            Some(floor.max(t.created_at.checked_add(1)?))
        });
        let marker = floor.map(|floor| self.file.next_created_at.max(floor));
        let next = marker.and_then(|m| m.checked_add(1));

        match (marker, next) {
            (Some(marker), Some(next)) => {
                self.file.next_created_at = next;
                Ok(marker)
            }
            _ => Err(ValidationError::InvalidValue {
                field: "created_at".to_string(),
                message: "creation markers are exhausted".to_string(),
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn add_assigns_increasing_markers() {
        let mut store = TaskStore::open_memory();
        let a = store.add(NewTask::new("First", 30)).unwrap();
        let b = store.add(NewTask::new("Second", 15)).unwrap();

        assert!(a.created_at < b.created_at);
        assert_ne!(a.id, b.id);
        assert_eq!(store.list().len(), 2);
    }

    #[test]
    fn add_rejects_invalid_input() {
        let mut store = TaskStore::open_memory();
        assert!(store.add(NewTask::new("  ", 30)).is_err());
        assert!(store.add(NewTask::new("Nothing", 0)).is_err());

        let mut loud = NewTask::new("Loud", 30);
        loud.priority = 9;
        assert!(store.add(loud).is_err());
        assert!(store.list().is_empty());
    }

    #[test]
    fn duplicate_appends_after_existing() {
        let mut store = TaskStore::open_memory();
        let a = store.add(NewTask::new("Plan", 30)).unwrap();
        store.add(NewTask::new("Build", 60)).unwrap();

        let copy = store.duplicate(&a.id).unwrap();
        assert_eq!(copy.title, "Plan (copy)");
        assert_eq!(copy.created_at, 2);
        assert_eq!(
            store.list().last().map(|t| t.id.as_str()),
            Some(copy.id.as_str())
        );
    }

    #[test]
    fn remove_and_missing_ids() {
        let mut store = TaskStore::open_memory();
        let a = store.add(NewTask::new("Plan", 30)).unwrap();

        assert_eq!(store.remove(&a.id).unwrap().id, a.id);
        assert!(matches!(
            store.remove(&a.id),
            Err(CoreError::TaskNotFound(_))
        ));
        assert!(matches!(
            store.duplicate("nope"),
            Err(CoreError::TaskNotFound(_))
        ));
    }

    #[test]
    fn markers_survive_clear() {
        let mut store = TaskStore::open_memory();
        store.add(NewTask::new("A", 10)).unwrap();
        store.add(NewTask::new("B", 10)).unwrap();
        assert_eq!(store.clear(), 2);

        let c = store.add(NewTask::new("C", 10)).unwrap();
        assert_eq!(c.created_at, 2);
    }

    #[test]
    fn save_and_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");

        let mut store = TaskStore::open(&path).unwrap();
        let mut new = NewTask::new("Write", 45);
        new.energy = EnergyLevel::High;
        new.note = Some("chapter two".to_string());
        let task = store.add(new).unwrap();
        store.save().unwrap();

        let reopened = TaskStore::open(&path).unwrap();
        assert_eq!(reopened.list(), &[task]);

        let mut reopened = reopened;
        let next = reopened.add(NewTask::new("Edit", 20)).unwrap();
        assert_eq!(next.created_at, 1);
    }

    #[test]
    fn hand_edited_markers_raise_the_floor() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(
            &path,
            r#"{"next_created_at":0,"tasks":[
                {"id":"a","title":"A","duration_minutes":10,"priority":3,"created_at":41}
            ]}"#,
        )
        .unwrap();

        let mut store = TaskStore::open(&path).unwrap();
        let b = store.add(NewTask::new("B", 10)).unwrap();
        assert_eq!(b.created_at, 42);
    }

    #[test]
    fn exhausted_markers_are_an_error() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(
            &path,
            r#"{"next_created_at":0,"tasks":[
                {"id":"a","title":"A","duration_minutes":10,"priority":3,
                 "created_at":18446744073709551615}
            ]}"#,
        )
        .unwrap();

        let mut store = TaskStore::open(&path).unwrap();
        assert!(matches!(
            store.add(NewTask::new("B", 10)),
            Err(CoreError::Validation(ValidationError::InvalidValue { .. }))
        ));
        assert!(matches!(
            store.duplicate("a"),
            Err(CoreError::Validation(_))
        ));
        assert_eq!(store.list().len(), 1);
    }

    #[test]
    fn last_marker_below_max_is_still_handed_out() {
        let mut store = TaskStore::open_memory();
        store.file.next_created_at = u64::MAX - 1;

        let a = store.add(NewTask::new("A", 10)).unwrap();
        assert_eq!(a.created_at, u64::MAX - 1);
        assert!(store.add(NewTask::new("B", 10)).is_err());
    }

    #[test]
    fn open_rejects_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("tasks.json");
        std::fs::write(&path, "{ not json").unwrap();
        assert!(matches!(TaskStore::open(&path), Err(CoreError::Json(_))));
    }
}
