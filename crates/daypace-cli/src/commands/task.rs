//! Task management commands for CLI.

use clap::Subcommand;
use daypace_core::{EnergyLevel, NewTask, TaskStore};

#[derive(Subcommand)]
pub enum TaskAction {
    /// Add a new task
    Add {
        /// Task title
        title: String,
        /// Duration in minutes
        #[arg(long, short, default_value = "25")]
        duration: i64,
        /// Priority from 1 (low) to 5 (high)
        #[arg(long, short, default_value = "3")]
        priority: i64,
        /// Energy the task needs: low, medium or high
        #[arg(long, short, default_value = "medium")]
        energy: EnergyLevel,
        /// Free-form note shown under the block
        #[arg(long, short)]
        note: Option<String>,
    },
    /// List tasks in insertion order
    List {
        /// Print JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Copy a task under a new id
    Duplicate {
        /// Task ID
        id: String,
    },
    /// Remove a task
    Remove {
        /// Task ID
        id: String,
    },
    /// Remove every task
    Clear,
}

pub fn run(action: TaskAction) -> Result<(), Box<dyn std::error::Error>> {
    let mut store = TaskStore::open_default()?;

    match action {
        TaskAction::Add {
            title,
            duration,
            priority,
            energy,
            note,
        } => {
            let task = store.add(NewTask {
                title,
                duration_minutes: duration,
                priority,
                energy,
                note,
            })?;
            store.save()?;
            println!("Task added: {}", task.id);
        }
        TaskAction::List { json } => {
            let tasks = store.list();
            if json {
                println!("{}", serde_json::to_string_pretty(tasks)?);
            } else if tasks.is_empty() {
                println!("no tasks");
            } else {
                for task in tasks {
                    println!(
                        "{}  {:>4}m  P{}  {:<6}  {}",
                        task.id, task.duration_minutes, task.priority, task.energy, task.title
                    );
                }
            }
        }
        TaskAction::Duplicate { id } => {
            let copy = store.duplicate(&id)?;
            store.save()?;
            println!("Task duplicated: {}", copy.id);
        }
        TaskAction::Remove { id } => {
            let removed = store.remove(&id)?;
            store.save()?;
            println!("Task removed: {}", removed.id);
        }
        TaskAction::Clear => {
            let count = store.clear();
            store.save()?;
            println!("{count} tasks removed");
        }
    }
    Ok(())
}
