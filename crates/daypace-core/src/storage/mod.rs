mod config;
pub mod task_store;

pub use config::{Config, DisplayConfig};
pub use task_store::{NewTask, TaskStore};

use std::path::PathBuf;

use crate::error::Result;

/// Returns the daypace data directory, creating it if needed.
///
/// `DAYPACE_HOME` overrides the location outright. Otherwise this is
/// `~/.config/daypace[-dev]/`, with `DAYPACE_ENV=dev` selecting the
/// development directory.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf> {
    let dir = match std::env::var_os("DAYPACE_HOME") {
        Some(home) if !home.is_empty() => PathBuf::from(home),
        _ => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("DAYPACE_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("daypace-dev")
            } else {
                base_dir.join("daypace")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
