mod config;
pub mod db;

pub use config::{Config, DefaultsConfig, ProfileConfig};
pub use db::Database;

use std::path::PathBuf;

use crate::error::DatabaseError;

/// Returns `~/.config/moodplan[-dev]/` based on MOODPLAN_ENV.
///
/// Set MOODPLAN_ENV=dev to use the development data directory, or
/// MOODPLAN_DATA_DIR to point somewhere else entirely (used by tests).
///
/// # Errors
/// Returns an error if the directory cannot be created.
pub fn data_dir() -> Result<PathBuf, DatabaseError> {
    let dir = if let Ok(override_dir) = std::env::var("MOODPLAN_DATA_DIR") {
        PathBuf::from(override_dir)
    } else {
        let base_dir = dirs::home_dir()
            .unwrap_or_else(|| PathBuf::from("."))
            .join(".config");

        let env = std::env::var("MOODPLAN_ENV").unwrap_or_else(|_| "production".to_string());

        if env == "dev" {
            base_dir.join("moodplan-dev")
        } else {
            base_dir.join("moodplan")
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| DatabaseError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
