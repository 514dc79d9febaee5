mod config;
pub mod database;
pub mod student_store;

pub use config::{Config, DashboardConfig, ScheduleConfig};
pub use database::Database;
pub use student_store::StudentStore;

use std::path::PathBuf;

use crate::error::CoreError;

/// Returns the directory holding `config.toml` and `bellboard.db`.
///
/// `BELLBOARD_DATA_DIR` wins when set. Otherwise this is
/// `~/.config/bellboard[-dev]/`, with the `-dev` suffix selected by
/// `BELLBOARD_ENV=dev`.
///
/// # Errors
/// Returns an error if creating the directory fails.
pub fn data_dir() -> Result<PathBuf, CoreError> {
    let dir = match std::env::var_os("BELLBOARD_DATA_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("BELLBOARD_ENV").unwrap_or_else(|_| "production".to_string());

            if env == "dev" {
                base_dir.join("bellboard-dev")
            } else {
                base_dir.join("bellboard")
            }
        }
    };

    std::fs::create_dir_all(&dir)?;
    Ok(dir)
}
