mod config;
pub mod database;
pub mod keys;

pub use config::{ChallengeConfig, Config, ContactConfig, RelapseConfig, ThemeConfig};
pub use database::{Database, KvStore};

use std::path::PathBuf;

use crate::error::StorageError;

/// Returns `~/.config/nofap-journey[-dev]/` based on JOURNEY_ENV.
///
/// Set JOURNEY_ENV=dev to use the development data directory, or
/// JOURNEY_DATA_DIR to point at an explicit directory.
///
/// # Errors
/// Returns an error if creating the data directory fails.
pub fn data_dir() -> Result<PathBuf, StorageError> {
    let dir = match std::env::var_os("JOURNEY_DATA_DIR") {
        Some(explicit) => PathBuf::from(explicit),
        None => {
            let base_dir = dirs::home_dir()
                .unwrap_or_else(|| PathBuf::from("."))
                .join(".config");

            let env = std::env::var("JOURNEY_ENV").unwrap_or_else(|_| "production".to_string());
            if env == "dev" {
                base_dir.join("nofap-journey-dev")
            } else {
                base_dir.join("nofap-journey")
            }
        }
    };

    std::fs::create_dir_all(&dir)
        .map_err(|e| StorageError::DataDir(format!("{}: {e}", dir.display())))?;
    Ok(dir)
}
