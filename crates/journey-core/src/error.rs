//! Core error types for journey-core.
//!
//! Every failure in this crate is non-fatal and locally contained: storage
//! errors are logged at the failing call site and returned to the caller,
//! which decides how to surface them. Nothing is retried.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for journey-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Key-value storage errors
    #[error("Storage error: {0}")]
    Storage(#[from] StorageError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Validation errors
    #[error("Validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Opening an external link or mail composer failed
    #[error("Could not open '{target}': {message}")]
    Link { target: String, message: String },

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Storage-specific errors.
#[derive(Error, Debug)]
pub enum StorageError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Database is locked by another process
    #[error("Database is locked")]
    Locked,

    /// The data directory could not be resolved or created
    #[error("Data directory unavailable: {0}")]
    DataDir(String),
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Unknown dot-path key
    #[error("unknown config key: {0}")]
    UnknownKey(String),

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },
}

/// Validation errors raised by the domain components.
#[derive(Error, Debug, PartialEq, Eq)]
pub enum ValidationError {
    /// One of the seeded habits cannot be deleted
    #[error("Habit '{id}' is a default habit and cannot be deleted")]
    ProtectedHabit { id: String },

    /// No habit with the given id
    #[error("Unknown habit: {id}")]
    UnknownHabit { id: String },

    /// A habit name must not be blank
    #[error("Habit name must not be empty")]
    EmptyName,

    /// A manually recorded trigger needs a note
    #[error("Please enter a trigger note")]
    EmptyNote,

    /// Month outside 1..=12 or year out of the calendar range
    #[error("Invalid month: {year}-{month}")]
    InvalidMonth { year: i32, month: u32 },

    /// Unknown catalogue entry
    #[error("Unknown resource: {0}")]
    UnknownResource(String),
}

impl From<rusqlite::Error> for StorageError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(e, _msg)
                if e.code == rusqlite::ErrorCode::DatabaseLocked =>
            {
                StorageError::Locked
            }
            _ => StorageError::QueryFailed(err.to_string()),
        }
    }
}

impl From<rusqlite::Error> for CoreError {
    fn from(err: rusqlite::Error) -> Self {
        CoreError::Storage(err.into())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn protected_habit_message_names_the_id() {
        let err = CoreError::from(ValidationError::ProtectedHabit {
            id: "namaz".into(),
        });
        assert!(err.to_string().contains("namaz"));
    }

    #[test]
    fn locked_sqlite_error_maps_to_locked() {
        let raw = rusqlite::Error::SqliteFailure(
            rusqlite::ffi::Error::new(rusqlite::ffi::SQLITE_LOCKED),
            None,
        );
        assert!(matches!(StorageError::from(raw), StorageError::Locked));
    }
}
