//! Core error types for moodplan-core.
//!
//! Scheduling logic errors (contract violations) and collaborator-side
//! failures (authorization, fetch, persistence) are deliberately distinct
//! kinds and never conflated.

use std::path::PathBuf;
use thiserror::Error;

/// Top-level error type for moodplan-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Database-related errors
    #[error("database error: {0}")]
    Database(#[from] DatabaseError),

    /// Configuration-related errors
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Scheduler input contract violations
    #[error("invalid task: {0}")]
    InvalidTask(#[from] InvalidTaskError),

    /// Scheduling run failures
    #[error("schedule run failed: {0}")]
    ScheduleRun(#[from] ScheduleRunError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Database-specific errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Data directory could not be resolved or created
    #[error("could not resolve data directory: {0}")]
    DataDir(String),

    /// Query execution failed
    #[error("query failed: {0}")]
    QueryFailed(String),

    /// Database is locked
    #[error("database is locked")]
    Locked,

    /// Row lookup by id came back empty
    #[error("no such task: {0}")]
    TaskNotFound(String),
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    DatabaseError::Locked
                } else {
                    DatabaseError::QueryFailed(err.to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Unknown configuration key
    #[error("unknown configuration key: {0}")]
    UnknownKey(String),
}

/// Contract violation in scheduler input.
///
/// Well-typed input never produces this; it marks malformed tasks such as a
/// negative duration or an absent id, naming the offending field.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
#[error("invalid value for '{field}' on task '{task_id}': {message}")]
pub struct InvalidTaskError {
    pub task_id: String,
    pub field: &'static str,
    pub message: String,
}

/// Failures surfaced by a scheduling run around the pure core.
#[derive(Error, Debug)]
pub enum ScheduleRunError {
    /// The configured profile does not own the database
    #[error("unauthorized: database belongs to profile '{owner}', configured profile is '{requested}'")]
    Unauthorized { owner: String, requested: String },

    /// Fetching tasks or the latest mood check-in failed
    #[error("failed to fetch scheduling inputs: {0}")]
    FetchFailed(#[source] DatabaseError),

    /// Writing an assigned start time back failed. The computed ordering for
    /// the remaining tasks is still valid.
    #[error("failed to persist scheduled time for task '{task_id}': {source}")]
    PersistFailed {
        task_id: String,
        #[source]
        source: DatabaseError,
    },

    /// The fetched task set violated the scheduler input contract
    #[error(transparent)]
    InvalidTask(#[from] InvalidTaskError),
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
