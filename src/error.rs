//! Error type for log analysis
//!
//! Unrecognised log lines are not errors. Only structured data that fails to
//! parse once a line has been recognised as a start or pass event is fatal.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while analysing a test runner log
#[derive(Error, Debug)]
pub enum ScopeError {
    #[error("Failed to read log file {}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Malformed timestamp '{value}' on line {line}: {source}")]
    Timestamp {
        line: usize,
        value: String,
        #[source]
        source: crate::timestamp::TimestampError,
    },

    #[error("Malformed duration '{value}' on line {line}")]
    Duration { line: usize, value: String },

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Failed to serialize report: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for log analysis operations
pub type Result<T> = std::result::Result<T, ScopeError>;
