//! Error types for yearcal.

use thiserror::Error;

/// Errors that can occur in yearcal operations.
#[derive(Error, Debug)]
pub enum YearCalError {
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Event {0} not found")]
    EventNotFound(i64),

    #[error("Invalid event: {0}")]
    InvalidEvent(String),

    #[error("Invalid calendar file format: expected an event array or an object with an \"events\" array")]
    InvalidFileFormat,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type alias for yearcal operations.
pub type YearCalResult<T> = Result<T, YearCalError>;
