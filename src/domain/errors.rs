//! Domain errors. Used by ports and use cases.
//!
//! Adapters map infrastructure errors into these.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DomainError {
    /// Missing or invalid configuration. Fatal at startup.
    #[error("Configuration error: {0}")]
    Config(String),

    #[error("AI estimation failed: {0}")]
    Ai(String),

    /// Outbound request exceeded the configured bound (seconds).
    #[error("AI request timed out after {0} seconds")]
    Timeout(u64),

    #[error("Invalid task: {0}")]
    Validation(String),

    #[error("UI error: {0}")]
    Ui(String),
}
