//! Structured error types for the serodx workspace.

use thiserror::Error;

/// Unified error type for all serodx operations.
#[derive(Debug, Error)]
pub enum SerodxError {
    /// I/O error (file not found, permission denied, etc.)
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error (malformed measurement data)
    #[error("parse error: {0}")]
    Parse(String),

    /// Invalid input (empty population, non-positive step)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Catch-all for other errors
    #[error("{0}")]
    Other(String),
}

/// Convenience alias used throughout the serodx workspace.
pub type Result<T> = std::result::Result<T, SerodxError>;
