//! Error types for the team demo

use thiserror::Error;

/// Result type for team operations
pub type Result<T> = std::result::Result<T, TeamError>;

/// Errors that can occur in team operations
#[derive(Debug, Error)]
pub enum TeamError {
    /// Team file or terminal I/O failed
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Team file is not a JSON array of names
    #[error("Malformed team file: {0}")]
    Malformed(#[from] serde_json::Error),
}
