//! Error types for checkpoint-core
//!
//! The matching engine itself never fails; errors only arise at the edges,
//! when configuration or record files are loaded.

use thiserror::Error;

/// Result type alias for checkpoint operations
pub type Result<T> = std::result::Result<T, CheckpointError>;

/// Main error type for checkpoint operations
#[derive(Error, Debug)]
pub enum CheckpointError {
    /// Configuration-related errors
    #[error("Config error: {0}")]
    Config(#[from] ConfigError),

    /// Malformed record or history JSON
    #[error("Invalid records: {0}")]
    Records(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Configuration-specific errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// File contents could not be parsed
    #[error("Failed to parse config: {0}")]
    Parse(String),

    /// A value is outside its allowed range
    #[error("Value out of range: {0}")]
    OutOfRange(String),

    /// Config file could not be read
    #[error("Failed to read config {path}: {source}")]
    Read {
        path: String,
        #[source]
        source: std::io::Error,
    },
}
