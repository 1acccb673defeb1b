//! Error types for opsmon

use thiserror::Error;

/// Errors that can occur while recording events
///
/// None of these ever reach a caller of the recorder; recording is
/// best-effort by contract. Sinks and alert handlers return them and
/// the recorder contains them.
#[derive(Debug, Error)]
pub enum MonitorError {
    /// Record could not be converted to its structured form
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Sink write failure
    #[error("Failed to write to '{stream}' stream: {reason}")]
    Sink {
        stream: String,
        reason: String,
    },

    /// Alert delivery failure
    #[error("Alert delivery failed: {0}")]
    Alert(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

/// Result type alias for recorder operations
pub type Result<T> = std::result::Result<T, MonitorError>;
