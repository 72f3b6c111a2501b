//! Flash Alert Error Types

use thiserror::Error;

/// Errors raised by the alert layer itself.
///
/// Session store faults are never wrapped here; they surface through the
/// store's own error type.
#[derive(Debug, Error)]
pub enum AlertError {
    /// Configuration source could not be read or deserialized
    #[error("Configuration error: {0}")]
    Config(#[from] ::config::ConfigError),

    /// Session key prefix is unusable
    #[error("Invalid key prefix {0:?}: must be non-empty, without whitespace or a trailing dot")]
    InvalidKeyPrefix(String),

    /// Style tag not recognised
    #[error("Unknown alert style: {0}")]
    UnknownStyle(String),
}
