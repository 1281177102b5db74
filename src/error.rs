//! Error types for the SSN validator service.
//!
//! This module defines custom error types using `thiserror`. The validation
//! predicate itself never errors; these cover configuration and the MCP
//! server surface.

use thiserror::Error;

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Errors raised while serving validation requests.
#[derive(Error, Debug)]
pub enum ServerError {
    /// Batch request exceeds the configured limit
    #[error("Batch of {size} values exceeds the maximum of {max}")]
    BatchTooLarge { size: usize, max: usize },

    /// Failed to serialize a response
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;

/// Convenience type alias for Results with ServerError
pub type ServerResult<T> = Result<T, ServerError>;
