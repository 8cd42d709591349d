//! Error types for the parks directory
//!
//! The record store itself never fails. Errors only arise at the edges:
//! validating a submission, decoding a record handed across navigation,
//! and loading configuration.

use thiserror::Error;

/// Result type alias for parks operations
pub type Result<T> = std::result::Result<T, Error>;

/// Core error type for the parks directory
#[derive(Error, Debug)]
pub enum Error {
    /// A submission is missing a required field
    #[error("Validation failed: {0}")]
    Validation(String),

    /// A decoded record does not have the expected shape
    #[error("Invalid park record: {0}")]
    InvalidRecord(String),

    /// JSON serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Create a validation error
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    /// Create an invalid record error
    pub fn invalid_record(msg: impl Into<String>) -> Self {
        Self::InvalidRecord(msg.into())
    }

    /// Create a configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }
}
