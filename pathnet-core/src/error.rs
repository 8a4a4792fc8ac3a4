//! Error types for the core object model.

use thiserror::Error;

/// Errors raised by identity objects.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoreError {
    /// An attribute used as a weight could not be read as a number.
    #[error("Cannot convert attribute '{key}' of '{uid}' to a weight: {value}")]
    WeightConversion {
        uid: String,
        key: String,
        value: serde_json::Value,
    },
}

/// Result type for core operations.
pub type Result<T> = std::result::Result<T, CoreError>;
