//! Error types for siop-env.
//!
//! Environment resolution itself never fails. [`SiopEnvError`] covers the
//! surrounding surfaces that can: parsing property definitions and
//! writing command output.

use thiserror::Error;

/// Core error type for siop-env operations.
#[derive(Debug, Error)]
pub enum SiopEnvError {
    /// A `key=value` property definition could not be parsed.
    #[error("Invalid property '{assignment}': {message}")]
    InvalidProperty { assignment: String, message: String },

    /// IO error wrapper.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Generic wrapped error for anyhow interop.
    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

/// Result type alias for siop-env operations.
pub type Result<T> = std::result::Result<T, SiopEnvError>;
