//! Error types used throughout the application

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Main error type for hrdesk
///
/// The split between `NotFound`/`Persistence` and the read-side degrade
/// policy is documented on the repository ports in `hrdesk-core`.
#[derive(Error, Debug, Serialize, Deserialize)]
#[serde(tag = "type", content = "message")]
pub enum HrdeskError {
    /// No record with the requested id exists (in-memory backend).
    #[error("Not found: {0}")]
    NotFound(String),

    /// The record store reported a request-level or record-level failure.
    #[error("Persistence error: {0}")]
    Persistence(String),

    /// Caller-side input validation failed.
    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Network error: {0}")]
    Network(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Internal error: {0}")]
    Internal(String),
}

/// Result type alias for hrdesk operations
pub type Result<T> = std::result::Result<T, HrdeskError>;
