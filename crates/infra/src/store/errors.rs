//! Record store error types
//!
//! Classifies failures by where they happened: the transport, the request
//! envelope, or an individual record result. Conversions into the domain
//! error implement the taxonomy the ports expect.

use hrdesk_domain::HrdeskError;
use thiserror::Error;

/// Errors raised by the record store client
#[derive(Debug, Error)]
pub enum StoreError {
    /// The store answered but reported `success: false` for the request.
    #[error("record store request failed: {0}")]
    Request(String),

    /// The request succeeded but one of the records was rejected. Only the
    /// first record-level message is carried.
    #[error("record store rejected record: {0}")]
    Record(String),

    /// The request never produced a usable response.
    #[error("transport error: {0}")]
    Transport(String),

    /// The response body could not be decoded.
    #[error("failed to decode record store response: {0}")]
    Decode(String),

    #[error("invalid store configuration: {0}")]
    Config(String),
}

impl From<reqwest::Error> for StoreError {
    fn from(err: reqwest::Error) -> Self {
        Self::Transport(err.to_string())
    }
}

impl From<StoreError> for HrdeskError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::Request(message) | StoreError::Record(message) => {
                Self::Persistence(message)
            }
            StoreError::Transport(message) => Self::Network(message),
            StoreError::Decode(message) => Self::Internal(message),
            StoreError::Config(message) => Self::Config(message),
        }
    }
}
