//! Typed error enum for the service layer.

use historical_news_storage::StorageError;
use thiserror::Error;

/// Service-layer error.
///
/// An empty result is not an error; only bad input and store faults are.
#[derive(Debug, Error)]
pub enum ServiceError {
    /// Store access failed (connection, query, corrupt row).
    #[error("storage: {0}")]
    Storage(#[from] StorageError),

    /// A required query parameter was absent or blank.
    #[error("missing parameter: {0}")]
    MissingParameter(&'static str),

    /// A parameter was present but could not be interpreted.
    #[error("invalid parameter {name}: '{value}'")]
    InvalidParameter { name: &'static str, value: String },
}

impl ServiceError {
    /// Whether the caller, not the store, is at fault.
    pub fn is_client_error(&self) -> bool {
        matches!(self, Self::MissingParameter(_) | Self::InvalidParameter { .. })
    }
}
