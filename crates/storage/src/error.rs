//! Typed error enum for the storage layer.
//!
//! Callers match on the failure mode instead of downcasting opaque boxes.
//! There is no not-found variant: an empty result set is a valid answer.

use thiserror::Error;

/// Storage-layer error.
#[derive(Debug, Error)]
pub enum StorageError {
    /// SQL / connection / timeout failure.
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Row data could not be decoded into a domain type.
    #[error("data corruption: {context}")]
    DataCorruption {
        context: String,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// Schema bootstrap failure.
    #[error("migration error: {0}")]
    Migration(String),
}

impl StorageError {
    /// Whether this error is likely transient.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Database(sqlx::Error::PoolTimedOut | sqlx::Error::Io(_)))
    }

    pub(crate) fn corrupt(
        context: impl Into<String>,
        source: impl std::error::Error + Send + Sync + 'static,
    ) -> Self {
        Self::DataCorruption { context: context.into(), source: Box::new(source) }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use historical_news_core::CoreError;

    #[test]
    fn pool_timeout_is_transient() {
        assert!(StorageError::from(sqlx::Error::PoolTimedOut).is_transient());
        assert!(!StorageError::from(sqlx::Error::RowNotFound).is_transient());
    }

    #[test]
    fn corruption_keeps_context_and_source() {
        let err = StorageError::corrupt("entry 4 day_month", CoreError::InvalidDayMonth("4-4".into()));
        assert_eq!(err.to_string(), "data corruption: entry 4 day_month");
        assert!(std::error::Error::source(&err).is_some());
    }
}
