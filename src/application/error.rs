//! # Application Errors
//!
//! Faults raised while aggregating quotes.
//!
//! Provider failures never appear here: adapters swallow them. An
//! [`AggregationError`] means something went wrong around the adapters,
//! and the API answers it with a server error and an empty result set.

use thiserror::Error;

/// Error type for aggregation operations.
#[derive(Debug, Clone, Error)]
pub enum AggregationError {
    /// A provider task panicked or was cancelled.
    #[error("provider task for {store} failed: {message}")]
    TaskFailed {
        /// Store whose task failed.
        store: String,
        /// Join error description.
        message: String,
    },
}

impl AggregationError {
    /// Creates a task failure error.
    #[must_use]
    pub fn task_failed(store: impl Into<String>, message: impl Into<String>) -> Self {
        Self::TaskFailed {
            store: store.into(),
            message: message.into(),
        }
    }
}

/// Result type for aggregation operations.
pub type AggregationResult<T> = Result<T, AggregationError>;
