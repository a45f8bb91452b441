//! # Price Provider Trait
//!
//! Port definition for upstream price sources.
//!
//! Each provider issues one outbound search and normalizes the first
//! matching listing into a [`Quote`]. [`PriceProvider::lookup`] keeps the
//! distinction between "nothing found" (`Ok(None)`) and "the call failed"
//! (`Err`); [`PriceProvider::quote`] logs failures and collapses both to
//! `None`, which is all the aggregator sees.
//!
//! # Examples
//!
//! ```ignore
//! use price_compare::infrastructure::providers::traits::PriceProvider;
//!
//! #[async_trait::async_trait]
//! impl PriceProvider for MyStoreAdapter {
//!     fn store(&self) -> Store { /* ... */ }
//!     async fn lookup(&self, query: &str) -> ProviderResult<Option<Quote>> { /* ... */ }
//! }
//! ```

use crate::domain::quote::{Quote, Store};
use crate::infrastructure::providers::error::ProviderResult;
use async_trait::async_trait;
use std::fmt;

/// Trait implemented by every upstream price source.
#[async_trait]
pub trait PriceProvider: Send + Sync + fmt::Debug {
    /// Returns the store this provider quotes for.
    fn store(&self) -> Store;

    /// Searches the upstream for `query` and normalizes the first result.
    ///
    /// `query` is already trimmed and non-empty.
    ///
    /// # Errors
    ///
    /// - `ProviderError::Timeout` / `ProviderError::Connection` - transport failure
    /// - `ProviderError::ProtocolError` - unexpected response shape
    /// - `ProviderError::Configuration` - adapter cannot build the request
    async fn lookup(&self, query: &str) -> ProviderResult<Option<Quote>>;

    /// Fault-isolated lookup: failures are logged and reported as no quote.
    async fn quote(&self, query: &str) -> Option<Quote> {
        match self.lookup(query).await {
            Ok(Some(quote)) => {
                tracing::debug!(store = %self.store(), price = ?quote.price, "provider returned quote");
                Some(quote)
            }
            Ok(None) => {
                tracing::debug!(store = %self.store(), "provider returned no results");
                None
            }
            Err(e) => {
                tracing::warn!(
                    store = %self.store(),
                    kind = e.kind(),
                    error = %e,
                    "provider lookup failed"
                );
                None
            }
        }
    }
}
