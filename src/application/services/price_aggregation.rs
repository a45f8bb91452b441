//! # Price Aggregation
//!
//! Fans a search out to every provider and flags the cheapest result.
//!
//! This module provides the [`PriceAggregator`], which runs each provider
//! on its own task, waits for all of them (a join, not a race), drops the
//! providers that produced nothing, and marks the best price.

use crate::application::error::{AggregationError, AggregationResult};
use crate::application::services::best_price::mark_best;
use crate::domain::quote::Quote;
use crate::infrastructure::providers::traits::PriceProvider;
use futures::future::join_all;
use std::sync::Arc;

/// Collects quotes from all providers for a single query.
#[derive(Debug, Clone)]
pub struct PriceAggregator {
    providers: Vec<Arc<dyn PriceProvider>>,
}

impl PriceAggregator {
    /// Creates a new aggregator over the given providers.
    #[must_use]
    pub fn new(providers: Vec<Arc<dyn PriceProvider>>) -> Self {
        Self { providers }
    }

    /// Looks `query` up at every provider and returns the quotes found.
    ///
    /// A blank query returns an empty list without contacting anyone.
    /// Quotes keep provider order; `best` is set on the cheapest.
    ///
    /// # Errors
    ///
    /// Returns [`AggregationError::TaskFailed`] if a provider task panics.
    #[tracing::instrument(skip(self))]
    pub async fn compare(&self, query: &str) -> AggregationResult<Vec<Quote>> {
        let query = query.trim();
        if query.is_empty() {
            return Ok(Vec::new());
        }

        let handles = self.providers.iter().map(|provider| {
            let provider = Arc::clone(provider);
            let query = query.to_string();
            let store = provider.store();
            let handle = tokio::spawn(async move { provider.quote(&query).await });
            async move { (store, handle.await) }
        });

        let mut quotes = Vec::with_capacity(self.providers.len());
        for (store, joined) in join_all(handles).await {
            match joined {
                Ok(Some(quote)) => quotes.push(quote),
                Ok(None) => {}
                Err(e) => {
                    tracing::error!(store = %store, error = %e, "provider task failed");
                    return Err(AggregationError::task_failed(store.name(), e.to_string()));
                }
            }
        }

        mark_best(&mut quotes);

        tracing::info!(
            providers = self.providers.len(),
            quotes = quotes.len(),
            "price comparison complete"
        );
        Ok(quotes)
    }
}
