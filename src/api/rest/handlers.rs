//! # REST Handlers
//!
//! Request handlers and wire types for the price comparison API.

use crate::application::services::PriceAggregator;
use crate::domain::quote::Quote;
use axum::Json;
use axum::extract::{Query, State};
use axum::http::StatusCode;
use serde::{Deserialize, Serialize};
use std::sync::Arc;

/// Shared state for all handlers.
#[derive(Debug, Clone)]
pub struct AppState {
    /// Aggregator behind `/api/prices`.
    pub aggregator: Arc<PriceAggregator>,
}

impl AppState {
    /// Creates handler state around an aggregator.
    #[must_use]
    pub fn new(aggregator: PriceAggregator) -> Self {
        Self {
            aggregator: Arc::new(aggregator),
        }
    }
}

/// Query string of `GET /api/prices`.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PriceQuery {
    /// Free-text product search.
    pub query: Option<String>,
}

impl PriceQuery {
    /// Builds the query from decoded `key=value` pairs.
    ///
    /// A repeated `query` parameter resolves to its first occurrence.
    #[must_use]
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Self {
        Self {
            query: pairs
                .into_iter()
                .find(|(key, _)| key == "query")
                .map(|(_, value)| value),
        }
    }
}

/// Body of `GET /api/prices`.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PricesResponse {
    /// Quotes in collection order.
    pub prices: Vec<Quote>,
}

impl PricesResponse {
    /// An empty result set.
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }
}

/// Body of `GET /health`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Always `"ok"` while the process serves requests.
    pub status: String,
    /// Crate version.
    pub version: String,
}

/// `GET /api/prices?query=<text>`
///
/// Always answers with `{ "prices": [...] }`. Upstream failures shrink the
/// list; only an aggregation fault turns into a 500, still with an empty list.
pub async fn get_prices(
    State(state): State<AppState>,
    Query(pairs): Query<Vec<(String, String)>>,
) -> (StatusCode, Json<PricesResponse>) {
    let query = PriceQuery::from_pairs(pairs).query.unwrap_or_default();

    match state.aggregator.compare(&query).await {
        Ok(prices) => (StatusCode::OK, Json(PricesResponse { prices })),
        Err(e) => {
            tracing::error!(error = %e, query = %query, "price aggregation failed");
            (
                StatusCode::INTERNAL_SERVER_ERROR,
                Json(PricesResponse::empty()),
            )
        }
    }
}

/// `GET /health`
#[allow(clippy::unused_async)]
pub async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        version: env!("CARGO_PKG_VERSION").to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pairs(raw: &[(&str, &str)]) -> Vec<(String, String)> {
        raw.iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn first_query_value_wins() {
        let query = PriceQuery::from_pairs(pairs(&[("query", "a"), ("query", "b")]));
        assert_eq!(query.query.as_deref(), Some("a"));
    }

    #[test]
    fn other_parameters_are_ignored() {
        let query = PriceQuery::from_pairs(pairs(&[("page", "2")]));
        assert!(query.query.is_none());
    }
}
