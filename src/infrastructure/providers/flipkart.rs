//! # Flipkart Adapter
//!
//! Flipkart quotes via the public flipkart-scraper-api.
//!
//! Issues `GET {base_url}/search/{query}` with the query percent-encoded
//! into the path. The scraper has shipped the result list under both
//! `result` and `results`, so both are accepted. Listings are in stock
//! unless `in_stock` is explicitly `false`.

use crate::domain::quote::{Quote, Store};
use crate::infrastructure::providers::error::ProviderResult;
use crate::infrastructure::providers::http_client::{HttpClient, endpoint};
use crate::infrastructure::providers::normalize::{
    AvailabilityRule, ExtractionStrategy, extract_first_quote,
};
use crate::infrastructure::providers::traits::PriceProvider;
use async_trait::async_trait;
use serde_json::Value;

/// Public scraper host.
pub const DEFAULT_BASE_URL: &str = "https://flipkart-scraper-api.vercel.app";

const EXTRACTION: ExtractionStrategy = ExtractionStrategy {
    store: Store::Flipkart,
    results_fields: &["result", "results"],
    price_paths: &[&["current_price"], &["price"]],
    link_paths: &[&["link"], &["query_url"]],
    availability: AvailabilityRule::InStockFlag(&["in_stock"]),
};

/// Configuration for the Flipkart adapter.
#[derive(Debug, Clone)]
pub struct FlipkartConfig {
    /// Scraper host.
    pub base_url: String,
}

impl Default for FlipkartConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
        }
    }
}

/// Flipkart price provider backed by the scraper API.
#[derive(Debug, Clone)]
pub struct FlipkartAdapter {
    config: FlipkartConfig,
    client: HttpClient,
}

impl FlipkartAdapter {
    /// Creates a new adapter.
    #[must_use]
    pub fn new(config: FlipkartConfig, client: HttpClient) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl PriceProvider for FlipkartAdapter {
    fn store(&self) -> Store {
        Store::Flipkart
    }

    #[tracing::instrument(skip(self), fields(store = "Flipkart"))]
    async fn lookup(&self, query: &str) -> ProviderResult<Option<Quote>> {
        let url = endpoint(&self.config.base_url, &["search", query])?;
        let body: Value = self.client.get(url).await?;
        extract_first_quote(&body, &EXTRACTION)
    }
}
