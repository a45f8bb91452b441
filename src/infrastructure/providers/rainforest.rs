//! # Rainforest Adapter
//!
//! Amazon India quotes via the Rainforest search API.
//!
//! Issues `GET {base_url}/request?api_key=..&type=search&amazon_domain=..
//! &search_term=..&sort_by=..` and normalizes `search_results[0]`: price
//! from `price.raw` (falling back to `price.value`), link from `link`,
//! availability from `availability.type`.

use crate::config::ApiKey;
use crate::domain::quote::{Quote, Store};
use crate::infrastructure::providers::error::{ProviderError, ProviderResult};
use crate::infrastructure::providers::http_client::{HttpClient, endpoint};
use crate::infrastructure::providers::normalize::{
    AvailabilityRule, ExtractionStrategy, extract_first_quote,
};
use crate::infrastructure::providers::traits::PriceProvider;
use async_trait::async_trait;
use serde_json::Value;

/// Public Rainforest API host.
pub const DEFAULT_BASE_URL: &str = "https://api.rainforestapi.com";

const EXTRACTION: ExtractionStrategy = ExtractionStrategy {
    store: Store::Amazon,
    results_fields: &["search_results"],
    price_paths: &[&["price", "raw"], &["price", "value"]],
    link_paths: &[&["link"]],
    availability: AvailabilityRule::StatusText(&["availability", "type"]),
};

/// Configuration for the Rainforest adapter.
#[derive(Debug, Clone)]
pub struct RainforestConfig {
    /// API credential. Lookups fail without one.
    pub api_key: Option<ApiKey>,
    /// API host.
    pub base_url: String,
    /// Amazon marketplace to search.
    pub amazon_domain: String,
    /// Result ordering requested from the API.
    pub sort_by: String,
}

impl RainforestConfig {
    /// Creates a configuration for the public API with the given key.
    #[must_use]
    pub fn new(api_key: Option<ApiKey>) -> Self {
        Self {
            api_key,
            ..Default::default()
        }
    }

    /// Overrides the API host.
    #[must_use]
    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

impl Default for RainforestConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: DEFAULT_BASE_URL.to_string(),
            amazon_domain: "amazon.in".to_string(),
            sort_by: "featured".to_string(),
        }
    }
}

/// Amazon price provider backed by the Rainforest API.
#[derive(Debug, Clone)]
pub struct RainforestAdapter {
    config: RainforestConfig,
    client: HttpClient,
}

impl RainforestAdapter {
    /// Creates a new adapter.
    #[must_use]
    pub fn new(config: RainforestConfig, client: HttpClient) -> Self {
        Self { config, client }
    }
}

#[async_trait]
impl PriceProvider for RainforestAdapter {
    fn store(&self) -> Store {
        Store::Amazon
    }

    #[tracing::instrument(skip(self), fields(store = "Amazon"))]
    async fn lookup(&self, query: &str) -> ProviderResult<Option<Quote>> {
        let api_key = self
            .config
            .api_key
            .as_ref()
            .ok_or_else(|| ProviderError::configuration("RAINFOREST_API_KEY is not set"))?;

        let url = endpoint(&self.config.base_url, &["request"])?;
        let params = [
            ("api_key", api_key.expose()),
            ("type", "search"),
            ("amazon_domain", self.config.amazon_domain.as_str()),
            ("search_term", query),
            ("sort_by", self.config.sort_by.as_str()),
        ];

        let body: Value = self.client.get_with_params(url, &params).await?;
        extract_first_quote(&body, &EXTRACTION)
    }
}
