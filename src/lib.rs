//! # price-compare
//!
//! Cheapest-offer lookup across Amazon India and Flipkart.
//!
//! A single endpoint, `GET /api/prices?query=<text>`, searches both stores
//! concurrently, normalizes the first hit from each into a [`Quote`], and
//! flags the cheapest. Either store may fail or find nothing; the response
//! simply contains fewer quotes.
//!
//! ## Layout
//!
//! - [`domain`]: [`Quote`], [`Store`] and the price parser
//! - [`infrastructure::providers`]: one adapter per upstream API
//! - [`application`]: the [`PriceAggregator`] and best-price selection
//! - [`api::rest`]: axum router and handlers
//! - [`config`]: settings loaded once at startup
//!
//! [`Quote`]: domain::Quote
//! [`Store`]: domain::Store
//! [`PriceAggregator`]: application::PriceAggregator

pub mod api;
pub mod application;
pub mod config;
pub mod domain;
pub mod infrastructure;

use crate::api::rest::{AppState, create_router};
use crate::application::PriceAggregator;
use crate::config::Settings;
use crate::infrastructure::providers::{
    FlipkartAdapter, HttpClient, PriceProvider, ProviderResult, RainforestAdapter,
};
use axum::Router;
use std::sync::Arc;

/// Builds the aggregator with both store adapters from `settings`.
///
/// Provider order, and therefore response order, is Amazon then Flipkart.
///
/// # Errors
///
/// Returns `ProviderError::InternalError` if the HTTP client cannot be built.
pub fn build_aggregator(settings: &Settings) -> ProviderResult<PriceAggregator> {
    let client = HttpClient::new(settings.request_timeout_ms)?;

    if settings.rainforest_api_key.is_none() {
        tracing::warn!("RAINFOREST_API_KEY is not set; Amazon quotes will be unavailable");
    }

    let providers: Vec<Arc<dyn PriceProvider>> = vec![
        Arc::new(RainforestAdapter::new(settings.rainforest(), client.clone())),
        Arc::new(FlipkartAdapter::new(settings.flipkart(), client)),
    ];

    Ok(PriceAggregator::new(providers))
}

/// Builds the full HTTP application from `settings`.
///
/// # Errors
///
/// Same as [`build_aggregator`].
pub fn build_router(settings: &Settings) -> ProviderResult<Router> {
    let aggregator = build_aggregator(settings)?;
    let static_dir = settings.static_dir.as_deref().filter(|dir| dir.is_dir());

    Ok(create_router(AppState::new(aggregator), static_dir))
}
