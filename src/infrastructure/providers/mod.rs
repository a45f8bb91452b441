//! # Price Providers
//!
//! Adapters for the upstream price sources.
//!
//! ## Available Adapters
//!
//! - [`RainforestAdapter`]: Amazon India via the Rainforest search API
//! - [`FlipkartAdapter`]: Flipkart via the public scraper API
//!
//! Both implement [`PriceProvider`] and share [`HttpClient`] and the
//! [`normalize`] extraction helper.

pub mod error;
pub mod flipkart;
pub mod http_client;
pub mod normalize;
pub mod rainforest;
pub mod traits;

pub use error::{ProviderError, ProviderResult};
pub use flipkart::{FlipkartAdapter, FlipkartConfig};
pub use http_client::HttpClient;
pub use rainforest::{RainforestAdapter, RainforestConfig};
pub use traits::PriceProvider;
