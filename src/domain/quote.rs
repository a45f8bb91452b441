//! # Quote
//!
//! Normalized price offer from one store for one search query.
//!
//! A [`Quote`] is built fresh per request by a provider adapter and
//! discarded once the response is sent. The `best` flag is owned by the
//! aggregator; adapters always construct quotes with `best = false`.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Availability string used when the upstream signal is missing or ambiguous.
pub const IN_STOCK: &str = "In Stock";

/// Availability string for listings explicitly flagged as unavailable.
pub const OUT_OF_STOCK: &str = "Out of Stock";

/// Store a quote originates from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Store {
    /// Amazon India, queried through the Rainforest API.
    Amazon,
    /// Flipkart, queried through the public scraper API.
    Flipkart,
}

impl Store {
    /// Returns the display name used in API responses.
    #[inline]
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::Amazon => "Amazon",
            Self::Flipkart => "Flipkart",
        }
    }

    /// Returns the store homepage, used when a listing has no link.
    #[inline]
    #[must_use]
    pub fn homepage(&self) -> &'static str {
        match self {
            Self::Amazon => "https://www.amazon.in",
            Self::Flipkart => "https://www.flipkart.com",
        }
    }

    /// Returns the static shipping placeholder for this store.
    #[inline]
    #[must_use]
    pub fn shipping_note(&self) -> &'static str {
        match self {
            Self::Amazon => "See on Amazon",
            Self::Flipkart => "See on Flipkart",
        }
    }
}

impl fmt::Display for Store {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// A normalized price quote.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Quote {
    /// Originating store.
    pub store: Store,
    /// Price in whole currency units, `None` when unparseable.
    pub price: Option<f64>,
    /// Listing link, or the store homepage.
    pub url: String,
    /// Human-readable availability.
    pub status: String,
    /// Static shipping placeholder.
    pub shipping: String,
    /// True iff this quote carries the lowest known price.
    pub best: bool,
}

impl Quote {
    /// Creates a quote with store defaults: homepage URL, in-stock status,
    /// the store's shipping note and `best = false`.
    #[must_use]
    pub fn new(store: Store, price: Option<f64>) -> Self {
        Self {
            store,
            price,
            url: store.homepage().to_string(),
            status: IN_STOCK.to_string(),
            shipping: store.shipping_note().to_string(),
            best: false,
        }
    }

    /// Sets the listing URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Sets the availability status.
    #[must_use]
    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = status.into();
        self
    }
}

impl fmt::Display for Quote {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.price {
            Some(price) => write!(f, "Quote({} @ {:.2})", self.store, price),
            None => write!(f, "Quote({} @ -)", self.store),
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn new_fills_store_defaults() {
        let quote = Quote::new(Store::Flipkart, Some(499.0));
        assert_eq!(quote.url, "https://www.flipkart.com");
        assert_eq!(quote.status, IN_STOCK);
        assert_eq!(quote.shipping, "See on Flipkart");
        assert!(!quote.best);
    }

    #[test]
    fn serializes_wire_shape() {
        let quote = Quote::new(Store::Amazon, None).with_url("https://www.amazon.in/dp/X");
        let value = serde_json::to_value(&quote).unwrap();
        assert_eq!(
            value,
            json!({
                "store": "Amazon",
                "price": null,
                "url": "https://www.amazon.in/dp/X",
                "status": "In Stock",
                "shipping": "See on Amazon",
                "best": false
            })
        );
    }

    #[test]
    fn display() {
        assert_eq!(
            Quote::new(Store::Amazon, Some(1299.0)).to_string(),
            "Quote(Amazon @ 1299.00)"
        );
        assert_eq!(Quote::new(Store::Flipkart, None).to_string(), "Quote(Flipkart @ -)");
    }
}
