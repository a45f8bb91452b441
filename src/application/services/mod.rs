//! # Application Services
//!
//! - [`PriceAggregator`]: concurrent quote collection
//! - [`mark_best`]: cheapest-quote selection

pub mod best_price;
pub mod price_aggregation;

pub use best_price::{mark_best, min_price};
pub use price_aggregation::PriceAggregator;
