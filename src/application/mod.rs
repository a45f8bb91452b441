//! # Application
//!
//! Orchestration between the HTTP surface and the price providers.

pub mod error;
pub mod services;

pub use error::{AggregationError, AggregationResult};
pub use services::PriceAggregator;
