//! # Domain
//!
//! Core types for price comparison.
//!
//! - [`Quote`]: normalized offer from one store
//! - [`Store`]: known upstream stores
//! - [`parse_price`]: lossy price coercion

pub mod price;
pub mod quote;

pub use price::{parse_price, parse_price_str};
pub use quote::{IN_STOCK, OUT_OF_STOCK, Quote, Store};
