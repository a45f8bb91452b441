//! # REST API
//!
//! HTTP surface built on axum.
//!
//! # Endpoints
//!
//! - `GET /api/prices?query=<text>` - Compare prices across stores
//! - `GET /health` - Liveness check
//!
//! Anything else falls through to the static asset directory, if one is
//! configured.
//!
//! # Usage
//!
//! ```ignore
//! use price_compare::api::rest::{create_router, AppState};
//!
//! let router = create_router(AppState::new(aggregator), None);
//! let listener = tokio::net::TcpListener::bind("0.0.0.0:5000").await?;
//! axum::serve(listener, router).await?;
//! ```

pub mod handlers;
pub mod routes;

pub use handlers::{AppState, HealthResponse, PriceQuery, PricesResponse};
pub use routes::create_router;
