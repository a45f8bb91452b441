//! # Routes
//!
//! Router assembly with tracing, CORS and compression layers.

use crate::api::rest::handlers::{AppState, get_prices, health};
use axum::Router;
use axum::routing::get;
use std::path::Path;
use tower::ServiceBuilder;
use tower_http::compression::CompressionLayer;
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnRequest, DefaultOnResponse, TraceLayer};
use tracing::Level;

/// Builds the API router.
///
/// When `static_dir` is given, files under it are served for any path that
/// does not match an API route.
pub fn create_router(state: AppState, static_dir: Option<&Path>) -> Router {
    let trace = TraceLayer::new_for_http()
        .make_span_with(|req: &axum::http::Request<_>| {
            tracing::info_span!("http_request", method = %req.method(), uri = %req.uri())
        })
        .on_request(DefaultOnRequest::new().level(Level::DEBUG))
        .on_response(
            DefaultOnResponse::new()
                .level(Level::INFO)
                .latency_unit(tower_http::LatencyUnit::Millis),
        );

    let router = Router::new()
        .route("/api/prices", get(get_prices))
        .route("/health", get(health))
        .with_state(state);

    let router = match static_dir {
        Some(dir) => router.fallback_service(ServeDir::new(dir)),
        None => router,
    };

    router.layer(
        ServiceBuilder::new()
            .layer(trace)
            .layer(CompressionLayer::new())
            .layer(CorsLayer::permissive()),
    )
}
