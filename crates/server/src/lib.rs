//! PartsBin Server library.
//!
//! This crate provides the catalog query service as a library, allowing
//! the router to be booted by both the binary and the integration tests.
//!
//! # Architecture
//!
//! - Axum web framework serving a JSON API under `/api`
//! - In-memory catalog seeded at startup, read-only afterwards
//! - Static storefront assets served as the router fallback
//!
//! # API Surface
//!
//! - `GET /api/parts` - filtered, paginated part listing
//! - `GET /api/parts/{id}` - single part lookup
//! - `GET /health` - liveness check

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod catalog;
pub mod config;
pub mod error;
pub mod middleware;
pub mod routes;
pub mod state;

use axum::{Router, routing::get};
use tower_http::cors::CorsLayer;
use tower_http::services::ServeDir;
use tower_http::trace::{DefaultOnResponse, OnResponse, TraceLayer};
use tracing::Span;

use state::AppState;

/// Build the application router: API routes, health check, static asset
/// fallback, and the middleware stack.
#[must_use]
pub fn app(state: AppState) -> Router {
    let static_dir = state.config().static_dir.clone();

    Router::new()
        .route("/health", get(health))
        .merge(routes::routes())
        .fallback_service(ServeDir::new(static_dir))
        .layer(axum::middleware::from_fn(
            middleware::request_id_middleware,
        ))
        .layer(
            TraceLayer::new_for_http()
                .make_span_with(|request: &axum::http::Request<_>| {
                    tracing::info_span!(
                        "http_request",
                        method = %request.method(),
                        uri = %request.uri(),
                        status = tracing::field::Empty,
                        latency_ms = tracing::field::Empty,
                        request_id = tracing::field::Empty,
                    )
                })
                .on_response(
                    |response: &axum::http::Response<_>,
                     latency: std::time::Duration,
                     span: &Span| {
                        span.record("status", response.status().as_u16());
                        #[allow(clippy::cast_possible_truncation)] // Millisecond latencies fit in u64
                        span.record("latency_ms", latency.as_millis() as u64);
                        DefaultOnResponse::default().on_response(response, latency, span);
                    },
                ),
        )
        .layer(CorsLayer::permissive())
        .with_state(state)
}

/// Liveness health check endpoint.
///
/// Returns "ok" if the server is running. Does not check dependencies.
async fn health() -> &'static str {
    "ok"
}
