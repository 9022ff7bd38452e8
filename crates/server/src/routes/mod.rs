//! HTTP route handlers for the catalog API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /health           - Health check
//!
//! # Parts
//! GET  /api/parts        - Filtered, paginated part listing
//! GET  /api/parts/{id}   - Single part lookup
//! ```
//!
//! Static storefront assets are served from the configured directory as
//! the router fallback, with `index.html` as the root document.

pub mod parts;

use axum::{Router, routing::get};

use crate::state::AppState;

/// Create the parts routes router.
pub fn parts_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(parts::index))
        .route("/{id}", get(parts::show))
}

/// Create all API routes for the catalog service.
pub fn routes() -> Router<AppState> {
    Router::new().nest("/api/parts", parts_routes())
}
