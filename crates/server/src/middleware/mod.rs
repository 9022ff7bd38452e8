//! HTTP middleware stack for the catalog server.
//!
//! # Middleware Order (bottom to top in Router)
//!
//! 1. CORS (permissive; the API is a public demo)
//! 2. `TraceLayer` (request tracing)
//! 3. Request ID (add unique ID to each request)

pub mod request_id;

pub use request_id::request_id_middleware;
