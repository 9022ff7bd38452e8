//! Integration tests for PartsBin.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p partsbin-integration-tests
//! ```
//!
//! Each test boots the real catalog server on an ephemeral local port and
//! talks to it over HTTP; no external services are required.
//!
//! # Test Categories
//!
//! - `api_contract` - the catalog HTTP API wire contract
//! - `storefront_flow` - the client crate end to end: feed, staleness, cart

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::{IpAddr, Ipv4Addr};
use std::path::PathBuf;

use partsbin_server::catalog::Catalog;
use partsbin_server::config::ServerConfig;
use partsbin_server::state::AppState;

/// A catalog server running on an ephemeral local port.
///
/// Boots the real application (seed catalog, full middleware stack), so
/// tests exercise exactly what the binary serves. The server task is
/// aborted when the handle drops, giving each test an isolated instance.
pub struct TestServer {
    /// Base URL of the running server (e.g. `http://127.0.0.1:49152`).
    pub base_url: String,
    handle: tokio::task::JoinHandle<()>,
}

impl TestServer {
    /// Boot the app with the built-in seed catalog.
    ///
    /// # Panics
    ///
    /// Panics if the listener cannot be bound; no test can proceed
    /// without it.
    pub async fn spawn() -> Self {
        let config = ServerConfig {
            host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 0,
            static_dir: PathBuf::from("public"),
            catalog_file: None,
        };
        let state = AppState::new(config, Catalog::seeded());
        let app = partsbin_server::app(state);

        let listener = tokio::net::TcpListener::bind((Ipv4Addr::LOCALHOST, 0))
            .await
            .expect("Failed to bind test listener");
        let addr = listener.local_addr().expect("Listener has no local addr");

        let handle = tokio::spawn(async move {
            if let Err(e) = axum::serve(listener, app).await {
                tracing::error!("Test server error: {e}");
            }
        });

        Self {
            base_url: format!("http://{addr}"),
            handle,
        }
    }

    /// URL for a path under the test server, e.g. `url("/api/parts")`.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}
