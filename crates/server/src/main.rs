//! PartsBin Server - Catalog query service.
//!
//! This binary serves the auto-parts catalog API on port 3003, along with
//! the static storefront bundle.
//!
//! # Architecture
//!
//! - Axum web framework serving a JSON API under `/api`
//! - In-memory catalog seeded at startup; no database, no mutable state
//! - Browser storefront served as static files from `public/`

#![cfg_attr(not(test), forbid(unsafe_code))]

use partsbin_server::catalog::Catalog;
use partsbin_server::config::ServerConfig;
use partsbin_server::state::AppState;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() {
    // Initialize tracing with EnvFilter.
    // Defaults to info level for our crate if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "partsbin_server=info,tower_http=debug".into());

    tracing_subscriber::registry()
        .with(env_filter)
        .with(tracing_subscriber::fmt::layer())
        .init();

    // Load configuration from environment
    let config = ServerConfig::from_env().expect("Failed to load configuration");

    // Seed the catalog: built-in dataset unless a catalog file is configured
    let catalog = match &config.catalog_file {
        Some(path) => Catalog::from_json_file(path).expect("Failed to load catalog file"),
        None => Catalog::seeded(),
    };
    tracing::info!(parts = catalog.len(), "Catalog seeded");

    // Build application state and router
    let state = AppState::new(config.clone(), catalog);
    let app = partsbin_server::app(state);

    // Start server
    let addr = config.socket_addr();

    let listener = match tokio::net::TcpListener::bind(addr).await {
        Ok(listener) => listener,
        Err(e) if e.kind() == std::io::ErrorKind::AddrInUse => {
            tracing::error!(
                "Port {} is already in use. Please try a different port.",
                addr.port()
            );
            std::process::exit(1);
        }
        Err(e) => {
            tracing::error!("Failed to bind to {addr}: {e}");
            std::process::exit(1);
        }
    };

    tracing::info!("catalog server listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await
        .expect("Server error");
}

/// Wait for shutdown signal (Ctrl+C or SIGTERM).
async fn shutdown_signal() {
    let ctrl_c = async {
        tokio::signal::ctrl_c()
            .await
            .expect("Failed to install Ctrl+C handler");
    };

    #[cfg(unix)]
    let terminate = async {
        tokio::signal::unix::signal(tokio::signal::unix::SignalKind::terminate())
            .expect("Failed to install signal handler")
            .recv()
            .await;
    };

    #[cfg(not(unix))]
    let terminate = std::future::pending::<()>();

    tokio::select! {
        () = ctrl_c => {},
        () = terminate => {},
    }

    tracing::info!("Shutdown signal received, starting graceful shutdown");
}
