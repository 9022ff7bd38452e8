//! PartsBin Core - Shared types library.
//!
//! This crate provides common types used across all PartsBin components:
//! - `server` - Catalog query service (the HTTP API)
//! - `client` - Storefront client core (feed, cart, API client)
//!
//! # Architecture
//!
//! The core crate contains only types - no I/O, no HTTP clients. This keeps
//! it lightweight and allows it to be used anywhere.
//!
//! # Modules
//!
//! - [`types`] - The `Part` record, type-safe IDs, query/page values, and
//!   price formatting

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod types;

pub use types::*;
