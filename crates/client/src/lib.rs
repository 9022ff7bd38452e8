//! PartsBin Client - Storefront client core.
//!
//! Everything the browser storefront does apart from rendering: fetching
//! catalog pages, debouncing search input, tracking pagination state, and
//! managing the local cart. A rendering layer owns a [`Storefront`] and
//! draws whatever state it exposes.
//!
//! # Architecture
//!
//! - [`api::CatalogClient`] - HTTP client for the catalog query service
//! - [`feed::CatalogFeed`] - pagination state machine (reset vs. load-more)
//! - [`debounce::Debouncer`] - coalesces rapid search edits
//! - [`cart::Cart`] - local cart; checkout never leaves the client
//! - [`session::Storefront`] - ties the pieces together for a UI

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod api;
pub mod cart;
pub mod debounce;
pub mod feed;
pub mod session;

pub use api::{CatalogClient, ClientError};
pub use cart::{Cart, CartError, CartLine, CheckoutReceipt};
pub use debounce::Debouncer;
pub use feed::{CatalogFeed, FeedPhase, FeedRequest};
pub use session::Storefront;
