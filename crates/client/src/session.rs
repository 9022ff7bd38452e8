//! Storefront session driver.
//!
//! [`Storefront`] owns the API client, the catalog feed, the search
//! debouncer, and the cart, and runs the request/response loop between
//! them. A rendering layer calls in on user events, reads the feed and
//! cart afterwards, and draws; this crate never draws anything.
//!
//! The caller supplies `Instant`s for search input so its own event loop
//! (or a test) controls the debounce clock.

use std::time::{Duration, Instant};

use partsbin_core::{Part, PartId};
use rust_decimal::Decimal;

use crate::api::{CatalogClient, ClientError};
use crate::cart::Cart;
use crate::debounce::Debouncer;
use crate::feed::{CatalogFeed, FeedRequest};

/// Parts fetched per page, matching the storefront grid.
pub const PAGE_SIZE: usize = 8;

/// Quiet period before a search edit becomes a query.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

/// Drives the catalog feed and cart against a live catalog service.
pub struct Storefront {
    client: CatalogClient,
    feed: CatalogFeed,
    cart: Cart,
    search_debounce: Debouncer<String>,
}

impl Storefront {
    /// Create a storefront session against the service at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::InvalidBaseUrl` if `base_url` is invalid.
    pub fn new(base_url: &str) -> Result<Self, ClientError> {
        Ok(Self {
            client: CatalogClient::new(base_url)?,
            feed: CatalogFeed::new(PAGE_SIZE),
            cart: Cart::new(),
            search_debounce: Debouncer::new(SEARCH_DEBOUNCE),
        })
    }

    /// Load the first page with the current filters.
    ///
    /// Also the retry path after an error: the feed resets and refetches.
    pub async fn open(&mut self) {
        let request = self.feed.refresh();
        self.execute(request).await;
    }

    /// Record a search box edit at `now`.
    ///
    /// The query fires via [`Self::tick`] once the input goes quiet.
    pub fn search_input(&mut self, text: impl Into<String>, now: Instant) {
        self.search_debounce.submit(text.into(), now);
    }

    /// Fire the debounced search if its quiet period has elapsed by `now`.
    ///
    /// Returns `true` if a query ran. Settled input that matches the
    /// active search is dropped without a refetch.
    pub async fn tick(&mut self, now: Instant) -> bool {
        let Some(text) = self.search_debounce.poll(now) else {
            return false;
        };
        match self.feed.set_search(text) {
            Some(request) => {
                self.execute(request).await;
                true
            }
            None => false,
        }
    }

    /// Next instant [`Self::tick`] could do work, if any input is pending.
    #[must_use]
    pub fn next_tick_at(&self) -> Option<Instant> {
        self.search_debounce.due_at()
    }

    /// Commit a new maximum price bound and refetch immediately.
    ///
    /// Unlike search input this is not debounced: the UI commits once the
    /// user releases the slider.
    pub async fn commit_max_price(&mut self, max_price: Option<Decimal>) {
        if let Some(request) = self.feed.set_max_price(max_price) {
            self.execute(request).await;
        }
    }

    /// Fetch the next page and append it to the feed.
    ///
    /// Does nothing unless the feed is loaded with more pages available.
    pub async fn load_more(&mut self) {
        if let Some(request) = self.feed.load_more() {
            self.execute(request).await;
        }
    }

    /// Fetch a part for the detail view.
    ///
    /// # Errors
    ///
    /// Returns `ClientError::NotFound` if the part does not exist, or a
    /// transport error.
    pub async fn view_part(&self, id: PartId) -> Result<Part, ClientError> {
        self.client.fetch_part(id).await
    }

    /// The catalog feed state the UI renders from.
    #[must_use]
    pub const fn feed(&self) -> &CatalogFeed {
        &self.feed
    }

    /// The local cart.
    #[must_use]
    pub const fn cart(&self) -> &Cart {
        &self.cart
    }

    /// Mutable cart access for add/remove/checkout operations.
    pub const fn cart_mut(&mut self) -> &mut Cart {
        &mut self.cart
    }

    async fn execute(&mut self, request: FeedRequest) {
        match self.client.fetch_page(&request.query).await {
            Ok(page) => {
                if !self.feed.complete(request.generation, page) {
                    tracing::debug!(
                        generation = request.generation,
                        "Discarded stale catalog response"
                    );
                }
            }
            Err(e) => {
                tracing::warn!(error = %e, "Catalog query failed");
                self.feed.fail(request.generation, e.to_string());
            }
        }
    }
}
