//! Catalog feed state machine.
//!
//! [`CatalogFeed`] tracks what the part grid shows: the accumulated pages,
//! the active filters, and whether a request is in flight. It is a pure
//! state machine; the session driver performs the HTTP and feeds results
//! back in.
//!
//! # Reset vs. load-more
//!
//! Changing the search text or the price bound discards the accumulated
//! parts and starts over at the first page. Load-more keeps them and
//! requests the next window. Both hand the caller a [`FeedRequest`] to
//! execute.
//!
//! # Staleness
//!
//! Every reset bumps a generation counter, and each request carries the
//! generation it was issued under. [`CatalogFeed::complete`] ignores
//! responses from older generations, so a slow first query can never
//! clobber the results of a newer one.

use partsbin_core::{Part, PartPage, PartsQuery};
use rust_decimal::Decimal;

/// What the part grid is doing right now.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FeedPhase {
    /// No query has been issued yet.
    Idle,
    /// A request is in flight.
    Loading,
    /// At least one part is on display.
    Loaded,
    /// The first page of the current filters matched nothing.
    Empty,
    /// The last request failed.
    Error(String),
}

/// A query the caller should execute against the catalog service.
///
/// `generation` ties the eventual response back to the filter state that
/// issued it; pass it to [`CatalogFeed::complete`] or
/// [`CatalogFeed::fail`] along with the outcome.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FeedRequest {
    /// Generation the request was issued under.
    pub generation: u64,
    /// The query to run.
    pub query: PartsQuery,
}

/// Pagination state machine for the part grid.
#[derive(Debug, Clone)]
pub struct CatalogFeed {
    phase: FeedPhase,
    parts: Vec<Part>,
    total: usize,
    has_more: bool,
    search: String,
    max_price: Option<Decimal>,
    page_size: usize,
    generation: u64,
}

impl CatalogFeed {
    /// Create an idle feed that fetches `page_size` parts at a time.
    ///
    /// A zero `page_size` is clamped to 1.
    #[must_use]
    pub fn new(page_size: usize) -> Self {
        Self {
            phase: FeedPhase::Idle,
            parts: Vec::new(),
            total: 0,
            has_more: false,
            search: String::new(),
            max_price: None,
            page_size: page_size.max(1),
            generation: 0,
        }
    }

    /// Discard everything and reload the first page with the current
    /// filters.
    ///
    /// This is the initial-load path and the retry path after an error.
    pub fn refresh(&mut self) -> FeedRequest {
        self.reset()
    }

    /// Update the search text.
    ///
    /// Returns the reset request if the text actually changed, `None` if
    /// it matches the current filter.
    pub fn set_search(&mut self, text: impl Into<String>) -> Option<FeedRequest> {
        let text = text.into();
        if text == self.search {
            return None;
        }
        self.search = text;
        Some(self.reset())
    }

    /// Update the maximum price bound (`None` removes it).
    ///
    /// Returns the reset request if the bound actually changed, `None` if
    /// it matches the current filter.
    pub fn set_max_price(&mut self, max_price: Option<Decimal>) -> Option<FeedRequest> {
        if max_price == self.max_price {
            return None;
        }
        self.max_price = max_price;
        Some(self.reset())
    }

    /// Request the next page, keeping the parts already on display.
    ///
    /// Only valid when the feed is `Loaded` with more pages available;
    /// returns `None` otherwise (including while a request is in flight,
    /// so double-clicks cannot double-fetch).
    pub fn load_more(&mut self) -> Option<FeedRequest> {
        if self.phase != FeedPhase::Loaded || !self.has_more {
            return None;
        }
        self.phase = FeedPhase::Loading;
        Some(self.request(self.parts.len()))
    }

    /// Feed a successful response back into the machine.
    ///
    /// Returns `false` (and changes nothing) if the response is stale: it
    /// belongs to an older generation, or no request is in flight. A
    /// fetched page shorter than the page size marks the end of the
    /// filtered set.
    pub fn complete(&mut self, generation: u64, page: PartPage) -> bool {
        if generation != self.generation || self.phase != FeedPhase::Loading {
            return false;
        }

        self.has_more = page.parts.len() >= self.page_size;
        self.total = page.total;
        self.parts.extend(page.parts);
        self.phase = if self.parts.is_empty() {
            FeedPhase::Empty
        } else {
            FeedPhase::Loaded
        };
        true
    }

    /// Feed a failed request back into the machine.
    ///
    /// Returns `false` (and changes nothing) if the failure is stale,
    /// under the same rules as [`Self::complete`].
    pub fn fail(&mut self, generation: u64, message: impl Into<String>) -> bool {
        if generation != self.generation || self.phase != FeedPhase::Loading {
            return false;
        }
        self.phase = FeedPhase::Error(message.into());
        true
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> &FeedPhase {
        &self.phase
    }

    /// Accumulated parts, in catalog order.
    #[must_use]
    pub fn parts(&self) -> &[Part] {
        &self.parts
    }

    /// Total matches for the current filters, as last reported.
    #[must_use]
    pub const fn total(&self) -> usize {
        self.total
    }

    /// Whether another page is expected to exist.
    #[must_use]
    pub const fn has_more(&self) -> bool {
        self.has_more
    }

    /// Active search text.
    #[must_use]
    pub fn search(&self) -> &str {
        &self.search
    }

    /// Active maximum price bound.
    #[must_use]
    pub const fn max_price(&self) -> Option<Decimal> {
        self.max_price
    }

    /// Current generation; bumped on every reset.
    #[must_use]
    pub const fn generation(&self) -> u64 {
        self.generation
    }

    /// Page size requests are issued with.
    #[must_use]
    pub const fn page_size(&self) -> usize {
        self.page_size
    }

    fn reset(&mut self) -> FeedRequest {
        self.parts.clear();
        self.total = 0;
        self.has_more = false;
        self.generation += 1;
        self.phase = FeedPhase::Loading;
        self.request(0)
    }

    fn request(&self, offset: usize) -> FeedRequest {
        FeedRequest {
            generation: self.generation,
            query: PartsQuery {
                search: self.search.clone(),
                min_price: Decimal::ZERO,
                max_price: self.max_price,
                offset,
                limit: self.page_size,
            },
        }
    }
}
