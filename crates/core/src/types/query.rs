//! Catalog query parameters and paged results.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::part::Part;

/// Page size applied when a query does not specify a limit.
pub const DEFAULT_PAGE_LIMIT: usize = 10;

/// Filter and pagination parameters for a catalog listing.
///
/// The search text and price bounds combine with AND semantics.
/// Pagination applies after filtering, so `PartPage::total` always
/// reflects the filtered set regardless of the window requested.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartsQuery {
    /// Case-insensitive substring matched against name, description, or
    /// manufacturer. Empty matches everything.
    pub search: String,
    /// Inclusive lower price bound.
    pub min_price: Decimal,
    /// Inclusive upper price bound; `None` means unbounded.
    pub max_price: Option<Decimal>,
    /// Number of filtered parts to skip.
    pub offset: usize,
    /// Maximum number of parts to return.
    pub limit: usize,
}

impl Default for PartsQuery {
    fn default() -> Self {
        Self {
            search: String::new(),
            min_price: Decimal::ZERO,
            max_price: None,
            offset: 0,
            limit: DEFAULT_PAGE_LIMIT,
        }
    }
}

impl PartsQuery {
    /// Whether `part` passes the search and price filters.
    #[must_use]
    pub fn matches(&self, part: &Part) -> bool {
        let needle = self.search.to_lowercase();
        let search_ok = needle.is_empty()
            || part.name.to_lowercase().contains(&needle)
            || part.description.to_lowercase().contains(&needle)
            || part.manufacturer.to_lowercase().contains(&needle);
        let price_ok = part.price >= self.min_price
            && self.max_price.is_none_or(|max| part.price <= max);
        search_ok && price_ok
    }
}

/// One page of catalog results.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartPage {
    /// The parts in the requested window, in catalog order.
    pub parts: Vec<Part>,
    /// Total number of parts matching the filters, ignoring pagination.
    pub total: usize,
}
