//! Catalog part records.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::types::id::PartId;

/// A single part in the catalog.
///
/// This is the wire shape served by the HTTP API and consumed by the
/// storefront client. `price` serializes as a JSON number; everything
/// else is a string or integer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Part {
    /// Unique identifier.
    pub id: PartId,
    /// Display name, including the manufacturer's branding.
    pub name: String,
    /// Short marketing description.
    pub description: String,
    /// Manufacturer name, searched alongside name and description.
    pub manufacturer: String,
    /// Price in US dollars.
    #[serde(with = "rust_decimal::serde::float")]
    pub price: Decimal,
    /// Image URL for product cards.
    pub image: String,
}
