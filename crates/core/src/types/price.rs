//! Price formatting helpers.
//!
//! Catalog prices are plain [`Decimal`] values in US dollars. The helpers
//! here keep display formatting consistent between the server and the
//! storefront client.

use rust_decimal::Decimal;

/// Format a dollar amount for display (e.g., "$12.99").
#[must_use]
pub fn display_usd(amount: Decimal) -> String {
    format!("${amount:.2}")
}
