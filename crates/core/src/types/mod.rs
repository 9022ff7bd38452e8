//! Core types for PartsBin.
//!
//! This module provides type-safe wrappers for common domain concepts.

pub mod id;
pub mod part;
pub mod price;
pub mod query;

pub use id::*;
pub use part::Part;
pub use price::display_usd;
pub use query::{DEFAULT_PAGE_LIMIT, PartPage, PartsQuery};
