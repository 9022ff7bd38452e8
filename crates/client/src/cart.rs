//! Local shopping cart.
//!
//! The cart lives entirely in the client; nothing here touches the
//! network. Checkout clears the cart and hands back a receipt for the UI
//! to display; no order is recorded anywhere once it returns.

use partsbin_core::{Part, PartId, display_usd};
use rust_decimal::Decimal;
use thiserror::Error;

/// Errors from cart operations.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum CartError {
    /// Checkout was attempted with nothing in the cart.
    #[error("Your cart is empty")]
    EmptyCart,
}

/// One part in the cart together with the quantity wanted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartLine {
    /// The catalog part this line holds.
    pub part: Part,
    /// How many units; never below 1.
    pub quantity: u32,
}

impl CartLine {
    /// Price of this line: unit price times quantity.
    #[must_use]
    pub fn line_total(&self) -> Decimal {
        self.part.price * Decimal::from(self.quantity)
    }

    /// Unit price formatted for display (e.g., "$12.99").
    #[must_use]
    pub fn price_label(&self) -> String {
        display_usd(self.part.price)
    }
}

/// Receipt handed back by a successful checkout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckoutReceipt {
    /// Units across all lines.
    pub item_count: u32,
    /// Sum of all line totals.
    pub total: Decimal,
}

/// The local cart: at most one line per part id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cart {
    lines: Vec<CartLine>,
}

impl Cart {
    /// Create an empty cart.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Add one unit of `part`.
    ///
    /// A part already in the cart gains a unit instead of a second line.
    pub fn add(&mut self, part: &Part) {
        match self.line_mut(part.id) {
            Some(line) => line.quantity = line.quantity.saturating_add(1),
            None => self.lines.push(CartLine {
                part: part.clone(),
                quantity: 1,
            }),
        }
    }

    /// Remove the line for `id` entirely; no-op if absent.
    pub fn remove(&mut self, id: PartId) {
        self.lines.retain(|line| line.part.id != id);
    }

    /// Adjust the quantity of the line for `id` by `delta`, clamped to a
    /// minimum of 1; no-op if absent.
    ///
    /// Use [`Self::remove`] to drop a line; decrementing cannot.
    pub fn adjust_quantity(&mut self, id: PartId, delta: i32) {
        if let Some(line) = self.line_mut(id) {
            let adjusted = i64::from(line.quantity) + i64::from(delta);
            line.quantity = u32::try_from(adjusted.max(1)).unwrap_or(u32::MAX);
        }
    }

    /// Clear the cart and return a receipt.
    ///
    /// # Errors
    ///
    /// Returns [`CartError::EmptyCart`] (and changes nothing) if there is
    /// nothing to check out.
    pub fn checkout(&mut self) -> Result<CheckoutReceipt, CartError> {
        if self.lines.is_empty() {
            return Err(CartError::EmptyCart);
        }

        let receipt = CheckoutReceipt {
            item_count: self.item_count(),
            total: self.subtotal(),
        };
        self.lines.clear();

        Ok(receipt)
    }

    /// Sum of line totals across the cart.
    #[must_use]
    pub fn subtotal(&self) -> Decimal {
        self.lines.iter().map(CartLine::line_total).sum()
    }

    /// Subtotal formatted for display (e.g., "$102.98").
    #[must_use]
    pub fn subtotal_label(&self) -> String {
        display_usd(self.subtotal())
    }

    /// Total units across all lines.
    #[must_use]
    pub fn item_count(&self) -> u32 {
        self.lines.iter().map(|line| line.quantity).sum()
    }

    /// The cart lines, in the order parts were first added.
    #[must_use]
    pub fn lines(&self) -> &[CartLine] {
        &self.lines
    }

    /// Whether the cart holds no lines.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// Number of distinct lines (not units).
    #[must_use]
    pub fn len(&self) -> usize {
        self.lines.len()
    }

    fn line_mut(&mut self, id: PartId) -> Option<&mut CartLine> {
        self.lines.iter_mut().find(|line| line.part.id == id)
    }
}
