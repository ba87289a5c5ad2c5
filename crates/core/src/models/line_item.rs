use serde::{Deserialize, Serialize};

use super::product::Product;

/// One line of the cart: a product snapshot plus a quantity.
///
/// The product fields are flattened so the persisted JSON is the product
/// object with a `qty` key spliced in — the exact shape the storefront has
/// always written under its cart storage key, which keeps old persisted carts
/// readable.
///
/// The snapshot is taken at add time and is NOT re-synced if the catalog
/// price later changes (accepted staleness).
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LineItem {
    #[serde(flatten)]
    pub product: Product,

    /// Quantity. Always >= 1; callers supplying 0 or negative values are
    /// clamped by the ledger, never rejected.
    pub qty: u32,
}

impl LineItem {
    pub fn new(product: Product, qty: u32) -> Self {
        Self {
            product,
            qty: qty.max(1),
        }
    }

    /// Price × quantity for this line, unrounded.
    #[must_use]
    pub fn line_total(&self) -> f64 {
        self.product.price * f64::from(self.qty)
    }
}
