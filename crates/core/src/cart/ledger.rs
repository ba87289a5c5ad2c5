use std::sync::Arc;

use crate::models::line_item::LineItem;
use crate::models::order::{CheckoutItem, CheckoutPayload, Customer};
use crate::models::product::Product;
use crate::storage::kv::{KeyValueStore, CART_KEY};

use super::money;

/// Clamp a caller-supplied quantity into the stored range: at least 1, and
/// saturating at `u32::MAX` rather than wrapping to 0 on a cast.
fn clamp_qty(qty: i64) -> u32 {
    u32::try_from(qty.max(1)).unwrap_or(u32::MAX)
}

/// Derived cart figures, recomputed from the line items on every read.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CartTotals {
    pub subtotal: f64,
    pub shipping: f64,
    pub tax: f64,
    pub total: f64,
    pub count: u32,
}

/// The cart: an ordered list of line items (insertion order, one per product
/// id) plus derived totals, persisted to the injected store after every
/// mutation.
///
/// Mutations never fail. Invalid quantities are clamped to 1, mutations on
/// absent ids are no-ops, and a store that refuses the write just leaves the
/// in-memory state authoritative for the rest of the session.
pub struct CartLedger {
    items: Vec<LineItem>,
    store: Arc<dyn KeyValueStore>,
}

impl std::fmt::Debug for CartLedger {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CartLedger")
            .field("items", &self.items)
            .finish()
    }
}

impl CartLedger {
    /// Restore the cart from the store's cart key. Missing or malformed data
    /// is an empty cart, never an error.
    pub fn restore(store: Arc<dyn KeyValueStore>) -> Self {
        let items = store
            .get(CART_KEY)
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default();
        Self { items, store }
    }

    // ── Mutations ───────────────────────────────────────────────────

    /// Add `qty` of a product. If the product is already in the cart the
    /// existing line's quantity is incremented; otherwise a new line is
    /// appended. `qty` below 1 is clamped to 1.
    pub fn add_item(&mut self, product: &Product, qty: i64) {
        let qty = clamp_qty(qty);
        match self.items.iter_mut().find(|it| it.product.id == product.id) {
            Some(item) => item.qty = item.qty.saturating_add(qty),
            None => self.items.push(LineItem::new(product.clone(), qty)),
        }
        self.persist();
    }

    /// Set a line's quantity to `max(1, qty)`. No-op if the id is absent.
    pub fn update_qty(&mut self, id: &str, qty: i64) {
        if let Some(item) = self.items.iter_mut().find(|it| it.product.id == id) {
            item.qty = clamp_qty(qty);
            self.persist();
        }
    }

    /// Remove a line by product id. No-op if the id is absent.
    pub fn remove_item(&mut self, id: &str) {
        let before = self.items.len();
        self.items.retain(|it| it.product.id != id);
        if self.items.len() != before {
            self.persist();
        }
    }

    /// Empty the cart.
    pub fn clear(&mut self) {
        self.items.clear();
        self.persist();
    }

    // ── Derived values ──────────────────────────────────────────────

    /// Line items in insertion order.
    #[must_use]
    pub fn items(&self) -> &[LineItem] {
        &self.items
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Total unit count across all lines (UI badge).
    #[must_use]
    pub fn count(&self) -> u32 {
        self.items.iter().map(|it| it.qty).sum()
    }

    #[must_use]
    pub fn subtotal(&self) -> f64 {
        money::round2(self.items.iter().map(LineItem::line_total).sum())
    }

    #[must_use]
    pub fn shipping(&self) -> f64 {
        money::shipping_for(self.subtotal())
    }

    #[must_use]
    pub fn tax(&self) -> f64 {
        money::round2(self.subtotal() * money::TAX_RATE)
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        money::round2(self.subtotal() + self.tax() + self.shipping())
    }

    /// All derived figures at once.
    #[must_use]
    pub fn totals(&self) -> CartTotals {
        let subtotal = self.subtotal();
        let shipping = money::shipping_for(subtotal);
        let tax = money::round2(subtotal * money::TAX_RATE);
        CartTotals {
            subtotal,
            shipping,
            tax,
            total: money::round2(subtotal + tax + shipping),
            count: self.count(),
        }
    }

    // ── Checkout ────────────────────────────────────────────────────

    /// Build the checkout payload from the current lines and totals. The
    /// payload is a snapshot; clearing the cart afterwards does not touch it.
    #[must_use]
    pub fn checkout_payload(&self, customer: Customer) -> CheckoutPayload {
        CheckoutPayload {
            customer,
            items: self.items.iter().map(CheckoutItem::from).collect(),
            total: self.total(),
        }
    }

    // ── Internal ────────────────────────────────────────────────────

    /// Best-effort write of the full line-item list under the cart key.
    /// A failing store keeps the in-memory cart authoritative.
    fn persist(&self) {
        if let Ok(raw) = serde_json::to_string(&self.items) {
            let _ = self.store.set(CART_KEY, &raw);
        }
    }
}
