pub mod cart;
pub mod client;
pub mod errors;
pub mod models;
pub mod storage;

use std::sync::Arc;

use cart::ledger::{CartLedger, CartTotals};
use client::commerce::CommerceClient;
use client::config::ClientConfig;
use models::line_item::LineItem;
use models::order::{Customer, OrderConfirmation};
use models::product::Product;
use models::theme::Theme;
use storage::kv::{KeyValueStore, THEME_KEY};

/// Main entry point for the Fruit Shop core library.
///
/// One `ShopSession` per user session (process/tab): it owns the cart
/// ledger, the data client, and the theme preference, all restored from the
/// injected store at construction. The UI layer holds this by reference and
/// renders its current state; there is no process-wide singleton.
#[must_use]
pub struct ShopSession {
    ledger: CartLedger,
    client: CommerceClient,
    store: Arc<dyn KeyValueStore>,
    theme: Theme,
}

impl std::fmt::Debug for ShopSession {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ShopSession")
            .field("cart_lines", &self.ledger.items().len())
            .field("mock_mode", &self.client.is_mock_mode())
            .field("theme", &self.theme)
            .finish()
    }
}

impl ShopSession {
    /// Start a session with the backend resolved from the environment.
    /// Cart and theme are restored from the store; anything missing or
    /// malformed falls back to an empty cart and the light theme.
    pub fn new(store: Arc<dyn KeyValueStore>) -> Self {
        Self::with_config(store, ClientConfig::from_env())
    }

    /// Start a session with an explicit client configuration (tests,
    /// embedding shells).
    pub fn with_config(store: Arc<dyn KeyValueStore>, config: ClientConfig) -> Self {
        let ledger = CartLedger::restore(Arc::clone(&store));
        let theme = store
            .get(THEME_KEY)
            .map(|raw| Theme::parse(&raw))
            .unwrap_or_default();
        Self {
            ledger,
            client: CommerceClient::new(config),
            store,
            theme,
        }
    }

    // ── Catalog ─────────────────────────────────────────────────────

    /// Fetch the catalog (remote or mock; never fails).
    pub async fn fetch_catalog(&self) -> Vec<Product> {
        self.client.fetch_catalog().await
    }

    /// Fetch a single product by id (remote or mock; `None` if unknown).
    pub async fn fetch_product(&self, id: &str) -> Option<Product> {
        self.client.fetch_product(id).await
    }

    // ── Cart ────────────────────────────────────────────────────────

    /// Add a product to the cart (quantity clamped to >= 1).
    pub fn add_to_cart(&mut self, product: &Product, qty: i64) {
        self.ledger.add_item(product, qty);
    }

    /// Set a cart line's quantity (clamped to >= 1; no-op on unknown id).
    pub fn update_qty(&mut self, id: &str, qty: i64) {
        self.ledger.update_qty(id, qty);
    }

    /// Remove a cart line (no-op on unknown id).
    pub fn remove_from_cart(&mut self, id: &str) {
        self.ledger.remove_item(id);
    }

    /// Empty the cart.
    pub fn clear_cart(&mut self) {
        self.ledger.clear();
    }

    /// Cart lines in insertion order.
    #[must_use]
    pub fn cart_items(&self) -> &[LineItem] {
        self.ledger.items()
    }

    /// Total unit count (UI badge).
    #[must_use]
    pub fn cart_count(&self) -> u32 {
        self.ledger.count()
    }

    #[must_use]
    pub fn subtotal(&self) -> f64 {
        self.ledger.subtotal()
    }

    #[must_use]
    pub fn shipping(&self) -> f64 {
        self.ledger.shipping()
    }

    #[must_use]
    pub fn tax(&self) -> f64 {
        self.ledger.tax()
    }

    #[must_use]
    pub fn total(&self) -> f64 {
        self.ledger.total()
    }

    /// All derived cart figures at once.
    #[must_use]
    pub fn cart_totals(&self) -> CartTotals {
        self.ledger.totals()
    }

    // ── Checkout ────────────────────────────────────────────────────

    /// Submit the cart as an order and empty it.
    ///
    /// The submission cannot fail from the caller's perspective: an
    /// unreachable backend yields a synthesized mock confirmation. The cart
    /// is cleared (and the empty list persisted) once the confirmation is
    /// in hand.
    pub async fn checkout(&mut self, customer: Customer) -> OrderConfirmation {
        let payload = self.ledger.checkout_payload(customer);
        let confirmation = self.client.submit_checkout(&payload).await;
        self.ledger.clear();
        confirmation
    }

    // ── Theme ───────────────────────────────────────────────────────

    #[must_use]
    pub fn theme(&self) -> Theme {
        self.theme
    }

    /// Set the theme and persist it (best-effort, like cart writes).
    pub fn set_theme(&mut self, theme: Theme) {
        self.theme = theme;
        let _ = self.store.set(THEME_KEY, theme.as_str());
    }

    /// Flip between light and dark, persisting the result.
    pub fn toggle_theme(&mut self) -> Theme {
        self.set_theme(self.theme.toggled());
        self.theme
    }

    // ── Access to the underlying units ──────────────────────────────

    /// Read-only view of the cart ledger.
    #[must_use]
    pub fn ledger(&self) -> &CartLedger {
        &self.ledger
    }

    /// The data client, for callers issuing concurrent catalog reads.
    #[must_use]
    pub fn client(&self) -> &CommerceClient {
        &self.client
    }
}
