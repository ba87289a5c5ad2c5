use serde::{Deserialize, Serialize};

use super::line_item::LineItem;

/// Customer details collected on the checkout page.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Customer {
    pub name: String,
    pub address: String,
}

impl Customer {
    pub fn new(name: impl Into<String>, address: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            address: address.into(),
        }
    }
}

/// One line of a checkout payload — the subset of the cart line the backend
/// needs for order placement.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutItem {
    pub id: String,
    pub name: String,
    pub price: f64,
    pub qty: u32,
}

impl From<&LineItem> for CheckoutItem {
    fn from(item: &LineItem) -> Self {
        Self {
            id: item.product.id.clone(),
            name: item.product.name.clone(),
            price: item.product.price,
            qty: item.qty,
        }
    }
}

/// The body POSTed to `{base}/checkout`. Built from the cart at submission
/// time and not retained afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CheckoutPayload {
    pub customer: Customer,
    pub items: Vec<CheckoutItem>,
    pub total: f64,
}

/// Result of a checkout submission — either the backend's response or a
/// locally synthesized confirmation when the backend is unreachable.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OrderConfirmation {
    #[serde(rename = "orderId")]
    pub order_id: String,

    pub status: String,

    #[serde(rename = "estimatedDeliveryDays")]
    pub estimated_delivery_days: u32,
}

impl OrderConfirmation {
    /// Synthesize the local fallback confirmation.
    ///
    /// The order id uses wall-clock milliseconds as a uniqueness proxy. That
    /// is not collision-safe under rapid repeated calls; preserved as-is
    /// rather than upgraded to a random id, since nothing downstream assumes
    /// more.
    #[must_use]
    pub fn mock() -> Self {
        Self {
            order_id: format!("MOCK-{}", chrono::Utc::now().timestamp_millis()),
            status: "confirmed".to_string(),
            estimated_delivery_days: 2,
        }
    }
}
