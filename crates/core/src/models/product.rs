use serde::{Deserialize, Serialize};

/// A catalog entry, either fetched from the remote backend or taken from the
/// built-in mock catalog. Immutable once fetched; the Cart Ledger snapshots
/// the fields it needs at add time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Product {
    /// Stable unique key (e.g., "apple-honeycrisp")
    pub id: String,

    /// Display name (e.g., "Honeycrisp Apple")
    pub name: String,

    /// Unit price in currency units. Non-negative.
    pub price: f64,

    /// Display label for the unit of sale (e.g., "each", "pint")
    pub unit: String,

    /// Marketing description shown on the detail page
    pub description: String,

    /// Asset path for the product image
    pub image: String,

    /// Remaining stock. Informational only — never enforced on add-to-cart.
    pub stock: u32,

    /// Display category (e.g., "Apples", "Berries")
    pub category: String,
}

impl Product {
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        price: f64,
        unit: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            price,
            unit: unit.into(),
            description: String::new(),
            image: String::new(),
            stock: 0,
            category: String::new(),
        }
    }
}
