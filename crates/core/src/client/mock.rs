//! The fixed mock catalog: served in mock mode and as the fallback whenever
//! the backend misbehaves. Deterministic — every call returns the same four
//! products.

use crate::models::product::Product;

/// The built-in catalog.
#[must_use]
pub fn catalog() -> Vec<Product> {
    vec![
        Product {
            id: "apple-honeycrisp".to_string(),
            name: "Honeycrisp Apple".to_string(),
            price: 1.99,
            unit: "each".to_string(),
            description: "Crisp, juicy and sweet with a hint of tartness — perfect for snacking."
                .to_string(),
            image: "/assets/apple.png".to_string(),
            stock: 100,
            category: "Apples".to_string(),
        },
        Product {
            id: "banana-cavendish".to_string(),
            name: "Cavendish Banana".to_string(),
            price: 0.49,
            unit: "each".to_string(),
            description: "Classic bananas with creamy texture and balanced sweetness.".to_string(),
            image: "/assets/banana.png".to_string(),
            stock: 200,
            category: "Bananas".to_string(),
        },
        Product {
            id: "orange-navel".to_string(),
            name: "Navel Orange".to_string(),
            price: 0.99,
            unit: "each".to_string(),
            description: "Seedless oranges with bright flavor and easy-to-peel skin.".to_string(),
            image: "/assets/orange.png".to_string(),
            stock: 150,
            category: "Citrus".to_string(),
        },
        Product {
            id: "strawberry".to_string(),
            name: "Strawberries".to_string(),
            price: 3.99,
            unit: "pint".to_string(),
            description: "Sweet and fragrant, great for desserts or a healthy snack.".to_string(),
            image: "/assets/strawberry.png".to_string(),
            stock: 80,
            category: "Berries".to_string(),
        },
    ]
}

/// Look up a mock product by id.
#[must_use]
pub fn product_by_id(id: &str) -> Option<Product> {
    catalog().into_iter().find(|p| p.id == id)
}
