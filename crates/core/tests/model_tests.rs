// ═══════════════════════════════════════════════════════════════════
// Model Tests — Product, LineItem, order types, Theme, money helpers
// ═══════════════════════════════════════════════════════════════════

use fruit_shop_core::cart::money::{self, FREE_SHIPPING_OVER, SHIPPING_FLAT, TAX_RATE};
use fruit_shop_core::models::line_item::LineItem;
use fruit_shop_core::models::order::{
    CheckoutItem, CheckoutPayload, Customer, OrderConfirmation,
};
use fruit_shop_core::models::product::Product;
use fruit_shop_core::models::theme::Theme;

fn apple() -> Product {
    Product {
        id: "apple-honeycrisp".to_string(),
        name: "Honeycrisp Apple".to_string(),
        price: 1.99,
        unit: "each".to_string(),
        description: "Crisp and juicy.".to_string(),
        image: "/assets/apple.png".to_string(),
        stock: 100,
        category: "Apples".to_string(),
    }
}

// ═══════════════════════════════════════════════════════════════════
// Product
// ═══════════════════════════════════════════════════════════════════

mod product {
    use super::*;

    #[test]
    fn serde_roundtrip() {
        let p = apple();
        let json = serde_json::to_string(&p).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();
        assert_eq!(p, back);
    }

    #[test]
    fn deserializes_backend_wire_format() {
        let json = r#"{
            "id": "orange-navel",
            "name": "Navel Orange",
            "price": 0.99,
            "unit": "each",
            "description": "Seedless.",
            "image": "/assets/orange.png",
            "stock": 150,
            "category": "Citrus"
        }"#;
        let p: Product = serde_json::from_str(json).unwrap();
        assert_eq!(p.id, "orange-navel");
        assert_eq!(p.price, 0.99);
        assert_eq!(p.stock, 150);
    }

    #[test]
    fn new_fills_display_fields_empty() {
        let p = Product::new("kiwi", "Kiwi", 0.75, "each");
        assert_eq!(p.id, "kiwi");
        assert_eq!(p.price, 0.75);
        assert!(p.description.is_empty());
        assert_eq!(p.stock, 0);
    }
}

// ═══════════════════════════════════════════════════════════════════
// LineItem
// ═══════════════════════════════════════════════════════════════════

mod line_item {
    use super::*;

    #[test]
    fn new_clamps_zero_qty_to_one() {
        let item = LineItem::new(apple(), 0);
        assert_eq!(item.qty, 1);
    }

    #[test]
    fn line_total_multiplies_price_by_qty() {
        let item = LineItem::new(apple(), 3);
        assert!((item.line_total() - 5.97).abs() < 1e-9);
    }

    #[test]
    fn json_is_flattened_product_plus_qty() {
        // The persisted cart format has always been the product object with
        // a qty key spliced in; the flatten must keep that shape.
        let item = LineItem::new(apple(), 2);
        let value: serde_json::Value = serde_json::to_value(&item).unwrap();
        assert_eq!(value["id"], "apple-honeycrisp");
        assert_eq!(value["price"], 1.99);
        assert_eq!(value["qty"], 2);
        assert!(value.get("product").is_none());
    }

    #[test]
    fn deserializes_legacy_cart_entry() {
        let json = r#"{
            "id": "strawberry",
            "name": "Strawberries",
            "price": 3.99,
            "unit": "pint",
            "description": "Sweet.",
            "image": "/assets/strawberry.png",
            "stock": 80,
            "category": "Berries",
            "qty": 4
        }"#;
        let item: LineItem = serde_json::from_str(json).unwrap();
        assert_eq!(item.product.id, "strawberry");
        assert_eq!(item.qty, 4);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Order types
// ═══════════════════════════════════════════════════════════════════

mod order {
    use super::*;

    #[test]
    fn checkout_item_from_line_item() {
        let item = LineItem::new(apple(), 2);
        let ci = CheckoutItem::from(&item);
        assert_eq!(ci.id, "apple-honeycrisp");
        assert_eq!(ci.name, "Honeycrisp Apple");
        assert_eq!(ci.price, 1.99);
        assert_eq!(ci.qty, 2);
    }

    #[test]
    fn payload_serializes_wire_shape() {
        let payload = CheckoutPayload {
            customer: Customer::new("Ada", "1 Fruit Lane"),
            items: vec![CheckoutItem {
                id: "strawberry".to_string(),
                name: "Strawberries".to_string(),
                price: 3.99,
                qty: 1,
            }],
            total: 9.26,
        };
        let value: serde_json::Value = serde_json::to_value(&payload).unwrap();
        assert_eq!(value["customer"]["name"], "Ada");
        assert_eq!(value["customer"]["address"], "1 Fruit Lane");
        assert_eq!(value["items"][0]["id"], "strawberry");
        assert_eq!(value["total"], 9.26);
    }

    #[test]
    fn confirmation_uses_camel_case_field_names() {
        let json = r#"{"orderId":"SRV-42","status":"confirmed","estimatedDeliveryDays":5}"#;
        let c: OrderConfirmation = serde_json::from_str(json).unwrap();
        assert_eq!(c.order_id, "SRV-42");
        assert_eq!(c.estimated_delivery_days, 5);

        let back = serde_json::to_value(&c).unwrap();
        assert!(back.get("orderId").is_some());
        assert!(back.get("estimatedDeliveryDays").is_some());
        assert!(back.get("order_id").is_none());
    }

    #[test]
    fn mock_confirmation_shape() {
        let c = OrderConfirmation::mock();
        assert!(c.order_id.starts_with("MOCK-"));
        assert!(c.order_id["MOCK-".len()..].chars().all(|ch| ch.is_ascii_digit()));
        assert_eq!(c.status, "confirmed");
        assert_eq!(c.estimated_delivery_days, 2);
    }
}

// ═══════════════════════════════════════════════════════════════════
// Theme
// ═══════════════════════════════════════════════════════════════════

mod theme {
    use super::*;

    #[test]
    fn default_is_light() {
        assert_eq!(Theme::default(), Theme::Light);
    }

    #[test]
    fn parse_known_values() {
        assert_eq!(Theme::parse("light"), Theme::Light);
        assert_eq!(Theme::parse("dark"), Theme::Dark);
    }

    #[test]
    fn parse_unknown_falls_back_to_light() {
        assert_eq!(Theme::parse("solarized"), Theme::Light);
        assert_eq!(Theme::parse(""), Theme::Light);
    }

    #[test]
    fn toggled_flips() {
        assert_eq!(Theme::Light.toggled(), Theme::Dark);
        assert_eq!(Theme::Dark.toggled(), Theme::Light);
    }

    #[test]
    fn display_matches_persisted_form() {
        assert_eq!(Theme::Light.to_string(), "light");
        assert_eq!(Theme::Dark.to_string(), "dark");
    }
}

// ═══════════════════════════════════════════════════════════════════
// Money
// ═══════════════════════════════════════════════════════════════════

mod money_helpers {
    use super::*;

    #[test]
    fn policy_constants() {
        assert_eq!(TAX_RATE, 0.07);
        assert_eq!(SHIPPING_FLAT, 4.99);
        assert_eq!(FREE_SHIPPING_OVER, 25.0);
    }

    #[test]
    fn round2_exact_values_pass_through() {
        assert_eq!(money::round2(10.0), 10.0);
        assert_eq!(money::round2(0.31), 0.31);
    }

    #[test]
    fn round2_rounds_half_up() {
        assert_eq!(money::round2(1.005), 1.01);
        assert_eq!(money::round2(2.675), 2.68);
    }

    #[test]
    fn round2_survives_binary_float_hazards() {
        // 19.99 * 0.07 = 1.3993 must round to 1.40, not truncate to 1.39
        assert_eq!(money::round2(19.99 * 0.07), 1.40);
        // 0.1 + 0.2 is famously 0.30000000000000004
        assert_eq!(money::round2(0.1 + 0.2), 0.3);
    }

    #[test]
    fn shipping_policy() {
        assert_eq!(money::shipping_for(0.0), 0.0);
        assert_eq!(money::shipping_for(10.0), SHIPPING_FLAT);
        assert_eq!(money::shipping_for(25.0), SHIPPING_FLAT);
        assert_eq!(money::shipping_for(25.01), 0.0);
    }
}
