// web_app/model/mod.rs - Shared data models for client and server
//
// These structs are used throughout the application for type-safe
// communication between frontend and backend.

use serde::{Deserialize, Serialize};

/// Fallback image shown when a product carries no image of its own.
pub const PLACEHOLDER_IMAGE: &str = "/placeholder.png";

/// Stock status enumeration
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProductStatus {
    #[default]
    InStock,
    OutOfStock,
}

impl ProductStatus {
    /// Human-readable label shown inside the status badge.
    pub fn label(&self) -> &'static str {
        match self {
            ProductStatus::InStock => "In Stock",
            ProductStatus::OutOfStock => "Out of Stock",
        }
    }

    /// Badge style tokens for this status.
    ///
    /// Kept as an explicit mapping so the class pair can be unit-tested
    /// without rendering anything.
    pub fn badge_class(&self) -> &'static str {
        match self {
            ProductStatus::InStock => {
                "inline-flex rounded-full px-2 py-1 text-xs bg-green-100 text-green-700"
            }
            ProductStatus::OutOfStock => {
                "inline-flex rounded-full px-2 py-1 text-xs bg-red-100 text-red-700"
            }
        }
    }
}

impl std::fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Inventory product record
///
/// Read-only input for the table renderer; the UI never mutates a field.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct Product {
    pub id: i32,
    pub name: String,
    pub category: String,
    pub price: rust_decimal::Decimal,
    pub stock: i32,
    pub status: ProductStatus,
    pub image_url: Option<String>,
}

impl Product {
    /// Price rendered with a leading currency symbol and exactly two
    /// decimal digits.
    pub fn price_label(&self) -> String {
        format!("${:.2}", self.price)
    }

    /// Image source for the thumbnail.
    ///
    /// An absent or empty `image_url` falls back to the placeholder path.
    pub fn thumbnail_src(&self) -> String {
        match self.image_url.as_deref() {
            Some(url) if !url.is_empty() => url.to_string(),
            _ => PLACEHOLDER_IMAGE.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal::Decimal;

    fn product(price: Decimal, status: ProductStatus, image_url: Option<&str>) -> Product {
        Product {
            id: 1,
            name: "Mechanical Keyboard".to_string(),
            category: "Electronics".to_string(),
            price,
            stock: 12,
            status,
            image_url: image_url.map(|s| s.to_string()),
        }
    }

    #[test]
    fn test_status_labels() {
        assert_eq!(ProductStatus::InStock.label(), "In Stock");
        assert_eq!(ProductStatus::OutOfStock.label(), "Out of Stock");
    }

    #[test]
    fn test_status_display_matches_label() {
        assert_eq!(ProductStatus::InStock.to_string(), "In Stock");
        assert_eq!(ProductStatus::OutOfStock.to_string(), "Out of Stock");
    }

    #[test]
    fn test_badge_class_mapping() {
        let in_stock = ProductStatus::InStock.badge_class();
        assert!(in_stock.contains("bg-green-100"));
        assert!(in_stock.contains("text-green-700"));

        let out_of_stock = ProductStatus::OutOfStock.badge_class();
        assert!(out_of_stock.contains("bg-red-100"));
        assert!(out_of_stock.contains("text-red-700"));
    }

    #[test]
    fn test_badge_class_shared_shape() {
        for status in [ProductStatus::InStock, ProductStatus::OutOfStock] {
            let class = status.badge_class();
            assert!(class.contains("inline-flex"));
            assert!(class.contains("rounded-full"));
            assert!(class.contains("text-xs"));
        }
    }

    #[test]
    fn test_status_serde_snake_case() {
        let json = serde_json::to_string(&ProductStatus::InStock).unwrap();
        assert_eq!(json, "\"in_stock\"");
        let json = serde_json::to_string(&ProductStatus::OutOfStock).unwrap();
        assert_eq!(json, "\"out_of_stock\"");

        let status: ProductStatus = serde_json::from_str("\"out_of_stock\"").unwrap();
        assert_eq!(status, ProductStatus::OutOfStock);
    }

    #[test]
    fn test_price_label_two_decimals() {
        let cases = [
            (Decimal::new(195, 1), "$19.50"),
            (Decimal::new(0, 0), "$0.00"),
            (Decimal::new(9999, 2), "$99.99"),
            (Decimal::new(100, 0), "$100.00"),
            (Decimal::new(1, 2), "$0.01"),
            (Decimal::new(123456, 2), "$1234.56"),
        ];

        for (price, expected) in cases {
            let p = product(price, ProductStatus::InStock, None);
            assert_eq!(p.price_label(), expected, "price {}", price);
        }
    }

    #[test]
    fn test_thumbnail_src_verbatim_when_present() {
        let p = product(Decimal::new(100, 0), ProductStatus::InStock, Some("/products/kb.png"));
        assert_eq!(p.thumbnail_src(), "/products/kb.png");
    }

    #[test]
    fn test_thumbnail_src_placeholder_when_missing() {
        let p = product(Decimal::new(100, 0), ProductStatus::InStock, None);
        assert_eq!(p.thumbnail_src(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_thumbnail_src_placeholder_when_empty() {
        let p = product(Decimal::new(100, 0), ProductStatus::InStock, Some(""));
        assert_eq!(p.thumbnail_src(), PLACEHOLDER_IMAGE);
    }

    #[test]
    fn test_product_serde_round_trip() {
        let p = product(Decimal::new(4999, 2), ProductStatus::OutOfStock, Some("/p.png"));
        let json = serde_json::to_string(&p).unwrap();
        let back: Product = serde_json::from_str(&json).unwrap();

        assert_eq!(back.id, p.id);
        assert_eq!(back.name, p.name);
        assert_eq!(back.price, p.price);
        assert_eq!(back.status, ProductStatus::OutOfStock);
        assert_eq!(back.image_url.as_deref(), Some("/p.png"));
    }
}
