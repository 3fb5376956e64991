//! # Product Model

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use super::errors::CatalogError;

/// Product lifecycle status
///
/// Serialized as the exact strings `ACTIVE` / `INACTIVE`; both transitions
/// are allowed, there are no other states.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ProductStatus {
    #[serde(rename = "ACTIVE")]
    Active,
    #[serde(rename = "INACTIVE")]
    Inactive,
}

impl ProductStatus {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProductStatus::Active => "ACTIVE",
            ProductStatus::Inactive => "INACTIVE",
        }
    }
}

impl FromStr for ProductStatus {
    type Err = CatalogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ACTIVE" => Ok(ProductStatus::Active),
            "INACTIVE" => Ok(ProductStatus::Inactive),
            _ => Err(CatalogError::InvalidStatus),
        }
    }
}

impl fmt::Display for ProductStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A catalog product
///
/// `id` is immutable once assigned. `price` is never written by the API;
/// it is kept so hand-edited data files survive whole-file rewrites and so
/// the price filters have something to match against.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub description: String,
    pub category: String,
    #[serde(default)]
    pub image_url: String,
    #[serde(default)]
    pub stock: u32,
    #[serde(default)]
    pub ratings: i64,
    pub status: ProductStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub price: Option<f64>,
}

/// Next id to assign: `max(existing ids) + 1`, or 1 for an empty catalog.
pub fn next_id(products: &[Product]) -> u64 {
    products.iter().map(|p| p.id).max().map_or(1, |max| max + 1)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn product(id: u64) -> Product {
        Product {
            id,
            name: format!("product-{}", id),
            description: "d".to_string(),
            category: "c".to_string(),
            image_url: String::new(),
            stock: 0,
            ratings: 0,
            status: ProductStatus::Active,
            price: None,
        }
    }

    #[test]
    fn test_next_id_empty_catalog() {
        assert_eq!(next_id(&[]), 1);
    }

    #[test]
    fn test_next_id_is_max_plus_one() {
        let products = vec![product(5), product(2)];
        assert_eq!(next_id(&products), 6);
    }

    #[test]
    fn test_status_parses_exact_strings_only() {
        assert_eq!("ACTIVE".parse::<ProductStatus>(), Ok(ProductStatus::Active));
        assert_eq!("INACTIVE".parse::<ProductStatus>(), Ok(ProductStatus::Inactive));
        assert_eq!(
            "active".parse::<ProductStatus>(),
            Err(CatalogError::InvalidStatus)
        );
        assert_eq!(
            " ACTIVE".parse::<ProductStatus>(),
            Err(CatalogError::InvalidStatus)
        );
    }

    #[test]
    fn test_product_json_shape() {
        let json = serde_json::to_value(product(1)).unwrap();
        assert_eq!(json["imageUrl"], "");
        assert_eq!(json["status"], "ACTIVE");
        // Absent price must stay absent, not serialize as null.
        assert!(json.get("price").is_none());
    }

    #[test]
    fn test_product_defaults_from_sparse_json() {
        let p: Product = serde_json::from_str(
            r#"{"id":1,"name":"a","description":"d","category":"c","status":"INACTIVE"}"#,
        )
        .unwrap();
        assert_eq!(p.stock, 0);
        assert_eq!(p.ratings, 0);
        assert_eq!(p.image_url, "");
        assert_eq!(p.status, ProductStatus::Inactive);
    }
}
