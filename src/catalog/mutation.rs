//! # Mutation Engine
//!
//! Validate-then-mutate logic for the three product write operations:
//! create, full replace (stock + status), and partial patch (stock XOR
//! status). All functions work on the caller's in-memory collection; the
//! caller persists it afterwards.
//!
//! Numeric fields accept either a JSON number or a numeric string, since
//! existing clients send both.

use serde::Deserialize;
use serde_json::Value;

use super::errors::{CatalogError, CatalogResult};
use super::product::{next_id, Product, ProductStatus};

// ==================
// Request Payloads
// ==================

/// Body of a create request; everything optional so validation can
/// produce field-level errors instead of deserialization failures.
#[derive(Debug, Default, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductDraft {
    pub name: Option<String>,
    pub description: Option<String>,
    pub category: Option<String>,
    pub image_url: Option<String>,
    pub stock: Option<Value>,
    pub ratings: Option<Value>,
    pub status: Option<String>,
}

/// Body of a replace (PUT) or patch (PATCH) request
#[derive(Debug, Default, Clone, Deserialize)]
pub struct UpdateFields {
    pub stock: Option<Value>,
    pub status: Option<String>,
}

/// The single field a partial update is allowed to change
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProductPatch {
    Stock(u32),
    Status(ProductStatus),
}

impl ProductPatch {
    /// Validates that exactly one updatable field is present and that it
    /// parses.
    pub fn from_fields(fields: &UpdateFields) -> CatalogResult<Self> {
        match (&fields.stock, &fields.status) {
            (Some(_), Some(_)) => Err(CatalogError::PatchBothFields),
            (None, None) => Err(CatalogError::PatchNoFields),
            (Some(stock), None) => Ok(ProductPatch::Stock(parse_stock(stock)?)),
            (None, Some(status)) => Ok(ProductPatch::Status(status.parse()?)),
        }
    }

    /// Merges the patched field into `product`, leaving everything else
    /// untouched.
    pub fn apply(&self, product: &mut Product) {
        match self {
            ProductPatch::Stock(stock) => product.stock = *stock,
            ProductPatch::Status(status) => product.status = *status,
        }
    }
}

// ==================
// Operations
// ==================

/// Creates a product and appends it to `products`.
///
/// `name`, `description`, `category` and `status` are required and must be
/// non-blank; string fields are trimmed; `name` must be unique
/// case-insensitively; `stock`/`ratings` default to 0.
pub fn create(products: &mut Vec<Product>, draft: ProductDraft) -> CatalogResult<Product> {
    let name = required_field(&draft.name)?;
    let description = required_field(&draft.description)?;
    let category = required_field(&draft.category)?;
    let status: ProductStatus = required_field(&draft.status)?.parse()?;

    let duplicate = products
        .iter()
        .any(|p| p.name.eq_ignore_ascii_case(&name));
    if duplicate {
        return Err(CatalogError::DuplicateName);
    }

    let product = Product {
        id: next_id(products),
        name,
        description,
        category,
        image_url: draft
            .image_url
            .as_deref()
            .map(str::trim)
            .unwrap_or_default()
            .to_string(),
        stock: draft.stock.as_ref().map(parse_stock).transpose()?.unwrap_or(0),
        ratings: draft
            .ratings
            .as_ref()
            .map(parse_ratings)
            .transpose()?
            .unwrap_or(0),
        status,
        price: None,
    };

    products.push(product.clone());
    Ok(product)
}

/// Full update: replaces `stock` and `status` on the product with the
/// given id, preserving every other field. Both fields are required.
pub fn replace(products: &mut [Product], id: u64, fields: &UpdateFields) -> CatalogResult<Product> {
    let (stock, status) = match (&fields.stock, &fields.status) {
        (Some(stock), Some(status)) => (parse_stock(stock)?, status.parse()?),
        _ => return Err(CatalogError::ReplaceFieldsRequired),
    };

    let product = find_mut(products, id)?;
    product.stock = stock;
    product.status = status;
    Ok(product.clone())
}

/// Partial update: merges exactly one of `stock` or `status` into the
/// product with the given id.
pub fn patch(products: &mut [Product], id: u64, fields: &UpdateFields) -> CatalogResult<Product> {
    let patch = ProductPatch::from_fields(fields)?;
    let product = find_mut(products, id)?;
    patch.apply(product);
    Ok(product.clone())
}

// ==================
// Helpers
// ==================

fn required_field(field: &Option<String>) -> CatalogResult<String> {
    match field.as_deref().map(str::trim) {
        Some(value) if !value.is_empty() => Ok(value.to_string()),
        _ => Err(CatalogError::MissingRequiredFields),
    }
}

fn find_mut(products: &mut [Product], id: u64) -> CatalogResult<&mut Product> {
    products
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(CatalogError::NotFound(id))
}

/// Parses a stock value: a non-negative integer, as a JSON number or a
/// numeric string.
fn parse_stock(value: &Value) -> CatalogResult<u32> {
    match value {
        Value::Number(n) => n
            .as_u64()
            .and_then(|n| u32::try_from(n).ok())
            .ok_or(CatalogError::InvalidStock),
        Value::String(s) => s.trim().parse().map_err(|_| CatalogError::InvalidStock),
        _ => Err(CatalogError::InvalidStock),
    }
}

/// Parses a ratings value: an integer, as a JSON number or a numeric string.
fn parse_ratings(value: &Value) -> CatalogResult<i64> {
    match value {
        Value::Number(n) => n.as_i64().ok_or(CatalogError::InvalidRatings),
        Value::String(s) => s.trim().parse().map_err(|_| CatalogError::InvalidRatings),
        _ => Err(CatalogError::InvalidRatings),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn draft(name: &str) -> ProductDraft {
        ProductDraft {
            name: Some(name.to_string()),
            description: Some("d".to_string()),
            category: Some("c".to_string()),
            status: Some("ACTIVE".to_string()),
            ..ProductDraft::default()
        }
    }

    fn seeded(name: &str) -> Vec<Product> {
        let mut products = Vec::new();
        create(&mut products, draft(name)).unwrap();
        products
    }

    // ==================
    // Create
    // ==================

    #[test]
    fn test_create_on_empty_catalog_fills_defaults() {
        let mut products = Vec::new();
        let product = create(&mut products, draft("A")).unwrap();

        assert_eq!(product.id, 1);
        assert_eq!(product.stock, 0);
        assert_eq!(product.ratings, 0);
        assert_eq!(product.image_url, "");
        assert_eq!(product.status, ProductStatus::Active);
        assert_eq!(products, vec![product]);
    }

    #[test]
    fn test_create_trims_string_fields() {
        let mut products = Vec::new();
        let product = create(
            &mut products,
            ProductDraft {
                name: Some("  Widget ".to_string()),
                description: Some(" desc ".to_string()),
                category: Some(" tools ".to_string()),
                image_url: Some(" http://x/y.png ".to_string()),
                status: Some("ACTIVE".to_string()),
                ..ProductDraft::default()
            },
        )
        .unwrap();

        assert_eq!(product.name, "Widget");
        assert_eq!(product.description, "desc");
        assert_eq!(product.category, "tools");
        assert_eq!(product.image_url, "http://x/y.png");
    }

    #[test]
    fn test_create_rejects_missing_or_blank_required_fields() {
        for broken in [
            ProductDraft {
                name: None,
                ..draft("A")
            },
            ProductDraft {
                description: Some("   ".to_string()),
                ..draft("A")
            },
            ProductDraft {
                category: None,
                ..draft("A")
            },
            ProductDraft {
                status: None,
                ..draft("A")
            },
        ] {
            let mut products = Vec::new();
            assert_eq!(
                create(&mut products, broken),
                Err(CatalogError::MissingRequiredFields)
            );
            assert!(products.is_empty());
        }
    }

    #[test]
    fn test_create_rejects_invalid_status() {
        let mut products = Vec::new();
        let result = create(
            &mut products,
            ProductDraft {
                status: Some("DISCONTINUED".to_string()),
                ..draft("A")
            },
        );
        assert_eq!(result, Err(CatalogError::InvalidStatus));
    }

    #[test]
    fn test_create_rejects_duplicate_name_case_insensitively() {
        let mut products = seeded("widget");
        assert_eq!(
            create(&mut products, draft("Widget")),
            Err(CatalogError::DuplicateName)
        );
        assert_eq!(products.len(), 1);
    }

    #[test]
    fn test_create_assigns_max_id_plus_one() {
        let mut products = seeded("A");
        products[0].id = 5;
        let mut second = seeded("B");
        second[0].id = 2;
        products.append(&mut second);

        let product = create(&mut products, draft("C")).unwrap();
        assert_eq!(product.id, 6);
    }

    #[test]
    fn test_create_coerces_numeric_strings() {
        let mut products = Vec::new();
        let product = create(
            &mut products,
            ProductDraft {
                stock: Some(json!("12")),
                ratings: Some(json!(4)),
                ..draft("A")
            },
        )
        .unwrap();
        assert_eq!(product.stock, 12);
        assert_eq!(product.ratings, 4);
    }

    #[test]
    fn test_create_rejects_bad_stock() {
        for bad in [json!(-1), json!(1.5), json!("lots"), json!(true)] {
            let mut products = Vec::new();
            let result = create(
                &mut products,
                ProductDraft {
                    stock: Some(bad),
                    ..draft("A")
                },
            );
            assert_eq!(result, Err(CatalogError::InvalidStock));
        }
    }

    #[test]
    fn test_create_rejects_unparseable_ratings() {
        let mut products = Vec::new();
        let result = create(
            &mut products,
            ProductDraft {
                ratings: Some(json!("five stars")),
                ..draft("A")
            },
        );
        assert_eq!(result, Err(CatalogError::InvalidRatings));
    }

    // ==================
    // Replace
    // ==================

    #[test]
    fn test_replace_requires_both_fields() {
        let mut products = seeded("A");

        let only_stock = UpdateFields {
            stock: Some(json!(3)),
            status: None,
        };
        assert_eq!(
            replace(&mut products, 1, &only_stock),
            Err(CatalogError::ReplaceFieldsRequired)
        );

        let only_status = UpdateFields {
            stock: None,
            status: Some("ACTIVE".to_string()),
        };
        assert_eq!(
            replace(&mut products, 1, &only_status),
            Err(CatalogError::ReplaceFieldsRequired)
        );
    }

    #[test]
    fn test_replace_updates_only_stock_and_status() {
        let mut products = seeded("A");
        let before = products[0].clone();

        let fields = UpdateFields {
            stock: Some(json!(9)),
            status: Some("INACTIVE".to_string()),
        };
        let updated = replace(&mut products, 1, &fields).unwrap();

        assert_eq!(updated.stock, 9);
        assert_eq!(updated.status, ProductStatus::Inactive);
        assert_eq!(updated.id, before.id);
        assert_eq!(updated.name, before.name);
        assert_eq!(updated.description, before.description);
        assert_eq!(updated.category, before.category);
    }

    #[test]
    fn test_replace_unknown_id_is_not_found() {
        let mut products = seeded("A");
        let fields = UpdateFields {
            stock: Some(json!(1)),
            status: Some("ACTIVE".to_string()),
        };
        assert_eq!(
            replace(&mut products, 42, &fields),
            Err(CatalogError::NotFound(42))
        );
    }

    #[test]
    fn test_replace_rejects_invalid_fields() {
        let mut products = seeded("A");

        let bad_stock = UpdateFields {
            stock: Some(json!(-4)),
            status: Some("ACTIVE".to_string()),
        };
        assert_eq!(
            replace(&mut products, 1, &bad_stock),
            Err(CatalogError::InvalidStock)
        );

        let bad_status = UpdateFields {
            stock: Some(json!(4)),
            status: Some("active".to_string()),
        };
        assert_eq!(
            replace(&mut products, 1, &bad_status),
            Err(CatalogError::InvalidStatus)
        );
    }

    // ==================
    // Patch
    // ==================

    #[test]
    fn test_patch_rejects_both_fields() {
        let mut products = seeded("A");
        let fields = UpdateFields {
            stock: Some(json!(1)),
            status: Some("ACTIVE".to_string()),
        };
        assert_eq!(
            patch(&mut products, 1, &fields),
            Err(CatalogError::PatchBothFields)
        );
    }

    #[test]
    fn test_patch_rejects_no_fields() {
        let mut products = seeded("A");
        assert_eq!(
            patch(&mut products, 1, &UpdateFields::default()),
            Err(CatalogError::PatchNoFields)
        );
    }

    #[test]
    fn test_patch_stock_leaves_status_untouched() {
        let mut products = seeded("A");
        let fields = UpdateFields {
            stock: Some(json!(5)),
            status: None,
        };
        let updated = patch(&mut products, 1, &fields).unwrap();
        assert_eq!(updated.stock, 5);
        assert_eq!(updated.status, ProductStatus::Active);
    }

    #[test]
    fn test_patch_status_leaves_stock_untouched() {
        let mut products = seeded("A");
        products[0].stock = 7;

        let fields = UpdateFields {
            stock: None,
            status: Some("INACTIVE".to_string()),
        };
        let updated = patch(&mut products, 1, &fields).unwrap();
        assert_eq!(updated.status, ProductStatus::Inactive);
        assert_eq!(updated.stock, 7);
    }

    #[test]
    fn test_patch_validates_supplied_field() {
        let mut products = seeded("A");

        let bad_stock = UpdateFields {
            stock: Some(json!("minus one")),
            status: None,
        };
        assert_eq!(
            patch(&mut products, 1, &bad_stock),
            Err(CatalogError::InvalidStock)
        );

        let bad_status = UpdateFields {
            stock: None,
            status: Some("PAUSED".to_string()),
        };
        assert_eq!(
            patch(&mut products, 1, &bad_status),
            Err(CatalogError::InvalidStatus)
        );
    }
}
