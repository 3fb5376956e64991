//! # Catalog Errors
//!
//! Validation and lookup errors for the mutation engine. Every variant
//! except `NotFound` is a client-correctable 400; the HTTP layer maps the
//! status codes.

use thiserror::Error;

/// Result type for catalog operations
pub type CatalogResult<T> = Result<T, CatalogError>;

/// Catalog validation and lookup errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CatalogError {
    // Create
    #[error("Name, description, category and status are required fields")]
    MissingRequiredFields,

    #[error("Product already exists")]
    DuplicateName,

    // Shared field validation
    #[error("Invalid status")]
    InvalidStatus,

    #[error("Invalid product quantity")]
    InvalidStock,

    #[error("Invalid ratings")]
    InvalidRatings,

    // Full replace
    #[error("Stock and status are required fields")]
    ReplaceFieldsRequired,

    // Partial patch
    #[error("Update all fields not supported")]
    PatchBothFields,

    #[error("Stock or status field required")]
    PatchNoFields,

    // Lookup
    #[error("Product with ID {0} not found")]
    NotFound(u64),
}
