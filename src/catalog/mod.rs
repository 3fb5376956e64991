//! # Catalog
//!
//! Data model and mutation engine for the product and order resources.
//!
//! Products are the only mutable resource: they are created once, then
//! updated through full replace (stock + status) or partial patch (stock
//! or status). Orders are read-only opaque records.

mod errors;
pub mod mutation;
mod order;
mod product;

pub use errors::{CatalogError, CatalogResult};
pub use order::Order;
pub use product::{next_id, Product, ProductStatus};
