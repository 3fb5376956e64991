//! # Query/Filter Engine
//!
//! Stateless predicate-and-slice pipeline over an in-memory collection.
//! Filters are applied in a fixed order (name, category, minPrice,
//! maxPrice), then the result is paginated. The reported `count` is the
//! filtered total before slicing.

mod errors;
mod orders;
mod products;

pub use errors::{QueryError, QueryResult};
pub use orders::OrderQuery;
pub use products::{ProductPage, ProductQuery};
