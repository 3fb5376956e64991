//! # Query Errors
//!
//! All query errors are client-correctable 400s.

use thiserror::Error;

/// Result type for query parsing
pub type QueryResult<T> = Result<T, QueryError>;

/// Query parameter validation errors
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QueryError {
    #[error("page and limit query params are required fields")]
    MissingPagination,

    #[error("Invalid page")]
    InvalidPage,

    #[error("Invalid limit")]
    InvalidLimit,

    #[error("Invalid minPrice")]
    InvalidMinPrice,

    #[error("Invalid maxPrice")]
    InvalidMaxPrice,
}
