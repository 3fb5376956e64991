//! # API Errors
//!
//! Maps the error taxonomy onto HTTP status codes and the JSON error
//! envelope: validation → 400, unknown id → 404, store write failure →
//! 500 with an operation-specific message.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use thiserror::Error;

use crate::catalog::CatalogError;
use crate::query::QueryError;

/// API errors
#[derive(Debug, Clone, Error)]
pub enum ApiError {
    /// Non-numeric id path segment
    #[error("Invalid product ID")]
    InvalidProductId,

    /// Query parameter validation failure
    #[error("{0}")]
    Query(#[from] QueryError),

    /// Mutation validation or lookup failure
    #[error("{0}")]
    Catalog(#[from] CatalogError),

    /// Store write failure while creating a product
    #[error("Failed to save product")]
    SaveFailed,

    /// Store write failure while updating a product
    #[error("Failed to update product")]
    UpdateFailed,
}

impl ApiError {
    /// Get HTTP status code for this error
    pub fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidProductId => StatusCode::BAD_REQUEST,
            ApiError::Query(_) => StatusCode::BAD_REQUEST,
            ApiError::Catalog(CatalogError::NotFound(_)) => StatusCode::NOT_FOUND,
            ApiError::Catalog(_) => StatusCode::BAD_REQUEST,
            ApiError::SaveFailed | ApiError::UpdateFailed => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

/// Error response body
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub success: bool,
    pub error: String,
}

impl From<&ApiError> for ErrorResponse {
    fn from(err: &ApiError) -> Self {
        Self {
            success: false,
            error: err.to_string(),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let body = Json(ErrorResponse::from(&self));
        (status, body).into_response()
    }
}
