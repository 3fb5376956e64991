//! # Response Formatting
//!
//! Success envelopes shared by the product and order endpoints.

use serde::Serialize;

/// List response: `count` is the pre-pagination filtered total.
#[derive(Debug, Clone, Serialize)]
pub struct ListResponse<T: Serialize> {
    pub success: bool,
    pub count: usize,
    pub data: Vec<T>,
}

impl<T: Serialize> ListResponse<T> {
    pub fn new(count: usize, data: Vec<T>) -> Self {
        Self {
            success: true,
            count,
            data,
        }
    }
}

/// Single record response
#[derive(Debug, Clone, Serialize)]
pub struct SingleResponse<T: Serialize> {
    pub success: bool,
    pub data: T,
}

impl<T: Serialize> SingleResponse<T> {
    pub fn new(data: T) -> Self {
        Self {
            success: true,
            data,
        }
    }
}

/// Mutation response with a human-readable message
#[derive(Debug, Clone, Serialize)]
pub struct MutationResponse<T: Serialize> {
    pub success: bool,
    pub message: String,
    pub data: T,
}

impl<T: Serialize> MutationResponse<T> {
    pub fn new(message: impl Into<String>, data: T) -> Self {
        Self {
            success: true,
            message: message.into(),
            data,
        }
    }
}
