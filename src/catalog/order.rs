//! # Order Model
//!
//! Orders are read-only: the API exposes no create or mutation path for
//! them. Only `product` and `status` are interpreted (for filtering);
//! everything else in a record is carried through untouched.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// An opaque order record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Order {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub product: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<String>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}
