//! # Order Queries

use std::collections::HashMap;

use crate::catalog::Order;

/// Optional equality filters over the order collection
///
/// Both filters are case-insensitive exact matches; an order missing the
/// filtered field never matches. Parsing cannot fail and there is no
/// pagination on this path.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct OrderQuery {
    pub product: Option<String>,
    pub status: Option<String>,
}

impl OrderQuery {
    pub fn parse(params: &HashMap<String, String>) -> Self {
        Self {
            product: non_empty(params, "product"),
            status: non_empty(params, "status"),
        }
    }

    pub fn apply(&self, orders: Vec<Order>) -> Vec<Order> {
        orders.into_iter().filter(|o| self.matches(o)).collect()
    }

    fn matches(&self, order: &Order) -> bool {
        if let Some(product) = &self.product {
            if !order
                .product
                .as_deref()
                .is_some_and(|p| p.eq_ignore_ascii_case(product))
            {
                return false;
            }
        }
        if let Some(status) = &self.status {
            if !order
                .status
                .as_deref()
                .is_some_and(|s| s.eq_ignore_ascii_case(status))
            {
                return false;
            }
        }
        true
    }
}

fn non_empty(params: &HashMap<String, String>, key: &str) -> Option<String> {
    params.get(key).filter(|v| !v.is_empty()).cloned()
}
