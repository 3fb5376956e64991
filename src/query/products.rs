//! # Product Queries

use std::collections::HashMap;

use crate::catalog::Product;

use super::errors::{QueryError, QueryResult};

/// Parsed and validated product list query
///
/// `page` and `limit` are required; the four filters are optional and
/// independent. Products carry no price through the write paths, so the
/// price filters only match records whose data file supplies one.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductQuery {
    pub name: Option<String>,
    pub category: Option<String>,
    pub min_price: Option<f64>,
    pub max_price: Option<f64>,
    pub page: usize,
    pub limit: usize,
}

/// One page of filtered products
///
/// `count` is the filtered total before pagination, not the page length.
#[derive(Debug, Clone, PartialEq)]
pub struct ProductPage {
    pub count: usize,
    pub data: Vec<Product>,
}

impl ProductQuery {
    /// Parses raw query parameters, validating pagination first and the
    /// price bounds second.
    pub fn parse(params: &HashMap<String, String>) -> QueryResult<Self> {
        let page = match non_empty(params, "page") {
            Some(raw) => parse_page_param(raw, QueryError::InvalidPage)?,
            None => return Err(QueryError::MissingPagination),
        };
        let limit = match non_empty(params, "limit") {
            Some(raw) => parse_page_param(raw, QueryError::InvalidLimit)?,
            None => return Err(QueryError::MissingPagination),
        };

        let min_price = non_empty(params, "minPrice")
            .map(|raw| parse_price_param(raw, QueryError::InvalidMinPrice))
            .transpose()?;
        let max_price = non_empty(params, "maxPrice")
            .map(|raw| parse_price_param(raw, QueryError::InvalidMaxPrice))
            .transpose()?;

        Ok(Self {
            name: non_empty(params, "name").map(str::to_string),
            category: non_empty(params, "category").map(str::to_string),
            min_price,
            max_price,
            page,
            limit,
        })
    }

    /// Filters then paginates the collection.
    pub fn apply(&self, products: Vec<Product>) -> ProductPage {
        let filtered: Vec<Product> = products
            .into_iter()
            .filter(|p| self.matches(p))
            .collect();
        let count = filtered.len();

        let start = (self.page - 1).saturating_mul(self.limit).min(count);
        let end = start.saturating_add(self.limit).min(count);
        let data = filtered[start..end].to_vec();

        ProductPage { count, data }
    }

    fn matches(&self, product: &Product) -> bool {
        if let Some(name) = &self.name {
            if !product.name.eq_ignore_ascii_case(name) {
                return false;
            }
        }
        if let Some(category) = &self.category {
            if !product.category.eq_ignore_ascii_case(category) {
                return false;
            }
        }
        if let Some(min) = self.min_price {
            if !product.price.is_some_and(|price| price >= min) {
                return false;
            }
        }
        if let Some(max) = self.max_price {
            if !product.price.is_some_and(|price| price <= max) {
                return false;
            }
        }
        true
    }
}

fn non_empty<'a>(params: &'a HashMap<String, String>, key: &str) -> Option<&'a str> {
    params.get(key).map(String::as_str).filter(|v| !v.is_empty())
}

/// page/limit: integer >= 1
fn parse_page_param(raw: &str, err: QueryError) -> QueryResult<usize> {
    match raw.parse::<usize>() {
        Ok(n) if n >= 1 => Ok(n),
        _ => Err(err),
    }
}

/// minPrice/maxPrice: non-negative finite number
fn parse_price_param(raw: &str, err: QueryError) -> QueryResult<f64> {
    match raw.parse::<f64>() {
        Ok(n) if n.is_finite() && n >= 0.0 => Ok(n),
        _ => Err(err),
    }
}
