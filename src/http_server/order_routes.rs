//! Order HTTP Routes
//!
//! Orders are read-only: a single list endpoint with two optional
//! equality filters.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Query, State},
    routing::get,
    Json, Router,
};

use crate::catalog::Order;
use crate::query::OrderQuery;
use crate::store::RecordStore;

use super::response::ListResponse;

/// Order state shared across handlers
pub struct OrderState {
    store: Arc<dyn RecordStore<Order>>,
}

impl OrderState {
    pub fn new(store: Arc<dyn RecordStore<Order>>) -> Self {
        Self { store }
    }
}

/// Create order routes
pub fn order_routes(state: Arc<OrderState>) -> Router {
    Router::new()
        .route("/", get(list_orders_handler))
        .with_state(state)
}

async fn list_orders_handler(
    State(state): State<Arc<OrderState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Json<ListResponse<Order>> {
    let query = OrderQuery::parse(&params);
    let orders = query.apply(state.store.load());
    Json(ListResponse::new(orders.len(), orders))
}
