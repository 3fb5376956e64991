//! Product HTTP Routes
//!
//! Read paths load the collection and run the query engine; write paths
//! run load → mutate → save under a per-resource lock so overlapping
//! read-modify-write cycles cannot lose updates.

use std::collections::HashMap;
use std::sync::Arc;

use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    routing::get,
    Json, Router,
};
use tokio::sync::Mutex;

use crate::catalog::mutation::{self, ProductDraft, UpdateFields};
use crate::catalog::{CatalogError, Product};
use crate::query::ProductQuery;
use crate::store::RecordStore;

use super::errors::ApiError;
use super::response::{ListResponse, MutationResponse, SingleResponse};

// ==================
// Shared State
// ==================

/// Product state shared across handlers
pub struct ProductState {
    store: Arc<dyn RecordStore<Product>>,
    /// Serializes each load→modify→save cycle.
    write_lock: Mutex<()>,
}

impl ProductState {
    pub fn new(store: Arc<dyn RecordStore<Product>>) -> Self {
        Self {
            store,
            write_lock: Mutex::new(()),
        }
    }
}

// ==================
// Product Routes
// ==================

/// Create product routes
pub fn product_routes(state: Arc<ProductState>) -> Router {
    Router::new()
        .route("/", get(list_products_handler).post(create_product_handler))
        .route(
            "/:id",
            get(get_product_handler)
                .put(replace_product_handler)
                .patch(patch_product_handler),
        )
        .with_state(state)
}

fn parse_product_id(raw: &str) -> Result<u64, ApiError> {
    raw.parse().map_err(|_| ApiError::InvalidProductId)
}

// ==================
// Read Handlers
// ==================

async fn list_products_handler(
    State(state): State<Arc<ProductState>>,
    Query(params): Query<HashMap<String, String>>,
) -> Result<Json<ListResponse<Product>>, ApiError> {
    let query = ProductQuery::parse(&params)?;
    let page = query.apply(state.store.load());
    Ok(Json(ListResponse::new(page.count, page.data)))
}

async fn get_product_handler(
    State(state): State<Arc<ProductState>>,
    Path(id): Path<String>,
) -> Result<Json<SingleResponse<Product>>, ApiError> {
    let id = parse_product_id(&id)?;
    let product = state
        .store
        .load()
        .into_iter()
        .find(|p| p.id == id)
        .ok_or(CatalogError::NotFound(id))?;
    Ok(Json(SingleResponse::new(product)))
}

// ==================
// Write Handlers
// ==================

async fn create_product_handler(
    State(state): State<Arc<ProductState>>,
    Json(draft): Json<ProductDraft>,
) -> Result<(StatusCode, Json<MutationResponse<Product>>), ApiError> {
    let _guard = state.write_lock.lock().await;

    let mut products = state.store.load();
    let product = mutation::create(&mut products, draft)?;
    state.store.save(&products).map_err(|e| {
        tracing::error!(error = %e, "failed to persist created product");
        ApiError::SaveFailed
    })?;

    Ok((
        StatusCode::CREATED,
        Json(MutationResponse::new("Product created successfully", product)),
    ))
}

async fn replace_product_handler(
    State(state): State<Arc<ProductState>>,
    Path(id): Path<String>,
    Json(fields): Json<UpdateFields>,
) -> Result<Json<MutationResponse<Product>>, ApiError> {
    let id = parse_product_id(&id)?;
    let _guard = state.write_lock.lock().await;

    let mut products = state.store.load();
    let product = mutation::replace(&mut products, id, &fields)?;
    state.store.save(&products).map_err(|e| {
        tracing::error!(error = %e, product_id = id, "failed to persist replaced product");
        ApiError::UpdateFailed
    })?;

    Ok(Json(MutationResponse::new(
        "Product updated successfully",
        product,
    )))
}

async fn patch_product_handler(
    State(state): State<Arc<ProductState>>,
    Path(id): Path<String>,
    Json(fields): Json<UpdateFields>,
) -> Result<Json<MutationResponse<Product>>, ApiError> {
    let id = parse_product_id(&id)?;
    let _guard = state.write_lock.lock().await;

    let mut products = state.store.load();
    let product = mutation::patch(&mut products, id, &fields)?;
    state.store.save(&products).map_err(|e| {
        tracing::error!(error = %e, product_id = id, "failed to persist patched product");
        ApiError::UpdateFailed
    })?;

    Ok(Json(MutationResponse::new(
        "Product patched successfully",
        product,
    )))
}
