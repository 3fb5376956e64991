//! # HTTP Server
//!
//! Main HTTP server combining the product and order routers with the
//! root service descriptor, the 404 fallback, and the CORS / trace /
//! panic-recovery layers.

use std::any::Any;
use std::io;
use std::net::SocketAddr;
use std::sync::Arc;

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use serde_json::json;
use tokio::net::TcpListener;
use tower_http::catch_panic::CatchPanicLayer;
use tower_http::cors::{Any as CorsAny, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::catalog::{Order, Product};
use crate::store::JsonFileStore;

use super::config::HttpServerConfig;
use super::order_routes::{order_routes, OrderState};
use super::product_routes::{product_routes, ProductState};

/// HTTP server for the stockroom API
pub struct HttpServer {
    config: HttpServerConfig,
    router: Router,
}

impl HttpServer {
    /// Create a new HTTP server with default configuration
    pub fn new() -> Self {
        Self::with_config(HttpServerConfig::default())
    }

    /// Create a new HTTP server with custom configuration
    pub fn with_config(config: HttpServerConfig) -> Self {
        let router = Self::build_router(&config);
        Self { config, router }
    }

    /// Build the combined router with all endpoints
    fn build_router(config: &HttpServerConfig) -> Router {
        let products = Arc::new(ProductState::new(Arc::new(
            JsonFileStore::<Product>::new(config.products_path()),
        )));
        let orders = Arc::new(OrderState::new(Arc::new(JsonFileStore::<Order>::new(
            config.orders_path(),
        ))));

        // Configure CORS from config
        let cors = if config.cors_origins.is_empty() {
            CorsLayer::new()
                .allow_origin(CorsAny)
                .allow_methods(CorsAny)
                .allow_headers(CorsAny)
        } else {
            use tower_http::cors::AllowOrigin;
            let origins: Vec<_> = config
                .cors_origins
                .iter()
                .filter_map(|s| s.parse().ok())
                .collect();

            CorsLayer::new()
                .allow_origin(AllowOrigin::list(origins))
                .allow_methods(CorsAny)
                .allow_headers(CorsAny)
        };

        api_router(products, orders)
            .layer(cors)
            .layer(TraceLayer::new_for_http())
            .layer(CatchPanicLayer::custom(handle_panic))
    }

    /// Get the socket address
    pub fn socket_addr(&self) -> String {
        self.config.socket_addr()
    }

    /// Get the router (for testing)
    pub fn router(self) -> Router {
        self.router
    }

    /// Start the HTTP server (async)
    pub async fn start(self) -> Result<(), io::Error> {
        // Collection files are created up front so a fresh deployment
        // starts from explicit empty collections.
        JsonFileStore::<Product>::new(self.config.products_path()).ensure_exists()?;
        JsonFileStore::<Order>::new(self.config.orders_path()).ensure_exists()?;

        let addr: SocketAddr = self
            .config
            .socket_addr()
            .parse()
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidInput, e))?;

        let listener = TcpListener::bind(addr).await?;
        tracing::info!(addr = %addr, "server listening");
        axum::serve(listener, self.router).await
    }
}

impl Default for HttpServer {
    fn default() -> Self {
        Self::new()
    }
}

/// Assemble the API router from pre-built states.
///
/// Split out from `HttpServer` so tests can inject in-memory stores.
pub fn api_router(products: Arc<ProductState>, orders: Arc<OrderState>) -> Router {
    Router::new()
        .route("/", get(root_handler))
        .nest("/api/products", product_routes(products))
        .nest("/api/orders", order_routes(orders))
        .fallback(fallback_handler)
}

/// Service descriptor listing the available endpoints
async fn root_handler() -> Json<serde_json::Value> {
    Json(json!({
        "message": "Product API is running",
        "endpoints": {
            "getProducts": "GET /api/products",
            "getProduct": "GET /api/products/:id",
            "createProduct": "POST /api/products",
            "updateFullProduct": "PUT /api/products/:id",
            "updatePartialProduct": "PATCH /api/products/:id",
            "getOrders": "GET /api/orders"
        }
    }))
}

async fn fallback_handler() -> (StatusCode, Json<serde_json::Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({ "error": "Endpoint not found" })),
    )
}

fn handle_panic(err: Box<dyn Any + Send + 'static>) -> Response {
    let detail = if let Some(s) = err.downcast_ref::<String>() {
        s.as_str()
    } else if let Some(s) = err.downcast_ref::<&str>() {
        s
    } else {
        "unknown panic"
    };
    tracing::error!(panic = detail, "handler panicked");

    (
        StatusCode::INTERNAL_SERVER_ERROR,
        Json(json!({ "error": "Something went wrong!" })),
    )
        .into_response()
}
