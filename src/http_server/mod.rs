//! # HTTP Server
//!
//! Axum router and handlers mapping the product and order operations to
//! the JSON HTTP surface.

mod config;
mod errors;
mod order_routes;
mod product_routes;
mod response;
mod server;

pub use config::HttpServerConfig;
pub use errors::{ApiError, ErrorResponse};
pub use order_routes::{order_routes, OrderState};
pub use product_routes::{product_routes, ProductState};
pub use response::{ListResponse, MutationResponse, SingleResponse};
pub use server::{api_router, HttpServer};
