//! stockroom - A flat-file product and order CRUD HTTP API
//!
//! Each request loads the whole collection from disk, optionally mutates an
//! in-memory copy, and rewrites the file. The on-disk JSON files are the
//! sole source of truth; no state survives between requests.

pub mod catalog;
pub mod cli;
pub mod http_server;
pub mod query;
pub mod store;
