//! # Record Store
//!
//! Persistence boundary for one resource's full collection.
//!
//! Every resource (products, orders) lives in a single flat JSON array
//! file. `load` returns the whole collection and never fails the caller:
//! an absent, unreadable, or unparseable file yields an empty collection
//! and the failure is logged. `save` rewrites the whole file.
//!
//! The trait exists so handlers can be tested against an in-memory fake
//! instead of the filesystem.

mod errors;
mod json_file;
mod memory;

pub use errors::{StoreError, StoreResult};
pub use json_file::JsonFileStore;
pub use memory::MemoryStore;

/// Load/save access to one resource's persisted collection.
pub trait RecordStore<T>: Send + Sync {
    /// Returns the persisted collection, or an empty one when the
    /// underlying resource is absent or unreadable.
    fn load(&self) -> Vec<T>;

    /// Overwrites the persisted collection with `records`.
    fn save(&self, records: &[T]) -> StoreResult<()>;
}
