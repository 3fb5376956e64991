//! # In-Memory Store
//!
//! `RecordStore` backed by a `Mutex<Vec<T>>`, used by tests in place of
//! the filesystem. Writes can be toggled to fail so callers' store-failure
//! paths can be exercised.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Mutex;

use super::errors::{StoreError, StoreResult};
use super::RecordStore;

/// In-memory `RecordStore` fake
pub struct MemoryStore<T> {
    records: Mutex<Vec<T>>,
    fail_writes: AtomicBool,
}

impl<T: Clone> MemoryStore<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    pub fn with_records(records: Vec<T>) -> Self {
        Self {
            records: Mutex::new(records),
            fail_writes: AtomicBool::new(false),
        }
    }

    /// When set, every `save` fails with a write error.
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }

    /// Snapshot of the stored records
    pub fn records(&self) -> Vec<T> {
        self.records.lock().expect("store lock poisoned").clone()
    }
}

impl<T: Clone> Default for MemoryStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Clone + Send + Sync> RecordStore<T> for MemoryStore<T> {
    fn load(&self) -> Vec<T> {
        self.records()
    }

    fn save(&self, records: &[T]) -> StoreResult<()> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StoreError::Write("simulated write failure".to_string()));
        }
        *self.records.lock().expect("store lock poisoned") = records.to_vec();
        Ok(())
    }
}
