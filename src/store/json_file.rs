//! # JSON File Store
//!
//! Flat-file `RecordStore` implementation: one JSON array per resource.

use std::fs;
use std::io;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;
use serde::Serialize;

use super::errors::{StoreError, StoreResult};
use super::RecordStore;

/// Stores a collection as a single pretty-printed JSON array on disk.
///
/// Writes go through a temp file followed by a rename, so readers never
/// observe a half-written collection.
pub struct JsonFileStore<T> {
    path: PathBuf,
    _records: PhantomData<fn() -> T>,
}

impl<T> JsonFileStore<T> {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: path.into(),
            _records: PhantomData,
        }
    }

    /// Path of the backing file
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Creates the backing file as an empty collection if it is missing,
    /// along with any missing parent directories.
    pub fn ensure_exists(&self) -> io::Result<()> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        if !self.path.exists() {
            fs::write(&self.path, "[]")?;
            tracing::info!(path = %self.path.display(), "created empty store file");
        }
        Ok(())
    }
}

impl<T> RecordStore<T> for JsonFileStore<T>
where
    T: Serialize + DeserializeOwned,
{
    fn load(&self) -> Vec<T> {
        let data = match fs::read_to_string(&self.path) {
            Ok(data) => data,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Vec::new(),
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "failed to read store file");
                return Vec::new();
            }
        };

        match serde_json::from_str(&data) {
            Ok(records) => records,
            Err(e) => {
                tracing::error!(path = %self.path.display(), error = %e, "failed to parse store file");
                Vec::new()
            }
        }
    }

    fn save(&self, records: &[T]) -> StoreResult<()> {
        let json = serde_json::to_string_pretty(records)
            .map_err(|e| StoreError::Serialize(e.to_string()))?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(|e| StoreError::Write(e.to_string()))?;
        fs::rename(&tmp_path, &self.path).map_err(|e| StoreError::Write(e.to_string()))?;
        Ok(())
    }
}
