//! Durable key-value storage
//!
//! The UI host's async key-value store, abstracted so the services and the
//! application store can be exercised against an in-memory backend.

mod file;
mod memory;

use std::sync::Arc;

use async_trait::async_trait;

use crate::config::{StorageBackend, StorageConfig};
use crate::error::AppResult;

pub use file::FileStorage;
pub use memory::MemoryStorage;

/// String-keyed, string-valued async storage
#[async_trait]
pub trait KeyValueStorage: Send + Sync {
    /// Value stored under `key`, or `None` if the key was never written
    async fn get(&self, key: &str) -> AppResult<Option<String>>;

    async fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// Remove `key`. Removing a missing key is not an error.
    async fn remove(&self, key: &str) -> AppResult<()>;
}

/// Build the backend selected in configuration
pub fn from_config(config: &StorageConfig) -> AppResult<Arc<dyn KeyValueStorage>> {
    match config.backend {
        StorageBackend::Memory => Ok(Arc::new(MemoryStorage::new())),
        StorageBackend::File => Ok(Arc::new(FileStorage::open(config.data_dir.clone())?)),
    }
}
