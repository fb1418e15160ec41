//! Durable mirror of the whitelisted slices
//!
//! Each slice lives under its own key, `<key_prefix><slice>`, as the JSON
//! form of the slice state. The persistor remembers what it last wrote for
//! every slice so that a dispatch only touches the keys whose slice changed.

use std::collections::HashMap;
use std::sync::Arc;

use tokio::sync::{Mutex, MutexGuard};

use super::slices::{is_slice_name, RootState};
use crate::config::StoreConfig;
use crate::error::{AppError, AppResult};
use crate::storage::KeyValueStorage;

/// Last JSON written per slice name
pub(crate) type WrittenSlices = HashMap<String, String>;

pub(crate) struct Persistor {
    storage: Arc<dyn KeyValueStorage>,
    key_prefix: String,
    whitelist: Vec<String>,
    written: Mutex<WrittenSlices>,
}

impl Persistor {
    pub fn new(storage: Arc<dyn KeyValueStorage>, config: &StoreConfig) -> AppResult<Self> {
        if config.key_prefix.is_empty() {
            return Err(AppError::Configuration(
                "store.key_prefix must not be empty".to_string(),
            ));
        }

        let mut whitelist: Vec<String> = Vec::with_capacity(config.whitelist.len());
        for name in &config.whitelist {
            if !is_slice_name(name) {
                return Err(AppError::UnknownSlice(name.clone()));
            }
            if !whitelist.contains(name) {
                whitelist.push(name.clone());
            }
        }

        Ok(Self {
            storage,
            key_prefix: config.key_prefix.clone(),
            whitelist,
            written: Mutex::new(HashMap::new()),
        })
    }

    pub fn whitelist(&self) -> &[String] {
        &self.whitelist
    }

    pub fn key_for(&self, slice: &str) -> String {
        format!("{}{}", self.key_prefix, slice)
    }

    /// Load every whitelisted slice found in storage into `state`.
    ///
    /// Unreadable or corrupt entries are logged and the slice keeps its
    /// default. Returns the names of the slices actually restored.
    pub async fn rehydrate(&self, state: &mut RootState) -> Vec<String> {
        let mut written = self.written.lock().await;
        let mut restored = Vec::new();

        for name in &self.whitelist {
            let key = self.key_for(name);
            let json = match self.storage.get(&key).await {
                Ok(Some(json)) => json,
                Ok(None) => continue,
                Err(e) => {
                    tracing::warn!(slice = %name, error = %e, "Failed to read persisted slice");
                    continue;
                }
            };

            match state.rehydrate_slice(name, &json) {
                Ok(()) => {
                    written.insert(name.clone(), json);
                    restored.push(name.clone());
                }
                Err(e) => {
                    tracing::warn!(slice = %name, error = %e, "Discarding corrupt persisted slice");
                }
            }
        }

        tracing::debug!(restored = ?restored, "Rehydrated persisted slices");
        restored
    }

    /// JSON form of every whitelisted slice
    pub fn serialize(&self, state: &RootState) -> Vec<(String, String)> {
        self.whitelist
            .iter()
            .filter_map(|name| match state.slice_json(name) {
                Ok(json) => Some((name.clone(), json)),
                Err(e) => {
                    tracing::error!(slice = %name, error = %e, "Failed to serialize slice");
                    None
                }
            })
            .collect()
    }

    /// Take the write lock. Holding it keeps storage writes in dispatch order.
    pub async fn lock(&self) -> MutexGuard<'_, WrittenSlices> {
        self.written.lock().await
    }

    /// Write `slices` to storage, skipping those identical to the last write
    /// unless `force` is set. Returns the failures; successful writes stand.
    pub async fn write(
        &self,
        written: &mut WrittenSlices,
        slices: Vec<(String, String)>,
        force: bool,
    ) -> Vec<AppError> {
        let mut failures = Vec::new();

        for (name, json) in slices {
            if !force && written.get(&name) == Some(&json) {
                continue;
            }

            let key = self.key_for(&name);
            match self.storage.set(&key, &json).await {
                Ok(()) => {
                    tracing::trace!(key = %key, "Persisted slice");
                    written.insert(name, json);
                }
                Err(e) => failures.push(e),
            }
        }

        failures
    }

    /// Remove every whitelisted key and forget what was written
    pub async fn purge(&self) -> AppResult<()> {
        let mut written = self.written.lock().await;
        for name in &self.whitelist {
            self.storage.remove(&self.key_for(name)).await?;
        }
        written.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStorage;

    fn config(whitelist: &[&str]) -> StoreConfig {
        StoreConfig {
            whitelist: whitelist.iter().map(|s| s.to_string()).collect(),
            ..StoreConfig::default()
        }
    }

    #[test]
    fn test_unknown_whitelist_entry_rejected() {
        let result = Persistor::new(Arc::new(MemoryStorage::new()), &config(&["auth", "crops"]));
        assert!(matches!(result, Err(AppError::UnknownSlice(name)) if name == "crops"));
    }

    #[test]
    fn test_duplicate_whitelist_entries_collapse() {
        let persistor =
            Persistor::new(Arc::new(MemoryStorage::new()), &config(&["auth", "auth", "sync"])).unwrap();
        assert_eq!(persistor.whitelist(), &["auth".to_string(), "sync".to_string()]);
        assert_eq!(persistor.key_for("auth"), "persist:auth");
    }

    #[tokio::test]
    async fn test_write_skips_unchanged_slices() {
        let storage = Arc::new(MemoryStorage::new());
        let persistor = Persistor::new(storage.clone(), &config(&["auth"])).unwrap();
        let state = RootState::default();

        let mut written = persistor.lock().await;
        let failures = persistor.write(&mut written, persistor.serialize(&state), false).await;
        assert!(failures.is_empty());
        assert_eq!(storage.keys().await, vec!["persist:auth".to_string()]);

        storage.remove("persist:auth").await.unwrap();
        persistor.write(&mut written, persistor.serialize(&state), false).await;
        assert!(storage.is_empty().await);

        persistor.write(&mut written, persistor.serialize(&state), true).await;
        assert_eq!(storage.len().await, 1);
    }

    #[tokio::test]
    async fn test_corrupt_slice_keeps_default() {
        let storage = Arc::new(MemoryStorage::new());
        storage.set("persist:auth", "not json").await.unwrap();
        storage.set("persist:sync", r#"{"is_online":false,"pending_changes":[],"is_syncing":false,"last_synced_at":null,"error":null}"#).await.unwrap();
        let persistor = Persistor::new(storage, &config(&["auth", "sync"])).unwrap();

        let mut state = RootState::default();
        let restored = persistor.rehydrate(&mut state).await;
        assert_eq!(restored, vec!["sync".to_string()]);
        assert_eq!(state.auth, Default::default());
        assert!(!state.sync.is_online);
    }
}
