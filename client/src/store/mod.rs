//! Application store
//!
//! One [`RootState`] composed of independent slices. Every dispatched action
//! is offered to every slice; the whitelisted slices are then mirrored to
//! durable storage so they survive a restart.

pub mod action;
mod persist;
pub mod slices;

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use serde_json::json;
use tokio::sync::{watch, RwLock};

use crate::config::StoreConfig;
use crate::error::{AppError, AppResult};
use crate::storage::KeyValueStorage;
use persist::Persistor;

pub use action::{Action, Payload};
pub use slices::{RootState, Slice};

/// The application store
pub struct Store {
    state: RwLock<RootState>,
    persistor: Persistor,
    serializable_check: bool,
    version: watch::Sender<u64>,
    rehydrated: AtomicBool,
}

impl Store {
    /// Build the store, restore the whitelisted slices from `storage` and run
    /// the persistence lifecycle. The returned store is fully rehydrated.
    pub async fn configure(
        storage: Arc<dyn KeyValueStorage>,
        config: &StoreConfig,
    ) -> AppResult<Self> {
        let persistor = Persistor::new(storage, config)?;

        let mut state = RootState::default();
        let restored = persistor.rehydrate(&mut state).await;

        let (version, _) = watch::channel(0);
        let store = Self {
            state: RwLock::new(state),
            persistor,
            serializable_check: config.serializable_check,
            version,
            rehydrated: AtomicBool::new(false),
        };

        store
            .dispatch(Action::json(action::REHYDRATE, json!(restored)))
            .await?;
        let whitelist: Arc<Vec<String>> = Arc::new(store.persistor.whitelist().to_vec());
        store.dispatch(Action::opaque(action::PERSIST, whitelist)).await?;
        store.rehydrated.store(true, Ordering::Release);

        tracing::info!(
            restored = restored.len(),
            whitelist = ?store.persistor.whitelist(),
            "Application store ready"
        );

        Ok(store)
    }

    /// Reduce `action` into the state, then mirror the whitelisted slices
    /// that changed.
    ///
    /// A failing reducer leaves the whole state untouched. Storage failures
    /// are logged and do not fail the dispatch.
    pub async fn dispatch(&self, action: Action) -> AppResult<()> {
        if self.serializable_check && !action.is_serializable() && !action.is_persist_lifecycle() {
            return Err(AppError::NonSerializableAction(action.kind));
        }

        let mut state = self.state.write().await;
        let mut next = state.clone();
        next.reduce(&action)?;

        let changed = next != *state;
        *state = next;

        let slices = self.persistor.serialize(&state);
        let mut written = self.persistor.lock().await;
        drop(state);

        if changed {
            self.version.send_modify(|version| *version += 1);
        }
        tracing::trace!(action = %action.kind, changed, "Dispatched action");

        for e in self.persistor.write(&mut written, slices, false).await {
            tracing::error!(action = %action.kind, error = %e, "Failed to persist state");
        }

        Ok(())
    }

    /// Snapshot of the whole state
    pub async fn state(&self) -> RootState {
        self.state.read().await.clone()
    }

    /// Read part of the state without cloning all of it
    pub async fn select<T>(&self, selector: impl FnOnce(&RootState) -> T) -> T {
        let state = self.state.read().await;
        selector(&*state)
    }

    /// Receiver notified after every dispatch that changed the state. The
    /// value is a counter of such changes.
    pub fn subscribe(&self) -> watch::Receiver<u64> {
        self.version.subscribe()
    }

    /// Rewrite every whitelisted slice regardless of what was last written
    pub async fn flush(&self) -> AppResult<()> {
        let state = self.state.read().await;
        let slices = self.persistor.serialize(&state);
        let mut written = self.persistor.lock().await;
        drop(state);

        match self.persistor.write(&mut written, slices, true).await.into_iter().next() {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Delete the persisted slices. In-memory state is kept; the next
    /// dispatch writes it out again.
    pub async fn purge(&self) -> AppResult<()> {
        self.persistor.purge().await?;
        tracing::info!("Purged persisted state");
        Ok(())
    }

    pub fn is_rehydrated(&self) -> bool {
        self.rehydrated.load(Ordering::Acquire)
    }

    /// Slices mirrored to storage
    pub fn whitelist(&self) -> &[String] {
        self.persistor.whitelist()
    }
}
