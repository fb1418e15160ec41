//! Krishi Mitra - client data layer
//!
//! Crop and pest reference queries, a mock authentication service and the
//! persisted application store used by the farmer app's UI.

pub mod config;
pub mod error;
pub mod logging;
pub mod services;
pub mod storage;
pub mod store;

use std::sync::Arc;

pub use config::AppConfig;
pub use error::{AppError, AppResult, ErrorDetail};
pub use services::{AuthService, CropService, MockUserDatabase};
pub use storage::{FileStorage, KeyValueStorage, MemoryStorage};
pub use store::{Action, RootState, Store};

/// Everything the UI layer talks to, wired over one storage backend
#[derive(Clone)]
pub struct App {
    pub config: Arc<AppConfig>,
    pub storage: Arc<dyn KeyValueStorage>,
    pub crops: CropService,
    pub auth: AuthService,
    pub store: Arc<Store>,
}

impl App {
    /// Wire the services and rehydrate the store
    pub async fn bootstrap(config: AppConfig) -> anyhow::Result<Self> {
        let storage = storage::from_config(&config.storage)?;
        Self::with_storage(config, storage).await
    }

    /// Wire the services over an already built backend
    pub async fn with_storage(
        config: AppConfig,
        storage: Arc<dyn KeyValueStorage>,
    ) -> anyhow::Result<Self> {
        let crops = CropService::new(storage.clone(), &config.storage);
        let auth = AuthService::new(Arc::new(MockUserDatabase::seeded()), &config.auth);
        let store = Store::configure(storage.clone(), &config.store).await?;

        tracing::info!(environment = %config.environment, "Client data layer ready");

        Ok(Self {
            config: Arc::new(config),
            storage,
            crops,
            auth,
            store: Arc::new(store),
        })
    }

    /// Load `.env` and configuration, install logging, then bootstrap
    pub async fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        let config = AppConfig::load()?;
        logging::init_tracing(&config.logging)?;
        Self::bootstrap(config).await
    }
}
