//! Configuration management for the Krishi Mitra client data layer
//!
//! Supports hierarchical configuration loading:
//! 1. Default values in code
//! 2. Configuration files (config/development.toml, config/production.toml)
//! 3. Environment variable overrides with KRISHI__ prefix

use std::path::PathBuf;

use config::{ConfigError, Environment, File};
use serde::Deserialize;

use crate::store::slices::PERSISTED_SLICES;

/// Main application configuration
#[derive(Debug, Deserialize, Clone)]
pub struct AppConfig {
    /// Current environment (development, production)
    pub environment: String,

    /// Mock authentication configuration
    pub auth: AuthConfig,

    /// Durable key-value storage configuration
    pub storage: StorageConfig,

    /// Application store configuration
    pub store: StoreConfig,

    /// Logging configuration
    pub logging: LoggingConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct AuthConfig {
    /// Simulated network latency in milliseconds
    pub latency_ms: u64,

    /// Prefix every issued mock token starts with
    pub token_prefix: String,
}

/// Which key-value backend to persist into
#[derive(Debug, Deserialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum StorageBackend {
    Memory,
    File,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StorageConfig {
    /// `memory` unless a config file or `KRISHI__STORAGE__BACKEND=file` says otherwise
    pub backend: StorageBackend,

    /// Directory for the file backend
    pub data_dir: PathBuf,

    /// Key under which the user's crop list is stored
    pub user_crops_key: String,
}

#[derive(Debug, Deserialize, Clone)]
pub struct StoreConfig {
    /// Prefix of the storage key each persisted slice is written under
    pub key_prefix: String,

    /// Slices mirrored to storage
    #[serde(default = "default_whitelist")]
    pub whitelist: Vec<String>,

    /// Reject actions carrying opaque payloads (persistence lifecycle actions exempt)
    pub serializable_check: bool,
}

#[derive(Debug, Deserialize, Clone)]
pub struct LoggingConfig {
    /// `tracing_subscriber::EnvFilter` directive, used when RUST_LOG is unset
    pub filter: String,

    /// Emit JSON lines instead of human-readable output
    pub json: bool,
}

fn default_whitelist() -> Vec<String> {
    PERSISTED_SLICES.iter().map(|s| s.to_string()).collect()
}

impl AppConfig {
    /// Load configuration from files and environment variables
    pub fn load() -> Result<Self, ConfigError> {
        let environment =
            std::env::var("KRISHI_ENVIRONMENT").unwrap_or_else(|_| "development".into());

        let config = config::Config::builder()
            // Start with default values
            .set_default("environment", environment.clone())?
            .set_default("auth.latency_ms", 1000)?
            .set_default("auth.token_prefix", "mock_token_")?
            .set_default("storage.backend", "memory")?
            .set_default("storage.data_dir", "./data")?
            .set_default("storage.user_crops_key", "user_crops")?
            .set_default("store.key_prefix", "persist:")?
            .set_default("store.serializable_check", true)?
            .set_default("logging.filter", "krishi_client=info")?
            .set_default("logging.json", false)?
            // Load environment-specific config file
            .add_source(File::with_name(&format!("config/{}", environment)).required(false))
            // Override with environment variables (KRISHI__ prefix)
            .add_source(
                Environment::with_prefix("KRISHI")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        config.try_deserialize()
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            environment: "development".to_string(),
            auth: AuthConfig::default(),
            storage: StorageConfig::default(),
            store: StoreConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            latency_ms: 1000,
            token_prefix: "mock_token_".to_string(),
        }
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            backend: StorageBackend::Memory,
            data_dir: PathBuf::from("./data"),
            user_crops_key: "user_crops".to_string(),
        }
    }
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            key_prefix: "persist:".to_string(),
            whitelist: default_whitelist(),
            serializable_check: true,
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            filter: "krishi_client=info".to_string(),
            json: false,
        }
    }
}
