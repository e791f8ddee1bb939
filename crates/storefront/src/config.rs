//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! All optional:
//! - `FLORA_STORAGE` - Storage backend: `file`, `memory` or `none` (default: file)
//! - `FLORA_DATA_DIR` - Directory for the file backend (default: .flora)
//! - `FLORA_FLORIST_REPLY_DELAY_MS` - Delay before the simulated florist
//!   answers, in milliseconds (default: 1000)
//! - `SENTRY_DSN` - Sentry error tracking DSN

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use thiserror::Error;

use crate::storage::Storage;
use crate::store::{FileStore, MemoryStore, StorageError, UnavailableStore};

const DEFAULT_DATA_DIR: &str = ".flora";
const DEFAULT_REPLY_DELAY_MS: &str = "1000";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Which key-value backend to persist into.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum StorageBackend {
    /// One JSON file per key in [`StorefrontConfig::data_dir`].
    #[default]
    File,
    /// Process memory; nothing survives exit.
    Memory,
    /// No persistent storage; every read yields the default.
    None,
}

impl FromStr for StorageBackend {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "file" => Ok(Self::File),
            "memory" => Ok(Self::Memory),
            "none" => Ok(Self::None),
            other => Err(format!("expected file, memory or none (got {other:?})")),
        }
    }
}

/// Storefront application configuration.
#[derive(Debug, Clone)]
pub struct StorefrontConfig {
    /// Backend selection
    pub storage: StorageBackend,
    /// Data directory for the file backend
    pub data_dir: PathBuf,
    /// Delay before the simulated florist reply
    pub florist_reply_delay: Duration,
    /// Sentry DSN for error tracking
    pub sentry_dsn: Option<String>,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage: StorageBackend::default(),
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            florist_reply_delay: Duration::from_millis(1000),
            sentry_dsn: None,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build configuration from an arbitrary variable lookup.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set to an invalid value.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let get_or_default = |key: &str, default: &str| {
            lookup(key).unwrap_or_else(|| default.to_string())
        };

        let storage = get_or_default("FLORA_STORAGE", "file")
            .parse::<StorageBackend>()
            .map_err(|e| ConfigError::InvalidEnvVar("FLORA_STORAGE".to_string(), e))?;
        let data_dir = PathBuf::from(get_or_default("FLORA_DATA_DIR", DEFAULT_DATA_DIR));
        let reply_delay_ms = get_or_default("FLORA_FLORIST_REPLY_DELAY_MS", DEFAULT_REPLY_DELAY_MS)
            .parse::<u64>()
            .map_err(|e| {
                ConfigError::InvalidEnvVar("FLORA_FLORIST_REPLY_DELAY_MS".to_string(), e.to_string())
            })?;
        let sentry_dsn = lookup("SENTRY_DSN").filter(|dsn| !dsn.is_empty());

        Ok(Self {
            storage,
            data_dir,
            florist_reply_delay: Duration::from_millis(reply_delay_ms),
            sentry_dsn,
        })
    }

    /// Open the configured backend and wrap it in the storage façade.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the file backend's directory cannot be
    /// created.
    pub fn open_storage(&self) -> Result<Storage, StorageError> {
        Ok(match self.storage {
            StorageBackend::File => Storage::new(FileStore::open(&self.data_dir)?),
            StorageBackend::Memory => Storage::new(MemoryStore::new()),
            StorageBackend::None => Storage::new(UnavailableStore),
        })
    }
}
