//! Application configuration loaded from environment variables.

use std::env;
use std::path::PathBuf;

use quill_infra::{StorageBackend, StoreConfig};

use crate::telemetry::TelemetryConfig;

/// Configuration errors - reported before the server starts.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Invalid value for {key}: {value}")]
    Invalid { key: &'static str, value: String },
}

/// Application configuration.
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub store: StoreConfig,
    pub telemetry: TelemetryConfig,
}

impl AppConfig {
    /// Load configuration from environment variables.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build configuration from any key lookup.
    ///
    /// - `HOST` (default `127.0.0.1`), `PORT` (default `5000`)
    /// - `DATA_DIR` (default `data`), `STORAGE_BACKEND` (`json` or `memory`)
    /// - `LOG_FORMAT`, `SERVICE_NAME`, see [`TelemetryConfig`]
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let port = match lookup("PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "PORT",
                value: raw,
            })?,
            None => 5000,
        };

        let backend = match lookup("STORAGE_BACKEND") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                key: "STORAGE_BACKEND",
                value: raw,
            })?,
            None => StorageBackend::default(),
        };

        Ok(Self {
            host: lookup("HOST").unwrap_or_else(|| "127.0.0.1".to_string()),
            port,
            store: StoreConfig {
                data_dir: PathBuf::from(lookup("DATA_DIR").unwrap_or_else(|| "data".to_string())),
                backend,
            },
            telemetry: TelemetryConfig::from_lookup(&lookup),
        })
    }
}
