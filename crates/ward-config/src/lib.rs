//! # ward-config
//!
//! Layered configuration loading for Ward using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`WARD_*` prefix, `__` as separator)
//! 2. Project-level `ward.toml` in the current directory
//! 3. User-level `~/.config/ward/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `WARD_STORAGE__DATA_DIR` -> `storage.data_dir`,
//! `WARD_ROLLBACK__WINDOW` -> `rollback.window`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use ward_config::WardConfig;
//!
//! let config = WardConfig::load_with_dotenv().expect("config");
//! println!("audit log: {}", config.storage.audit_log_path().display());
//! ```

mod error;
mod rollback;
mod storage;

pub use error::ConfigError;
pub use rollback::RollbackConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Project-local config file name.
pub const LOCAL_CONFIG_FILE: &str = "ward.toml";

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize, Serialize)]
pub struct WardConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub rollback: RollbackConfig,
}

impl WardConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration after reading `.env` from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        let local_path = PathBuf::from(LOCAL_CONFIG_FILE);
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        figment.merge(Env::prefixed("WARD_").split("__"))
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` for the first offending field.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.rollback.validate()
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ward").join("config.toml"))
    }
}
