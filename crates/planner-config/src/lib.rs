//! # planner-config
//!
//! Layered configuration loading for SysPlanner using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`SYSPLANNER_*` prefix, `__` as separator)
//! 2. Project-level `.sysplanner/config.toml`
//! 3. User-level `~/.config/sysplanner/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `SYSPLANNER_STORAGE__DATA_DIR` -> `storage.data_dir`,
//! `SYSPLANNER_GENERAL__DEFAULT_CATEGORY` -> `general.default_category`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use planner_config::PlannerConfig;
//!
//! let config = PlannerConfig::load_with_dotenv().expect("config");
//! println!("tasks live in {}", config.storage.tasks_path().display());
//! ```

mod error;
mod general;
mod storage;

pub use error::ConfigError;
pub use general::GeneralConfig;
pub use storage::StorageConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct PlannerConfig {
    #[serde(default)]
    pub storage: StorageConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PlannerConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] if you need
    /// `.env` file loading.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a source fails to parse or a value is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Defaults, then the given TOML file, then environment variables.
    ///
    /// # Errors
    ///
    /// Same as [`Self::load`].
    pub fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let figment = Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(path))
            .merge(Self::env_provider());
        Self::from_figment(&figment)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path()
            && global_path.exists()
        {
            figment = figment.merge(Toml::file(global_path));
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".sysplanner/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Self::env_provider())
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Figment` on extraction failure and
    /// `ConfigError::InvalidValue` if a value is out of range.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.general.default_category.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "general.default_category".into(),
                reason: "must not be empty".into(),
            });
        }
        if self.general.default_limit == 0 {
            return Err(ConfigError::InvalidValue {
                field: "general.default_limit".into(),
                reason: "must be at least 1".into(),
            });
        }
        if self.storage.file_name.trim().is_empty() {
            return Err(ConfigError::InvalidValue {
                field: "storage.file_name".into(),
                reason: "must not be empty".into(),
            });
        }
        Ok(())
    }

    fn env_provider() -> Env {
        Env::prefixed("SYSPLANNER_").split("__")
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("sysplanner").join("config.toml"))
    }
}
