//! # rcl-config
//!
//! Layered configuration loading for recall using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`RECALL_*` prefix, `__` as separator)
//! 2. Project-level `.recall/config.toml`
//! 3. User-level `~/.config/recall/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `RECALL_DATA__DIR` -> `data.dir`,
//! `RECALL_SCORING__DEDUP_POLICY` -> `scoring.dedup_policy`, etc.
//! The `__` (double underscore) separates nested config sections.
//!
//! # Usage
//!
//! ```no_run
//! use rcl_config::RecallConfig;
//!
//! // Load from all sources (dotenvy + TOML + env):
//! let config = RecallConfig::load_with_dotenv().expect("config");
//!
//! println!("logs in {}", config.data.dir.display());
//! ```

mod data;
mod error;
mod general;
mod lock;
mod scoring;

pub use data::DataConfig;
pub use error::ConfigError;
pub use general::GeneralConfig;
pub use lock::LockConfig;
pub use scoring::ScoringConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Environment variable prefix for every recall setting.
pub const ENV_PREFIX: &str = "RECALL_";

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RecallConfig {
    #[serde(default)]
    pub data: DataConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub lock: LockConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl RecallConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy`; use [`Self::load_with_dotenv`] if you need `.env`
    /// file loading.
    pub fn load() -> Result<Self, ConfigError> {
        let config: Self = Self::figment().extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration with `.env` file support.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        Self::load_nearest_dotenv();
        Self::load()
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config
        let local_path = PathBuf::from(".recall/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    /// Reject values that would make scoring or locking meaningless.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data.dir.as_os_str().is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "data".into(),
            });
        }
        for (field, value) in [
            ("scoring.revision_cutover", u64::from(self.scoring.revision_cutover)),
            ("lock.wait_timeout_secs", self.lock.wait_timeout_secs),
            ("lock.retry_delay_ms", self.lock.retry_delay_ms),
        ] {
            if value == 0 {
                return Err(ConfigError::InvalidValue {
                    field: field.into(),
                    reason: "must be greater than zero".into(),
                });
            }
        }
        Ok(())
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("recall").join("config.toml"))
    }

    /// Load the nearest `.env`, searching the current directory and then its
    /// ancestors up to the first one holding a `.recall/` directory.
    /// Variables already present in the environment are kept.
    fn load_nearest_dotenv() {
        let Ok(mut dir) = std::env::current_dir() else {
            return;
        };
        loop {
            let env_path = dir.join(".env");
            if env_path.is_file() {
                let _ = dotenvy::from_path(&env_path);
                return;
            }
            if dir.join(".recall").is_dir() || !dir.pop() {
                return;
            }
        }
    }
}
