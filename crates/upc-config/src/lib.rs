//! # upc-config
//!
//! Layered configuration loading using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`UPC_*` prefix, `__` as separator)
//! 2. Project-level `.upc/config.toml`
//! 3. User-level `~/.config/upc/config.toml`
//! 4. Built-in defaults
//!
//! # Environment Variable Mapping
//!
//! Figment maps `UPC_NOTEBOOKS__ROOT` -> `notebooks.root`,
//! `UPC_FUSION__EPSILON` -> `fusion.epsilon`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use upc_config::UpcConfig;
//!
//! let config = UpcConfig::load_with_dotenv().expect("config");
//! println!("notebooks live in {}", config.notebooks.root);
//! ```

mod error;
mod fusion;
mod notebooks;

pub use error::ConfigError;
pub use fusion::{FusionConfig, MAX_OCTREE_LEVEL};
pub use notebooks::NotebooksConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct UpcConfig {
    #[serde(default)]
    pub notebooks: NotebooksConfig,
    #[serde(default)]
    pub fusion: FusionConfig,
}

impl UpcConfig {
    /// Load configuration from all sources (TOML files + environment variables).
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` loading.
    ///
    /// # Errors
    /// Returns `ConfigError` when a source fails to parse or a value is out of range.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support.
    ///
    /// # Errors
    /// Same as [`Self::load`].
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    /// Returns `ConfigError` when extraction or validation fails.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.fusion.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// Public so tests can inspect the figment directly or add providers on top.
    #[must_use]
    pub fn figment() -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Self::default()));

        // Layer 1: User-global config
        if let Some(global_path) = Self::global_config_path() {
            if global_path.exists() {
                figment = figment.merge(Toml::file(global_path));
            }
        }

        // Layer 2: Project-local config

        let local_path = PathBuf::from(".upc/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("UPC_").split("__"))
    }

    /// Index document path: `notebooks.root` joined with `notebooks.index_file`.
    #[must_use]
    pub fn index_path(&self) -> PathBuf {
        PathBuf::from(&self.notebooks.root).join(&self.notebooks.index_file)
    }

    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("upc").join("config.toml"))
    }
}
