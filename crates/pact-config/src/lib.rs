//! # pact-config
//!
//! Layered configuration loading for pact using figment.
//!
//! Configuration sources (in priority order, highest wins):
//! 1. Environment variables (`PACT_*` prefix, `__` as separator)
//! 2. Project-level `.pact/config.toml`
//! 3. User-level `~/.config/pact/config.toml`
//! 4. Built-in defaults
//!
//! The built-in defaults carry the scoring criteria, industry benchmarks and
//! term vocabularies. They are plain values: tests and embedders construct a
//! [`PactConfig`] (or a single section) directly and hand it to the store or
//! analyzers instead of relying on hidden globals.
//!
//! # Environment Variable Mapping
//!
//! Figment maps `PACT_STORE__DATA_DIR` -> `store.data_dir`,
//! `PACT_SCORING__RANGE_POLICY` -> `scoring.range_policy`, etc.
//!
//! # Usage
//!
//! ```no_run
//! use pact_config::PactConfig;
//!
//! let config = PactConfig::load_with_dotenv().expect("config");
//! println!("data dir: {}", config.store.data_dir.display());
//! ```

mod error;
mod gaps;
mod general;
mod refiner;
mod scoring;
mod store;

pub use error::ConfigError;
pub use gaps::{GapConfig, IndustryBenchmark};
pub use general::GeneralConfig;
pub use refiner::{GENERAL_TERMS, QualityIndicators, RefinerConfig, TermCategory};
pub use scoring::{
    CriterionConfig, RangePolicy, ScoringConfig, TierThresholds, WEIGHT_SUM_TOLERANCE,
};
pub use store::StoreConfig;

use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

#[derive(Debug, Clone, Default, Deserialize, Serialize, PartialEq)]
pub struct PactConfig {
    #[serde(default)]
    pub store: StoreConfig,
    #[serde(default)]
    pub scoring: ScoringConfig,
    #[serde(default)]
    pub gaps: GapConfig,
    #[serde(default)]
    pub refiner: RefinerConfig,
    #[serde(default)]
    pub general: GeneralConfig,
}

impl PactConfig {
    /// Load configuration from all sources (TOML files + environment variables)
    /// and validate every section.
    ///
    /// Does NOT call `dotenvy` -- use [`Self::load_with_dotenv`] for `.env` support.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a section is invalid.
    pub fn load() -> Result<Self, ConfigError> {
        Self::from_figment(&Self::figment())
    }

    /// Load configuration with `.env` file support from the current directory.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a section is invalid.
    pub fn load_with_dotenv() -> Result<Self, ConfigError> {
        // A missing .env file is not an error.
        let _ = dotenvy::dotenv();
        Self::load()
    }

    /// Extract and validate a config from an arbitrary figment.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if extraction fails or a section is invalid.
    pub fn from_figment(figment: &Figment) -> Result<Self, ConfigError> {
        let config: Self = figment.extract()?;
        config.validate()?;
        Ok(config)
    }

    /// Build the figment provider chain.
    ///
    /// This is public so tests can inspect the figment directly or add
    /// additional providers on top.
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
        let local_path = PathBuf::from(".pact/config.toml");
        if local_path.exists() {
            figment = figment.merge(Toml::file(local_path));
        }

        // Layer 3: Environment variables (highest priority)
        figment.merge(Env::prefixed("PACT_").split("__"))
    }

    /// Validate every section.
    ///
    /// # Errors
    ///
    /// Returns the first `ConfigError::InvalidValue` found.
    pub fn validate(&self) -> Result<(), ConfigError> {
        self.store.validate()?;
        self.scoring.validate()?;
        self.gaps.validate()?;
        self.refiner.validate()
    }

    /// Path to the user-global config file.
    fn global_config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("pact").join("config.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config_is_valid() {
        let config = PactConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.general.default_history_limit, 100);
    }

    #[test]
    fn serialized_defaults_extract_unchanged() {
        let figment = Figment::from(Serialized::defaults(PactConfig::default()));
        let config = PactConfig::from_figment(&figment).expect("should extract defaults");
        assert_eq!(config, PactConfig::default());
    }
}
