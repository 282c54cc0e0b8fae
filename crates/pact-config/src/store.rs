//! Record store configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

fn default_data_dir() -> PathBuf {
    PathBuf::from("partnership_data")
}

const fn default_cross_process_lock() -> bool {
    true
}

const fn default_lock_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct StoreConfig {
    /// Directory holding `partners.json`, `research_data.json` and
    /// `data_history.json`.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Guard mutations with a lock file so several processes can share one
    /// data directory.
    #[serde(default = "default_cross_process_lock")]
    pub cross_process_lock: bool,

    /// How long a writer waits for another process's lock, in seconds.
    #[serde(default = "default_lock_timeout_secs")]
    pub lock_timeout_secs: u64,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            cross_process_lock: default_cross_process_lock(),
            lock_timeout_secs: default_lock_timeout_secs(),
        }
    }
}

impl StoreConfig {
    /// A config rooted at `data_dir` with all other fields defaulted.
    #[must_use]
    pub fn at(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
            ..Self::default()
        }
    }

    /// # Errors
    ///
    /// Returns `ConfigError::InvalidValue` if `data_dir` is empty.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::invalid("store.data_dir", "must not be empty"));
        }
        Ok(())
    }
}
