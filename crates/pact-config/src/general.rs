//! General application configuration.

use serde::{Deserialize, Serialize};

/// Default history window.
const fn default_history_limit() -> u32 {
    100
}

#[derive(Debug, Clone, Deserialize, Serialize, PartialEq, Eq)]
pub struct GeneralConfig {
    /// Number of history entries returned when no limit is given.
    #[serde(default = "default_history_limit")]
    pub default_history_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_history_limit: default_history_limit(),
        }
    }
}
