//! General application configuration.

use serde::{Deserialize, Serialize};

/// Category label for tasks created without one.
fn default_category() -> String {
    "General".to_string()
}

/// Default result limit.
const fn default_limit() -> u32 {
    20
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GeneralConfig {
    /// Category assigned to new tasks that don't name one.
    #[serde(default = "default_category")]
    pub default_category: String,

    /// Default result limit for list commands.
    #[serde(default = "default_limit")]
    pub default_limit: u32,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            default_category: default_category(),
            default_limit: default_limit(),
        }
    }
}
