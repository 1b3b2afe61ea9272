//! Task file location.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

fn default_file_name() -> String {
    "tasks.jsonl".to_string()
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory holding the task file. Empty means the platform data dir.
    #[serde(default)]
    pub data_dir: String,

    /// Task file name inside `data_dir`.
    #[serde(default = "default_file_name")]
    pub file_name: String,
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: String::new(),
            file_name: default_file_name(),
        }
    }
}

impl StorageConfig {
    /// Resolved data directory.
    ///
    /// `data_dir` if set, else `<platform data dir>/sysplanner`, else
    /// `.sysplanner` in the current directory.
    #[must_use]
    pub fn resolved_data_dir(&self) -> PathBuf {
        if !self.data_dir.trim().is_empty() {
            return PathBuf::from(self.data_dir.trim());
        }
        dirs::data_dir().map_or_else(
            || PathBuf::from(".sysplanner"),
            |dir| dir.join("sysplanner"),
        )
    }

    /// Full path of the task file.
    #[must_use]
    pub fn tasks_path(&self) -> PathBuf {
        self.resolved_data_dir().join(&self.file_name)
    }
}
