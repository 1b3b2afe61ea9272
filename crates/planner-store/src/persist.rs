//! JSONL task file.
//!
//! The whole collection is stored as one task per line, in display order.
//! Saving writes a sibling `.tmp` file and renames it over the target, so a
//! reader never sees a half-written snapshot.

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use planner_core::entities::Task;

use crate::error::StoreError;

/// Reads and writes the persisted task collection.
#[derive(Debug, Clone)]
pub struct TaskFile {
    path: PathBuf,
}

impl TaskFile {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Load every persisted task. A missing file is an empty collection.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the file cannot be read or a line does not
    /// decode as a task.
    pub fn load(&self) -> Result<Vec<Task>, StoreError> {
        let lines = match serde_jsonlines::json_lines::<Task, _>(&self.path) {
            Ok(lines) => lines,
            Err(source) if source.kind() == ErrorKind::NotFound => {
                tracing::debug!(path = %self.path.display(), "task file missing; starting empty");
                return Ok(Vec::new());
            }
            Err(source) => return Err(self.io_error(source)),
        };

        let tasks = lines
            .collect::<std::io::Result<Vec<Task>>>()
            .map_err(|source| self.io_error(source))?;
        tracing::debug!(path = %self.path.display(), count = tasks.len(), "loaded tasks");
        Ok(tasks)
    }

    /// Replace the persisted collection with `tasks`.
    ///
    /// A failed rename removes the temp file before returning.
    ///
    /// # Errors
    ///
    /// Returns `StoreError::Io` if the parent directory, the temp file or the
    /// rename fails.
    pub fn save(&self, tasks: &[Task]) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent).map_err(|source| StoreError::Io {
                path: parent.to_path_buf(),
                source,
            })?;
        }

        let tmp = self.tmp_path();
        serde_jsonlines::write_json_lines(&tmp, tasks).map_err(|source| StoreError::Io {
            path: tmp.clone(),
            source,
        })?;
        if let Err(source) = std::fs::rename(&tmp, &self.path) {
            if let Err(cleanup) = std::fs::remove_file(&tmp) {
                tracing::warn!(path = %tmp.display(), %cleanup, "failed to remove temp file");
            }
            return Err(self.io_error(source));
        }

        tracing::debug!(path = %self.path.display(), count = tasks.len(), "saved tasks");
        Ok(())
    }

    fn tmp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(std::ffi::OsStr::to_os_string)
            .unwrap_or_default();
        name.push(".tmp");
        self.path.with_file_name(name)
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}
