//! Store error types for planner-store.

use std::path::PathBuf;

use planner_core::errors::CoreError;
use thiserror::Error;

/// Errors from task store operations and the task file.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Validation or lookup failure from a store operation.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// Reading, decoding or writing the task file failed.
    #[error("Task file error at {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}
