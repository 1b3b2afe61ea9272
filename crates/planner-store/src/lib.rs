//! # planner-store
//!
//! Task collection management for SysPlanner.
//!
//! [`TaskStore`] owns the ordered task list and is its only mutator: create,
//! update, delete and mark-completed, plus the per-status aggregate used by
//! the summary dashboard. [`TaskFile`] persists the collection as JSONL and
//! rehydrates it at startup. The store itself performs no I/O.

pub mod error;
pub mod persist;
pub mod store;
pub mod updates;

pub use error::StoreError;
pub use persist::TaskFile;
pub use store::{TaskFilter, TaskStore};
pub use updates::task::{TaskUpdate, TaskUpdateBuilder};
