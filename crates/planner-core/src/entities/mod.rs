//! Entity structs for SysPlanner domain objects.
//!
//! All structs derive `Serialize`, `Deserialize`, and `JsonSchema`; every
//! field is a plain string (or absent), so entities round-trip through the
//! task file without loss.

mod task;

pub use task::{DEFAULT_CATEGORY, NewTask, Task};
