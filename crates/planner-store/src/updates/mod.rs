//! Partial-update types, one module per entity.

pub mod task;
