//! # planner-core
//!
//! Core types, validation, ID generation, and error types for SysPlanner.
//!
//! This crate provides the foundational types shared across all planner crates:
//! - The `Task` entity and its creation input
//! - The `TaskStatus` set and validation reason codes
//! - Centralized field validation (date/time shape and range)
//! - ID prefix constants and ID sources
//! - The cross-cutting `CoreError` taxonomy
//! - Dashboard response types and the bar-width helper

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod responses;
pub mod validation;
