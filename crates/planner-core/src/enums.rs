//! Status and reason-code enums for SysPlanner.
//!
//! All enums use `snake_case` serialization via `#[serde(rename_all = "snake_case")]`
//! and expose `as_str()` for the stable string form used in storage and output.

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};
use std::fmt;

// ---------------------------------------------------------------------------
// TaskStatus
// ---------------------------------------------------------------------------

/// Status of a task.
///
/// Any status may be set from any other; `completed` is the terminal value
/// written by "mark completed". Older records spelled it `done`, which is
/// still accepted when decoding.
#[derive(
    Debug,
    Clone,
    Copy,
    Default,
    PartialEq,
    Eq,
    Hash,
    PartialOrd,
    Ord,
    Serialize,
    Deserialize,
    JsonSchema,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    #[default]
    Open,
    InProgress,
    Pending,
    #[serde(alias = "done")]
    Completed,
}

impl TaskStatus {
    /// Every recognized status, in dashboard order.
    pub const ALL: [Self; 4] = [Self::Open, Self::InProgress, Self::Pending, Self::Completed];

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Open => "open",
            Self::InProgress => "in_progress",
            Self::Pending => "pending",
            Self::Completed => "completed",
        }
    }

    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Completed)
    }
}

impl fmt::Display for TaskStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// ValidationReason
// ---------------------------------------------------------------------------

/// Why a task field set was rejected.
///
/// The code (`as_str`) is stable and meant for callers to match on; the
/// message is what a form shows next to the fields.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, JsonSchema)]
#[serde(rename_all = "snake_case")]
pub enum ValidationReason {
    MissingFields,
    BadDateFormat,
    BadTimeFormat,
    BadTimeValue,
}

impl ValidationReason {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::MissingFields => "missing_fields",
            Self::BadDateFormat => "bad_date_format",
            Self::BadTimeFormat => "bad_time_format",
            Self::BadTimeValue => "bad_time_value",
        }
    }

    /// Human-readable explanation for the reason.
    #[must_use]
    pub const fn message(self) -> &'static str {
        match self {
            Self::MissingFields => "title, date and time are required",
            Self::BadDateFormat => "date must be in YYYY-MM-DD format",
            Self::BadTimeFormat => "time must be in HH:MM format",
            Self::BadTimeValue => "time must be between 00:00 and 23:59",
        }
    }
}

impl fmt::Display for ValidationReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
