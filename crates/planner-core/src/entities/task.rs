use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::enums::TaskStatus;

/// Category assigned when a task is created without one.
pub const DEFAULT_CATEGORY: &str = "General";

/// One planning item: something to do on a given day, optionally at a time.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct Task {
    pub id: String,
    pub title: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    /// `YYYY-MM-DD`.
    pub date: String,
    /// `HH:MM`, 24-hour.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub time: Option<String>,
    pub status: TaskStatus,
    #[serde(default = "default_category")]
    pub category: String,
}

fn default_category() -> String {
    DEFAULT_CATEGORY.to_string()
}

/// Input for creating a task, as typed into a form (untrimmed).
#[derive(Debug, Clone, Default, Serialize, Deserialize, JsonSchema, PartialEq, Eq)]
pub struct NewTask {
    pub title: String,
    pub date: String,
    pub time: String,
    #[serde(default)]
    pub status: Option<TaskStatus>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub description: Option<String>,
}

impl NewTask {
    #[must_use]
    pub fn new(title: impl Into<String>, date: impl Into<String>, time: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            date: date.into(),
            time: time.into(),
            ..Self::default()
        }
    }

    #[must_use]
    pub const fn with_status(mut self, status: TaskStatus) -> Self {
        self.status = Some(status);
        self
    }

    #[must_use]
    pub fn with_category(mut self, category: impl Into<String>) -> Self {
        self.category = Some(category.into());
        self
    }

    #[must_use]
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }
}
