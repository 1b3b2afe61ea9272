//! The task collection and every operation that mutates it.

use planner_core::entities::{DEFAULT_CATEGORY, NewTask, Task};
use planner_core::enums::{TaskStatus, ValidationReason};
use planner_core::errors::CoreError;
use planner_core::ids::{IdSource, PREFIX_TASK, RandomIds};
use planner_core::responses::TaskSummary;
use planner_core::validation::{FieldInput, validate_fields};

use crate::updates::task::TaskUpdate;

/// Narrowing criteria for [`TaskStore::list`]. Empty criteria match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TaskFilter {
    pub status: Option<TaskStatus>,
    /// Exact `YYYY-MM-DD` match.
    pub date: Option<String>,
    /// Case-insensitive substring of title, description or category.
    pub search: Option<String>,
}

impl TaskFilter {
    fn matches(&self, task: &Task, needle: Option<&str>) -> bool {
        if self.status.is_some_and(|status| task.status != status) {
            return false;
        }
        if self.date.as_deref().is_some_and(|d| task.date != d) {
            return false;
        }
        needle.is_none_or(|needle| {
            [
                Some(task.title.as_str()),
                task.description.as_deref(),
                Some(task.category.as_str()),
            ]
            .into_iter()
            .flatten()
            .any(|field| field.to_lowercase().contains(needle))
        })
    }
}

/// Ordered, in-memory task collection.
///
/// Insertion order is display order. Every operation either succeeds or
/// leaves the collection exactly as it was.
#[derive(Debug)]
pub struct TaskStore {
    tasks: Vec<Task>,
    default_category: String,
    ids: Box<dyn IdSource>,
}

impl Default for TaskStore {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskStore {
    /// Empty store with random IDs and the built-in default category.
    #[must_use]
    pub fn new() -> Self {
        Self {
            tasks: Vec::new(),
            default_category: DEFAULT_CATEGORY.to_string(),
            ids: Box::new(RandomIds::default()),
        }
    }

    /// Rebuild a store from persisted tasks.
    ///
    /// Each task's title, date and time go through the same checks as
    /// [`Self::create`]; a missing time is allowed for older records. Tasks
    /// that fail, and later tasks reusing an earlier task's ID, are dropped.
    #[must_use]
    pub fn from_tasks(tasks: Vec<Task>) -> Self {
        let mut store = Self::new();
        store.tasks.reserve(tasks.len());
        for task in tasks {
            if store.position(&task.id).is_some() {
                tracing::warn!(id = %task.id, "dropping task with duplicate id");
                continue;
            }
            match revalidate(task) {
                Ok(task) => store.tasks.push(task),
                Err((id, reason)) => {
                    tracing::warn!(id = %id, %reason, "dropping task with invalid fields");
                }
            }
        }
        store
    }

    /// Category given to tasks created without one.
    #[must_use]
    pub fn with_default_category(mut self, category: impl Into<String>) -> Self {
        self.default_category = category.into();
        self
    }

    #[must_use]
    pub fn with_id_source(mut self, ids: impl IdSource + 'static) -> Self {
        self.ids = Box::new(ids);
        self
    }

    #[must_use]
    pub fn tasks(&self) -> &[Task] {
        &self.tasks
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no task has `id`.
    pub fn get(&self, id: &str) -> Result<&Task, CoreError> {
        self.tasks
            .iter()
            .find(|task| task.id == id)
            .ok_or_else(|| CoreError::task_not_found(id))
    }

    /// Validate and append a new task.
    ///
    /// Status defaults to `open`; a missing or blank category becomes the
    /// store's default category.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::Validation` when title, date or time is rejected.
    pub fn create(&mut self, input: NewTask) -> Result<Task, CoreError> {
        let checked = validate_fields(FieldInput {
            title: Some(&input.title),
            date: Some(&input.date),
            time: Some(&input.time),
        })?;
        let (Some(title), Some(date), Some(time)) = (checked.title, checked.date, checked.time)
        else {
            return Err(ValidationReason::MissingFields.into());
        };

        let task = Task {
            id: self.fresh_id(),
            title,
            description: normalize_description(input.description),
            date,
            time: Some(time),
            status: input.status.unwrap_or_default(),
            category: input
                .category
                .map(|category| category.trim().to_string())
                .filter(|category| !category.is_empty())
                .unwrap_or_else(|| self.default_category.clone()),
        };

        tracing::debug!(id = %task.id, status = %task.status, "task created");
        self.tasks.push(task.clone());
        Ok(task)
    }

    /// Replace the supplied fields of an existing task.
    ///
    /// All supplied fields are validated before anything is written.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no task has `id`, otherwise
    /// `CoreError::Validation` if a supplied field is rejected.
    pub fn update(&mut self, id: &str, update: TaskUpdate) -> Result<Task, CoreError> {
        let index = self.index_of(id)?;

        let checked = validate_fields(FieldInput {
            title: update.title.as_deref(),
            date: update.date.as_deref(),
            time: update.time.as_deref(),
        })?;
        let category = match update.category {
            Some(category) => {
                let category = category.trim().to_string();
                if category.is_empty() {
                    return Err(ValidationReason::MissingFields.into());
                }
                Some(category)
            }
            None => None,
        };

        let task = &mut self.tasks[index];
        if let Some(title) = checked.title {
            task.title = title;
        }
        if let Some(date) = checked.date {
            task.date = date;
        }
        if let Some(time) = checked.time {
            task.time = Some(time);
        }
        if let Some(status) = update.status {
            task.status = status;
        }
        if let Some(category) = category {
            task.category = category;
        }
        if let Some(description) = update.description {
            task.description = normalize_description(description);
        }

        tracing::debug!(id, "task updated");
        Ok(task.clone())
    }

    /// Remove a task, returning it.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no task has `id`.
    pub fn delete(&mut self, id: &str) -> Result<Task, CoreError> {
        let index = self.index_of(id)?;
        let task = self.tasks.remove(index);
        tracing::debug!(id, "task deleted");
        Ok(task)
    }

    /// Set a task's status to `completed`. Calling it again is harmless.
    ///
    /// # Errors
    ///
    /// Returns `CoreError::NotFound` if no task has `id`.
    pub fn mark_completed(&mut self, id: &str) -> Result<Task, CoreError> {
        let index = self.index_of(id)?;
        let task = &mut self.tasks[index];
        if task.status.is_terminal() {
            tracing::debug!(id, "task already completed");
        } else {
            task.status = TaskStatus::Completed;
            tracing::debug!(id, "task completed");
        }
        Ok(task.clone())
    }

    /// Tasks matching `filter`, in display order.
    #[must_use]
    pub fn list(&self, filter: &TaskFilter) -> Vec<&Task> {
        let needle = filter
            .search
            .as_deref()
            .map(str::trim)
            .filter(|needle| !needle.is_empty())
            .map(str::to_lowercase);
        self.tasks
            .iter()
            .filter(|task| filter.matches(task, needle.as_deref()))
            .collect()
    }

    /// Per-status counts of the current collection.
    #[must_use]
    pub fn aggregate(&self) -> TaskSummary {
        TaskSummary::from_statuses(self.tasks.iter().map(|task| task.status))
    }

    fn position(&self, id: &str) -> Option<usize> {
        self.tasks.iter().position(|task| task.id == id)
    }

    fn index_of(&self, id: &str) -> Result<usize, CoreError> {
        self.position(id).ok_or_else(|| CoreError::task_not_found(id))
    }

    fn fresh_id(&mut self) -> String {
        loop {
            let id = self.ids.next_id(PREFIX_TASK);
            if self.position(&id).is_none() {
                return id;
            }
            tracing::debug!(id, "generated id already in use; retrying");
        }
    }
}

/// Re-check a persisted task, returning it with trimmed fields.
fn revalidate(mut task: Task) -> Result<Task, (String, ValidationReason)> {
    let checked = match validate_fields(FieldInput {
        title: Some(&task.title),
        date: Some(&task.date),
        time: task.time.as_deref(),
    }) {
        Ok(checked) => checked,
        Err(reason) => return Err((task.id, reason)),
    };
    if let Some(title) = checked.title {
        task.title = title;
    }
    if let Some(date) = checked.date {
        task.date = date;
    }
    task.time = checked.time;
    Ok(task)
}

fn normalize_description(description: Option<String>) -> Option<String> {
    description
        .map(|text| text.trim().to_string())
        .filter(|text| !text.is_empty())
}
