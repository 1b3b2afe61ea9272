use std::path::Path;

use anyhow::Context;
use planner_config::PlannerConfig;
use planner_store::{TaskFile, TaskStore};

/// Shared application resources initialized once at startup.
#[derive(Debug)]
pub struct AppContext {
    pub config: PlannerConfig,
    pub file: TaskFile,
    pub store: TaskStore,
}

impl AppContext {
    /// Load the task file and rebuild the store from it.
    ///
    /// `data_dir` overrides the configured storage directory.
    pub fn init(config: PlannerConfig, data_dir: Option<&Path>) -> anyhow::Result<Self> {
        let path = data_dir.map_or_else(
            || config.storage.tasks_path(),
            |dir| dir.join(&config.storage.file_name),
        );
        let file = TaskFile::new(path);

        let tasks = file
            .load()
            .with_context(|| format!("failed to load tasks from {}", file.path().display()))?;
        let store =
            TaskStore::from_tasks(tasks).with_default_category(&config.general.default_category);

        tracing::debug!(path = %file.path().display(), tasks = store.len(), "context ready");
        Ok(Self {
            config,
            file,
            store,
        })
    }

    /// Write the current collection back to the task file.
    pub fn persist(&self) -> anyhow::Result<()> {
        self.file
            .save(self.store.tasks())
            .with_context(|| format!("failed to save tasks to {}", self.file.path().display()))
    }
}

#[cfg(test)]
mod tests {
    use planner_core::entities::NewTask;

    use super::*;

    #[test]
    fn init_on_empty_dir_then_persist_roundtrips() {
        let dir = tempfile::tempdir().unwrap();
        let data_dir = dir.path();

        let mut ctx = AppContext::init(PlannerConfig::default(), Some(data_dir)).unwrap();
        assert!(ctx.store.is_empty());
        assert_eq!(ctx.file.path(), dir.path().join("tasks.jsonl"));

        ctx.store
            .create(NewTask::new("Gym", "2025-11-18", "17:00"))
            .unwrap();
        ctx.persist().unwrap();

        let reopened = AppContext::init(PlannerConfig::default(), Some(data_dir)).unwrap();
        assert_eq!(reopened.store.tasks(), ctx.store.tasks());
    }

    #[test]
    fn configured_default_category_applies_to_new_tasks() {
        let dir = tempfile::tempdir().unwrap();
        let mut config = PlannerConfig::default();
        config.general.default_category = "Geral".into();

        let mut ctx = AppContext::init(config, Some(dir.path())).unwrap();
        let task = ctx
            .store
            .create(NewTask::new("Gym", "2025-11-18", "17:00"))
            .unwrap();
        assert_eq!(task.category, "Geral");
    }
}
