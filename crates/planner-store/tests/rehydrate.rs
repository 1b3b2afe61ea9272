//! A store survives a save/load cycle through the task file unchanged.

use planner_core::entities::NewTask;
use planner_core::enums::TaskStatus;
use planner_core::ids::SequentialIds;
use planner_store::{TaskFile, TaskStore, TaskUpdateBuilder};
use pretty_assertions::assert_eq;

#[test]
fn store_roundtrips_through_task_file() {
    let dir = tempfile::tempdir().unwrap();
    let file = TaskFile::new(dir.path().join("tasks.jsonl"));

    let mut store = TaskStore::new().with_id_source(SequentialIds::default());
    let study = store
        .create(NewTask::new("Study Java", "2025-11-18", "19:00").with_category("Studies"))
        .unwrap();
    let devops = store
        .create(
            NewTask::new("Review DevOps pipeline", "2025-11-18", "21:00")
                .with_status(TaskStatus::InProgress)
                .with_description("staging first"),
        )
        .unwrap();
    store.mark_completed(&study.id).unwrap();
    file.save(store.tasks()).unwrap();

    let mut reloaded =
        TaskStore::from_tasks(file.load().unwrap()).with_id_source(SequentialIds::default());
    assert_eq!(reloaded.tasks(), store.tasks());
    assert_eq!(reloaded.aggregate(), store.aggregate());

    // The restarted sequence hits both persisted IDs before finding a free one.
    let extra = reloaded
        .create(NewTask::new("Crossfit", "2025-11-19", "17:00"))
        .unwrap();
    assert_eq!(extra.id, "tsk-00000003");
    assert_ne!(extra.id, study.id);
    assert_ne!(extra.id, devops.id);

    reloaded
        .update(&devops.id, TaskUpdateBuilder::new().time("22:30").build())
        .unwrap();
    file.save(reloaded.tasks()).unwrap();

    let titles: Vec<String> = file
        .load()
        .unwrap()
        .into_iter()
        .map(|task| task.title)
        .collect();
    assert_eq!(titles, ["Study Java", "Review DevOps pipeline", "Crossfit"]);
}

#[test]
fn dashboard_scenario_counts_three_statuses() {
    let mut store = TaskStore::new();
    for status in [
        TaskStatus::Open,
        TaskStatus::InProgress,
        TaskStatus::Completed,
    ] {
        store
            .create(NewTask::new("t", "2025-11-18", "10:00").with_status(status))
            .unwrap();
    }

    let summary = serde_json::to_value(store.aggregate()).unwrap();
    assert_eq!(
        summary,
        serde_json::json!({
            "total": 3,
            "by_status": {"open": 1, "in_progress": 1, "completed": 1, "pending": 0}
        })
    );
}

#[test]
fn hand_edited_file_loses_only_invalid_records() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("tasks.jsonl");
    std::fs::write(
        &path,
        concat!(
            r#"{"id":"a","title":"","date":"nope","time":"99:99","status":"open"}"#,
            "\n",
            r#"{"id":"b","title":"Gym","date":"2025-11-18","time":"17:00","status":"done"}"#,
            "\n",
        ),
    )
    .unwrap();

    let store = TaskStore::from_tasks(TaskFile::new(&path).load().unwrap());
    assert_eq!(store.len(), 1);
    assert!(store.get("a").is_err());
    assert_eq!(store.get("b").unwrap().status, TaskStatus::Completed);
}
