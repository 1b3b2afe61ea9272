use planner_core::enums::TaskStatus;
use planner_store::{TaskUpdate, TaskUpdateBuilder};

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub id: String,
    pub title: Option<String>,
    pub date: Option<String>,
    pub time: Option<String>,
    pub status: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

pub fn run(params: Params, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let id = params.id.clone();
    let update = build_update(params)?;

    let task = ctx.store.update(&id, update)?;
    ctx.persist()?;
    output(&task, flags.format)
}

fn build_update(params: Params) -> anyhow::Result<TaskUpdate> {
    let mut builder = TaskUpdateBuilder::new();
    if let Some(title) = params.title {
        builder = builder.title(title);
    }
    if let Some(date) = params.date {
        builder = builder.date(date);
    }
    if let Some(time) = params.time {
        builder = builder.time(time);
    }
    if let Some(status) = params.status.as_deref() {
        builder = builder.status(parse_enum::<TaskStatus>(status, "status")?);
    }
    if let Some(category) = params.category {
        builder = builder.category(category);
    }
    if let Some(description) = params.description {
        builder = builder.description(Some(description));
    }

    let update = builder.build();
    if update.is_empty() {
        anyhow::bail!(
            "nothing to update: pass at least one of --title, --date, --time, --status, \
             --category or --description"
        );
    }
    Ok(update)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn params() -> Params {
        Params {
            id: String::from("tsk-1"),
            title: None,
            date: None,
            time: None,
            status: None,
            category: None,
            description: None,
        }
    }

    #[test]
    fn rejects_noop_update() {
        let err = build_update(params()).unwrap_err();
        assert!(err.to_string().starts_with("nothing to update"));
    }

    #[test]
    fn carries_only_supplied_fields() {
        let update = build_update(Params {
            time: Some(String::from("10:00")),
            status: Some(String::from("In-Progress")),
            ..params()
        })
        .unwrap();
        assert_eq!(update.time.as_deref(), Some("10:00"));
        assert_eq!(update.status, Some(TaskStatus::InProgress));
        assert_eq!(update.title, None);
    }

    #[test]
    fn unknown_status_is_rejected() {
        let result = build_update(Params {
            status: Some(String::from("blocked")),
            ..params()
        });
        assert!(result.is_err());
    }
}
