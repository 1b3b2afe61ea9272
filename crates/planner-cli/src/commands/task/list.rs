use chrono::Local;
use planner_core::enums::TaskStatus;
use planner_store::TaskFilter;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub status: Option<String>,
    pub date: Option<String>,
    pub today: bool,
    pub search: Option<String>,
}

pub fn run(params: Params, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let today = Local::now().date_naive().format("%Y-%m-%d").to_string();
    let filter = build_filter(params, &today)?;
    let limit = usize::try_from(flags.limit.unwrap_or(ctx.config.general.default_limit))?;

    let tasks = ctx.store.list(&filter);
    let shown = &tasks[..tasks.len().min(limit)];
    output(&shown, flags.format)
}

fn build_filter(params: Params, today: &str) -> anyhow::Result<TaskFilter> {
    let status = params
        .status
        .as_deref()
        .map(|raw| parse_enum::<TaskStatus>(raw, "status"))
        .transpose()?;
    let date = if params.today {
        Some(today.to_string())
    } else {
        params.date.map(|date| date.trim().to_string())
    };

    Ok(TaskFilter {
        status,
        date,
        search: params.search,
    })
}
