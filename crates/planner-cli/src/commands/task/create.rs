use planner_core::entities::NewTask;
use planner_core::enums::TaskStatus;

use crate::cli::GlobalFlags;
use crate::commands::shared::parse::parse_enum;
use crate::context::AppContext;
use crate::output::output;

pub struct Params {
    pub title: String,
    pub date: String,
    pub time: String,
    pub status: Option<String>,
    pub category: Option<String>,
    pub description: Option<String>,
}

pub fn run(params: Params, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let status = params
        .status
        .as_deref()
        .map(|raw| parse_enum::<TaskStatus>(raw, "status"))
        .transpose()?;

    let task = ctx.store.create(NewTask {
        title: params.title,
        date: params.date,
        time: params.time,
        status,
        category: params.category,
        description: params.description,
    })?;
    ctx.persist()?;
    output(&task, flags.format)
}
