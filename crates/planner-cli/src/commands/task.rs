use crate::cli::GlobalFlags;
use crate::cli::subcommands::TaskCommands;
use crate::context::AppContext;

mod complete;
mod create;
mod delete;
mod get;
mod list;
mod update;

/// Handle `splan task`.
///
/// Mutating subcommands write the task file only after the store operation
/// succeeded.
pub fn handle(
    action: TaskCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        TaskCommands::Create {
            title,
            date,
            time,
            status,
            category,
            description,
        } => create::run(
            create::Params {
                title,
                date,
                time,
                status,
                category,
                description,
            },
            ctx,
            flags,
        ),
        TaskCommands::Update {
            id,
            title,
            date,
            time,
            status,
            category,
            description,
        } => update::run(
            update::Params {
                id,
                title,
                date,
                time,
                status,
                category,
                description,
            },
            ctx,
            flags,
        ),
        TaskCommands::Delete { id } => delete::run(&id, ctx, flags),
        TaskCommands::Complete { id } => complete::run(&id, ctx, flags),
        TaskCommands::Get { id } => get::run(&id, ctx, flags),
        TaskCommands::List {
            status,
            date,
            today,
            search,
        } => list::run(
            list::Params {
                status,
                date,
                today,
                search,
            },
            ctx,
            flags,
        ),
    }
}
