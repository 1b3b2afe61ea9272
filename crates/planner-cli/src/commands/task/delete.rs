use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

pub fn run(id: &str, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let task = ctx.store.delete(id)?;
    ctx.persist()?;
    output(&task, flags.format)
}
