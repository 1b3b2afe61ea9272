use planner_core::responses::SummaryResponse;

use crate::cli::{GlobalFlags, OutputFormat};
use crate::context::AppContext;
use crate::output::{output, render_bars};

/// Handle `splan summary`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let summary = ctx.store.aggregate();
    let response = SummaryResponse {
        bars: summary.bars(),
        summary,
    };

    if flags.format == OutputFormat::Table {
        println!("total: {}", response.summary.total);
        println!("{}", render_bars(&response.bars));
        return Ok(());
    }
    output(&response, flags.format)
}
