use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ward report`.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    output(&ctx.service.treatment_report(), flags.format)
}
