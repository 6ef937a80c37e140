use crate::cli::GlobalFlags;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ward rollback`.
pub fn handle(ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let outcome = ctx.service.rollback()?;
    tracing::debug!(
        window = ctx.config.rollback.window,
        applied = outcome.applied(),
        "rollback finished"
    );
    output(&outcome, flags.format)
}
