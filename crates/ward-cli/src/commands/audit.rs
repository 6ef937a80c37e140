use crate::cli::GlobalFlags;
use crate::commands::shared::limit_or;
use crate::context::AppContext;
use crate::output::output;

const DEFAULT_AUDIT_LIMIT: usize = 20;

/// Handle `ward audit`: most recent records first.
pub fn handle(ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let records = ctx.service.audit_tail(limit_or(flags, DEFAULT_AUDIT_LIMIT))?;
    output(&records, flags.format)
}
