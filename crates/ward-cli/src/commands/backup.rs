use crate::cli::GlobalFlags;
use crate::cli::root_commands::BackupArgs;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ward backup <file>`.
pub fn handle_backup(args: &BackupArgs, ctx: &AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    let saved = ctx.service.backup(&args.file)?;
    output(&saved, flags.format)
}

/// Handle `ward restore <file>`.
pub fn handle_restore(
    args: &BackupArgs,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    let restored = ctx.service.restore(&args.file)?;
    tracing::info!(
        patients = restored.patients,
        appointments = restored.appointments,
        "records restored from backup"
    );
    output(&restored, flags.format)
}
