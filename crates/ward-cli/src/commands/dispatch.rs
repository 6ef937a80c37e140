use crate::cli::GlobalFlags;
use crate::cli::root_commands::Commands;
use crate::commands;
use crate::context::AppContext;

/// Dispatch a parsed command to the corresponding handler module.
pub fn dispatch(command: Commands, ctx: &mut AppContext, flags: &GlobalFlags) -> anyhow::Result<()> {
    match command {
        Commands::Patient { action } => commands::patient::handle(&action, ctx, flags),
        Commands::Appointment { action } => commands::appointment::handle(&action, ctx, flags),
        Commands::Report => commands::report::handle(ctx, flags),
        Commands::Backup(args) => commands::backup::handle_backup(&args, ctx, flags),
        Commands::Restore(args) => commands::backup::handle_restore(&args, ctx, flags),
        Commands::Rollback => commands::rollback::handle(ctx, flags),
        Commands::Audit => commands::audit::handle(ctx, flags),
        Commands::Menu => commands::menu::handle(ctx),
    }
}
