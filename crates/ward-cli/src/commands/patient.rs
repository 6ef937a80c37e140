use ward_core::entities::Patient;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::PatientCommands;
use crate::commands::shared::limit_or;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ward patient`.
pub fn handle(
    action: &PatientCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        PatientCommands::Add {
            id,
            name,
            diagnosis,
            medications,
        } => {
            let patient = ctx.service.add_patient(Patient {
                id: *id,
                name: name.trim().to_string(),
                diagnosis: diagnosis.trim().to_string(),
                medications: medications.trim().to_string(),
            })?;
            output(&patient, flags.format)
        }
        PatientCommands::List => {
            let patients: Vec<Patient> = ctx
                .service
                .patients()
                .iter()
                .take(limit_or(flags, usize::MAX))
                .cloned()
                .collect();
            output(&patients, flags.format)
        }
    }
}
