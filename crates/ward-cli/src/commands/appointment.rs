use ward_core::entities::Appointment;

use crate::cli::GlobalFlags;
use crate::cli::subcommands::{AppointmentCommands, SlotArgs};
use crate::commands::shared::limit_or;
use crate::context::AppContext;
use crate::output::output;

/// Handle `ward appointment`.
pub fn handle(
    action: &AppointmentCommands,
    ctx: &mut AppContext,
    flags: &GlobalFlags,
) -> anyhow::Result<()> {
    match action {
        AppointmentCommands::Schedule(slot) => {
            let booked = ctx.service.schedule(
                slot.patient,
                slot.date.trim(),
                slot.time.trim(),
                slot.doctor.trim(),
            )?;
            output(&booked, flags.format)
        }
        AppointmentCommands::Cancel(slot) => {
            let canceled = ctx.service.cancel(to_appointment(slot))?;
            output(&canceled, flags.format)
        }
        AppointmentCommands::List => {
            let mut views = ctx.service.appointment_views();
            views.truncate(limit_or(flags, usize::MAX));
            output(&views, flags.format)
        }
    }
}

fn to_appointment(slot: &SlotArgs) -> Appointment {
    Appointment::new(
        slot.date.trim(),
        slot.time.trim(),
        slot.doctor.trim(),
        slot.patient,
    )
}
