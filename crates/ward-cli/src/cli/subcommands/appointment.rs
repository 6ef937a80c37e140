use clap::{Args, Subcommand};

/// Appointment booking commands.
#[derive(Clone, Debug, Subcommand)]
pub enum AppointmentCommands {
    /// Book a doctor for a patient.
    Schedule(SlotArgs),
    /// Cancel an exact booking.
    Cancel(SlotArgs),
    /// List current bookings.
    List,
}

/// One booking: patient, date, time, and doctor.
#[derive(Clone, Debug, Args)]
pub struct SlotArgs {
    #[arg(long)]
    pub patient: i64,
    /// Date as YYYY-MM-DD.
    #[arg(long)]
    pub date: String,
    /// Time as HH:MM.
    #[arg(long)]
    pub time: String,
    #[arg(long)]
    pub doctor: String,
}
