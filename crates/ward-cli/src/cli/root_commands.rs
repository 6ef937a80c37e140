use std::path::PathBuf;

use clap::{Args, Subcommand};

use crate::cli::subcommands::{AppointmentCommands, PatientCommands};

/// Top-level command tree.
#[derive(Clone, Debug, Subcommand)]
pub enum Commands {
    /// Patient records.
    Patient {
        #[command(subcommand)]
        action: PatientCommands,
    },
    /// Appointment bookings.
    Appointment {
        #[command(subcommand)]
        action: AppointmentCommands,
    },
    /// Treatment report grouped by diagnosis.
    Report,
    /// Write patients and appointments to a JSON backup.
    Backup(BackupArgs),
    /// Replace patients and appointments with a JSON backup.
    Restore(BackupArgs),
    /// Undo the most recent schedule/cancel actions.
    Rollback,
    /// Show the most recent audit log records.
    Audit,
    /// Interactive numbered menu.
    Menu,
}

#[derive(Clone, Debug, Args)]
pub struct BackupArgs {
    /// Backup file path.
    pub file: PathBuf,
}
