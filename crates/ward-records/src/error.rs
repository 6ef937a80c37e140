//! Error types for ward-records.

use std::path::PathBuf;

use thiserror::Error;
use ward_core::entities::PatientId;
use ward_core::errors::CoreError;

/// Failures reading or appending the audit log.
#[derive(Debug, Error)]
pub enum AuditError {
    /// The log file could not be opened or appended to.
    #[error("Log write failed for {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },

    /// The log file exists but could not be read.
    #[error("Could not read {}: {source}", path.display())]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Errors from record store and service operations.
#[derive(Debug, Error)]
pub enum RecordsError {
    #[error("This patient ID already exists: {0}")]
    DuplicatePatient(PatientId),

    #[error("Appointment failed: patient ID {0} not found.")]
    PatientNotFound(PatientId),

    #[error("Overlap: {date} {time} with {doctor} already booked.")]
    SlotTaken {
        date: String,
        time: String,
        doctor: String,
    },

    #[error("Cancel failed: appointment not found.")]
    AppointmentNotFound,

    #[error("Filename cannot be empty.")]
    EmptyPath,

    #[error("Backup file {} does not exist.", .0.display())]
    BackupMissing(PathBuf),

    #[error("Backup file {} is corrupted. Data not changed.", path.display())]
    BackupCorrupted {
        path: PathBuf,
        source: serde_json::Error,
    },

    /// A store file could not be read or written.
    #[error("I/O error on {}: {source}", path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error(transparent)]
    Audit(#[from] AuditError),

    #[error(transparent)]
    Core(#[from] CoreError),
}

impl RecordsError {
    pub(crate) fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
