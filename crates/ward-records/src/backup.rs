//! JSON snapshot of patients and appointments.
//!
//! Layout:
//!
//! ```json
//! {
//!   "patients": { "1": { "name": "Ana", "diagnosis": "Flu", "medications": "Rest" } },
//!   "appointments": [["2024-01-01", "09:00", "Dr.Lee", 1]]
//! }
//! ```
//!
//! Appointments are positional arrays. On load, entries that are not
//! four-element `[date, time, doctor, patient_id]` arrays are dropped, as are
//! patients whose key is not an integer.

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use ward_core::entities::{Appointment, Patient, PatientId};

use crate::appointments::AppointmentBook;
use crate::error::RecordsError;
use crate::patients::PatientStore;

type AppointmentTuple = (String, String, String, PatientId);

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct PatientFields {
    name: String,
    diagnosis: String,
    medications: String,
}

#[derive(Debug, Default, Serialize, Deserialize)]
#[serde(default)]
struct BackupFile {
    patients: BTreeMap<String, PatientFields>,
    appointments: Vec<serde_json::Value>,
}

/// Contents restored from a backup file.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    pub patients: PatientStore,
    pub appointments: AppointmentBook,
}

/// Write patients and appointments to `path` as indented JSON.
///
/// # Errors
///
/// Returns `RecordsError::Io` if the file cannot be written.
pub fn write(
    path: &Path,
    patients: &PatientStore,
    appointments: &AppointmentBook,
) -> Result<(), RecordsError> {
    let file = BackupFile {
        patients: patients
            .iter()
            .map(|p| {
                (
                    p.id.to_string(),
                    PatientFields {
                        name: p.name.clone(),
                        diagnosis: p.diagnosis.clone(),
                        medications: p.medications.clone(),
                    },
                )
            })
            .collect(),
        appointments: appointments
            .iter()
            .map(|a| {
                let tuple: AppointmentTuple =
                    (a.date.clone(), a.time.clone(), a.doctor.clone(), a.patient_id);
                serde_json::to_value(tuple)
            })
            .collect::<Result<_, _>>()?,
    };

    let json = serde_json::to_string_pretty(&file)?;
    std::fs::write(path, json).map_err(|e| RecordsError::io(path, e))
}

/// Read a backup file.
///
/// # Errors
///
/// - `RecordsError::BackupMissing` if `path` does not exist.
/// - `RecordsError::BackupCorrupted` if it is not a valid backup document.
/// - `RecordsError::Io` for other read failures.
pub fn read(path: &Path) -> Result<Snapshot, RecordsError> {
    if !path.exists() {
        return Err(RecordsError::BackupMissing(PathBuf::from(path)));
    }

    let content = std::fs::read_to_string(path).map_err(|e| RecordsError::io(path, e))?;
    let file: BackupFile =
        serde_json::from_str(&content).map_err(|source| RecordsError::BackupCorrupted {
            path: path.to_path_buf(),
            source,
        })?;

    let patients = file
        .patients
        .into_iter()
        .filter_map(|(key, fields)| match key.trim().parse::<PatientId>() {
            Ok(id) => Some(Patient {
                id,
                name: fields.name,
                diagnosis: fields.diagnosis,
                medications: fields.medications,
            }),
            Err(_) => {
                tracing::warn!(key = %key, "skipping backup patient with non-integer id");
                None
            }
        });

    let appointments = file.appointments.into_iter().filter_map(|item| {
        serde_json::from_value::<AppointmentTuple>(item)
            .ok()
            .map(|(date, time, doctor, patient_id)| Appointment::new(date, time, doctor, patient_id))
    });

    Ok(Snapshot {
        patients: PatientStore::from_patients(patients),
        appointments: AppointmentBook::from_appointments(appointments),
    })
}
