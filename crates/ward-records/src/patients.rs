//! Patient records, persisted as CSV.
//!
//! The file carries an `id,name,diagnosis,medications` header. Rows whose
//! `id` is not an integer are skipped on load; a later row with the same
//! `id` replaces an earlier one.

use std::collections::BTreeMap;
use std::fs::OpenOptions;
use std::io::Write;
use std::path::Path;

use serde::Deserialize;
use ward_core::entities::{Patient, PatientId};

use crate::error::RecordsError;

const HEADER: [&str; 4] = ["id", "name", "diagnosis", "medications"];

/// A CSV row before the `id` column has been validated.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct PatientRow {
    id: String,
    name: String,
    diagnosis: String,
    medications: String,
}

/// Patients keyed by ID, iterated in ascending ID order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PatientStore {
    patients: BTreeMap<PatientId, Patient>,
}

impl PatientStore {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            patients: BTreeMap::new(),
        }
    }

    #[must_use]
    pub fn from_patients(patients: impl IntoIterator<Item = Patient>) -> Self {
        Self {
            patients: patients.into_iter().map(|p| (p.id, p)).collect(),
        }
    }

    /// Load patients from the CSV file at `path`.
    ///
    /// A missing file is an empty store.
    ///
    /// # Errors
    ///
    /// Returns `RecordsError::Csv` if the file cannot be opened or parsed.
    pub fn load(path: &Path) -> Result<Self, RecordsError> {
        if !path.exists() {
            tracing::info!(path = %path.display(), "patient file not found, starting with no patients");
            return Ok(Self::new());
        }

        let mut reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .flexible(true)
            .from_path(path)?;

        let mut store = Self::new();
        for row in reader.deserialize::<PatientRow>() {
            let row = row?;
            let Ok(id) = row.id.parse::<PatientId>() else {
                tracing::debug!(id = %row.id, "skipping patient row with non-integer id");
                continue;
            };
            store.insert(Patient {
                id,
                name: row.name,
                diagnosis: row.diagnosis,
                medications: row.medications,
            });
        }
        Ok(store)
    }

    /// Append one patient row to the CSV file, writing the header first if
    /// the file does not exist yet.
    ///
    /// # Errors
    ///
    /// Returns `RecordsError` if the file cannot be opened or written.
    pub fn append_to_file(path: &Path, patient: &Patient) -> Result<(), RecordsError> {
        let file_exists = path.exists();
        let file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(path)
            .map_err(|e| RecordsError::io(path, e))?;

        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_writer(file);
        if !file_exists {
            writer.write_record(HEADER)?;
        }
        writer.serialize(patient)?;
        writer.flush().map_err(|e| RecordsError::io(path, e))
    }

    /// Rewrite the whole CSV file with the current patients.
    ///
    /// # Errors
    ///
    /// Returns `RecordsError` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), RecordsError> {
        let mut writer = csv::WriterBuilder::new()
            .has_headers(false)
            .from_path(path)?;
        writer.write_record(HEADER)?;
        for patient in self.patients.values() {
            writer.serialize(patient)?;
        }
        writer.flush().map_err(|e| RecordsError::io(path, e))
    }

    /// Insert or replace a patient.
    pub fn insert(&mut self, patient: Patient) {
        self.patients.insert(patient.id, patient);
    }

    #[must_use]
    pub fn get(&self, id: PatientId) -> Option<&Patient> {
        self.patients.get(&id)
    }

    #[must_use]
    pub fn contains(&self, id: PatientId) -> bool {
        self.patients.contains_key(&id)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Patient> {
        self.patients.values()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.patients.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.patients.is_empty()
    }
}
