//! `WardService`: patient and appointment operations with audit logging.
//!
//! Every successful mutation appends exactly one audit record describing it;
//! rejected operations append an `ERROR` record instead. Audit write failures
//! are reported through `tracing` and never fail the operation itself.

use std::path::{Path, PathBuf};

use ward_config::WardConfig;
use ward_core::entities::{Appointment, AuditRecord, Patient, PatientId, validate_slot};
use ward_core::enums::AuditAction;
use ward_core::responses::{AppointmentView, BackupResponse, RollbackOutcome, TreatmentReport};

use crate::appointments::{AppointmentBook, AppointmentStore};
use crate::audit::{AuditLog, reader};
use crate::backup::{self, Snapshot};
use crate::error::RecordsError;
use crate::patients::PatientStore;
use crate::report::treatment_report;
use crate::rollback::RollbackEngine;

/// Name shown for appointments whose patient is not on file.
const UNKNOWN_PATIENT: &str = "Unknown";

/// Where the two record stores are persisted.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorePaths {
    pub patients: PathBuf,
    pub appointments: PathBuf,
}

/// In-memory patients and appointments, their files, and the audit log.
pub struct WardService {
    patients: PatientStore,
    book: AppointmentBook,
    audit: AuditLog,
    paths: StorePaths,
    rollback_window: usize,
}

impl WardService {
    /// Open the stores and audit log named by `config`.
    ///
    /// Creates the data directory if needed. An unreadable patient file is
    /// reported and treated as empty; an unreadable appointment file is an
    /// error, since the next save would overwrite it.
    ///
    /// # Errors
    ///
    /// Returns `RecordsError` if the data directory cannot be created or the
    /// appointment file cannot be loaded.
    pub fn open(config: &WardConfig) -> Result<Self, RecordsError> {
        let storage = &config.storage;
        std::fs::create_dir_all(&storage.data_dir)
            .map_err(|e| RecordsError::io(&storage.data_dir, e))?;

        let paths = StorePaths {
            patients: storage.patients_path(),
            appointments: storage.appointments_path(),
        };

        let patients = PatientStore::load(&paths.patients).unwrap_or_else(|error| {
            tracing::warn!(%error, "error reading patient file; starting with no patients");
            PatientStore::new()
        });
        let book = AppointmentBook::load(&paths.appointments)?;

        tracing::debug!(
            patients = patients.len(),
            appointments = book.len(),
            "ward service opened"
        );

        Ok(Self::from_parts(
            patients,
            book,
            AuditLog::new(storage.audit_log_path()),
            paths,
            config.rollback.window,
        ))
    }

    /// Assemble a service from already-loaded parts.
    #[must_use]
    pub const fn from_parts(
        patients: PatientStore,
        book: AppointmentBook,
        audit: AuditLog,
        paths: StorePaths,
        rollback_window: usize,
    ) -> Self {
        Self {
            patients,
            book,
            audit,
            paths,
            rollback_window,
        }
    }

    #[must_use]
    pub const fn patients(&self) -> &PatientStore {
        &self.patients
    }

    #[must_use]
    pub const fn appointments(&self) -> &AppointmentBook {
        &self.book
    }

    #[must_use]
    pub const fn audit_log(&self) -> &AuditLog {
        &self.audit
    }

    /// Register a new patient and append it to the patient file.
    ///
    /// # Errors
    ///
    /// - `RecordsError::DuplicatePatient` if the ID is taken.
    /// - The file error if the row cannot be written (an `ERROR` record is
    ///   logged and the patient is not added).
    pub fn add_patient(&mut self, patient: Patient) -> Result<Patient, RecordsError> {
        if self.patients.contains(patient.id) {
            return Err(RecordsError::DuplicatePatient(patient.id));
        }

        if let Err(error) = PatientStore::append_to_file(&self.paths.patients, &patient) {
            self.audit(
                AuditRecord::new(AuditAction::Error, format!("Failed to add patient: {error}"))
                    .with_patient(patient.id),
            );
            return Err(error);
        }

        self.audit(
            AuditRecord::new(
                AuditAction::AddPatient,
                format!("New patient added: ID {}, Name {}", patient.id, patient.name),
            )
            .with_patient(patient.id),
        );
        self.patients.insert(patient.clone());
        Ok(patient)
    }

    /// Check that `patient_id` is on file before booking for them.
    ///
    /// # Errors
    ///
    /// `RecordsError::PatientNotFound`, after logging an `ERROR` record.
    pub fn require_patient(&self, patient_id: PatientId) -> Result<(), RecordsError> {
        if self.patients.contains(patient_id) {
            return Ok(());
        }
        let error = RecordsError::PatientNotFound(patient_id);
        self.audit(AuditRecord::new(AuditAction::Error, error.to_string()).with_patient(patient_id));
        Err(error)
    }

    /// Book `doctor` for `patient_id` at `date` `time`.
    ///
    /// # Errors
    ///
    /// - `RecordsError::PatientNotFound` for an unknown patient.
    /// - `RecordsError::Core` if the date or time is malformed.
    /// - `RecordsError::SlotTaken` if the doctor is already booked then.
    /// - The file error if the book cannot be saved.
    ///
    /// Each rejection logs an `ERROR` record; success logs `SCHEDULE`.
    pub fn schedule(
        &mut self,
        patient_id: PatientId,
        date: &str,
        time: &str,
        doctor: &str,
    ) -> Result<Appointment, RecordsError> {
        self.require_patient(patient_id)?;
        let candidate = Appointment::new(date, time, doctor, patient_id);

        if let Err(error) = validate_slot(date, time) {
            self.audit(AuditRecord::for_appointment(
                AuditAction::Error,
                &candidate,
                format!("Appointment failed: {error}"),
            ));
            return Err(error.into());
        }

        if self.book.slot_taken(&candidate) {
            let error = RecordsError::SlotTaken {
                date: candidate.date.clone(),
                time: candidate.time.clone(),
                doctor: candidate.doctor.clone(),
            };
            self.audit(AuditRecord::for_appointment(
                AuditAction::Error,
                &candidate,
                error.to_string(),
            ));
            return Err(error);
        }

        let previous = self.book.clone();
        self.book.append(candidate.clone());
        self.commit_book(previous)?;

        self.audit(AuditRecord::for_appointment(
            AuditAction::Schedule,
            &candidate,
            format!(
                "Appointment scheduled for ID {patient_id} on {date} at {time} with {doctor}"
            ),
        ));
        Ok(candidate)
    }

    /// Remove exactly `appointment` from the book.
    ///
    /// # Errors
    ///
    /// - `RecordsError::AppointmentNotFound` if no identical appointment is
    ///   booked (an `ERROR` record is logged).
    /// - The file error if the book cannot be saved.
    pub fn cancel(&mut self, appointment: Appointment) -> Result<Appointment, RecordsError> {
        if !self.book.contains(&appointment) {
            let error = RecordsError::AppointmentNotFound;
            self.audit(AuditRecord::for_appointment(
                AuditAction::Error,
                &appointment,
                error.to_string(),
            ));
            return Err(error);
        }

        let previous = self.book.clone();
        self.book.remove(&appointment);
        self.commit_book(previous)?;

        self.audit(AuditRecord::for_appointment(
            AuditAction::Cancel,
            &appointment,
            format!(
                "Appointment canceled for ID {} on {} at {} with {}",
                appointment.patient_id, appointment.date, appointment.time, appointment.doctor
            ),
        ));
        Ok(appointment)
    }

    /// Booked appointments in booking order, with patient names.
    #[must_use]
    pub fn appointment_views(&self) -> Vec<AppointmentView> {
        self.book
            .iter()
            .map(|a| AppointmentView {
                date: a.date.clone(),
                time: a.time.clone(),
                doctor: a.doctor.clone(),
                patient_id: a.patient_id,
                patient_name: self
                    .patients
                    .get(a.patient_id)
                    .map_or_else(|| UNKNOWN_PATIENT.to_string(), |p| p.name.clone()),
            })
            .collect()
    }

    #[must_use]
    pub fn treatment_report(&self) -> TreatmentReport {
        treatment_report(&self.patients)
    }

    /// Write all patients and appointments to a JSON backup at `path`.
    ///
    /// # Errors
    ///
    /// `RecordsError::EmptyPath` for an empty path, or the write error (an
    /// `ERROR` record is logged).
    pub fn backup(&self, path: &Path) -> Result<BackupResponse, RecordsError> {
        if path.as_os_str().is_empty() {
            return Err(RecordsError::EmptyPath);
        }

        if let Err(error) = backup::write(path, &self.patients, &self.book) {
            self.audit(AuditRecord::new(
                AuditAction::Error,
                format!("Backup failed: {error}"),
            ));
            return Err(error);
        }

        self.audit(AuditRecord::new(
            AuditAction::Backup,
            format!("Backup saved to {}", path.display()),
        ));
        Ok(BackupResponse {
            path: path.display().to_string(),
            patients: self.patients.len(),
            appointments: self.book.len(),
        })
    }

    /// Replace all patients and appointments with the contents of a backup,
    /// and rewrite both store files.
    ///
    /// # Errors
    ///
    /// `RecordsError::EmptyPath`, `BackupMissing`, `BackupCorrupted`, or an
    /// I/O error. Every failure except an empty path logs an `ERROR` record
    /// and leaves the in-memory data unchanged.
    pub fn restore(&mut self, path: &Path) -> Result<BackupResponse, RecordsError> {
        if path.as_os_str().is_empty() {
            return Err(RecordsError::EmptyPath);
        }

        let snapshot = match backup::read(path) {
            Ok(snapshot) => snapshot,
            Err(error) => {
                let message = match &error {
                    RecordsError::BackupMissing(_) | RecordsError::BackupCorrupted { .. } => {
                        error.to_string()
                    }
                    other => format!("Error reading backup {}: {other}", path.display()),
                };
                self.audit(AuditRecord::new(AuditAction::Error, message));
                return Err(error);
            }
        };

        if let Err(error) = self.persist_snapshot(&snapshot) {
            self.audit(AuditRecord::new(
                AuditAction::Error,
                format!("Error restoring backup {}: {error}", path.display()),
            ));
            return Err(error);
        }

        self.patients = snapshot.patients;
        self.book = snapshot.appointments;

        self.audit(AuditRecord::new(
            AuditAction::LoadBackup,
            format!("Data loaded from {}", path.display()),
        ));
        Ok(BackupResponse {
            path: path.display().to_string(),
            patients: self.patients.len(),
            appointments: self.book.len(),
        })
    }

    /// Undo the most recent `SCHEDULE`/`CANCEL` actions and save the book if
    /// anything changed.
    ///
    /// # Errors
    ///
    /// Returns `RecordsError::Audit` if the log exists but cannot be read
    /// (nothing is changed), or the file error if the book cannot be saved.
    /// On a save failure the in-memory book is put back, an `ERROR` record
    /// is logged, and the `ROLLBACK` records already appended stay in the
    /// log.
    pub fn rollback(&mut self) -> Result<RollbackOutcome, RecordsError> {
        let previous = self.book.clone();
        let engine = RollbackEngine::new(&self.audit, self.rollback_window);
        let outcome = engine.run(&mut self.book)?;

        if outcome.applied() == 0 {
            return Ok(outcome);
        }
        if let Err(error) = self.commit_book(previous) {
            self.audit(AuditRecord::new(
                AuditAction::Error,
                format!("Rollback not saved: {error}"),
            ));
            return Err(error);
        }
        Ok(outcome)
    }

    /// Number of `SCHEDULE`/`CANCEL` records one rollback inspects.
    #[must_use]
    pub const fn rollback_window(&self) -> usize {
        self.rollback_window
    }

    /// The most recent `limit` well-formed audit records, newest first.
    ///
    /// # Errors
    ///
    /// Returns `RecordsError::Audit` if the log cannot be read.
    pub fn audit_tail(&self, limit: usize) -> Result<Vec<AuditRecord>, RecordsError> {
        let records = reader::read_records(self.audit.path())?.unwrap_or_default();
        Ok(records.into_iter().rev().take(limit).collect())
    }

    /// Write both stores from a backup. If the appointment file cannot be
    /// written, the patient file is rewritten from the current patients.
    fn persist_snapshot(&self, snapshot: &Snapshot) -> Result<(), RecordsError> {
        snapshot.patients.save(&self.paths.patients)?;
        if let Err(error) = snapshot.appointments.save(&self.paths.appointments) {
            if let Err(revert) = self.patients.save(&self.paths.patients) {
                tracing::warn!(error = %revert, "could not put back patient file after failed restore");
            }
            return Err(error);
        }
        Ok(())
    }

    fn commit_book(&mut self, previous: AppointmentBook) -> Result<(), RecordsError> {
        if let Err(error) = self.book.save(&self.paths.appointments) {
            self.book = previous;
            return Err(error);
        }
        Ok(())
    }

    fn audit(&self, record: AuditRecord) {
        if let Err(error) = self.audit.record(&record) {
            tracing::warn!(%error, action = %record.action, "audit log write failed; continuing");
        }
    }
}
