//! Response types returned by the records service and printed by `ward`.
//!
//! These structs define the shape of JSON output for commands like
//! `ward appointment list`, `ward report`, `ward backup`, and `ward rollback`.

use serde::{Deserialize, Serialize};

use crate::entities::{Appointment, AuditRecord, PatientId};

/// One row of `ward appointment list`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AppointmentView {
    pub date: String,
    pub time: String,
    pub doctor: String,
    pub patient_id: PatientId,
    /// Patient name, or `Unknown` when the patient is not on file.
    pub patient_name: String,
}

/// A patient listed under a diagnosis in the treatment report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ReportEntry {
    pub id: PatientId,
    pub name: String,
}

/// Patients sharing one diagnosis.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DiagnosisGroup {
    pub diagnosis: String,
    pub patients: Vec<ReportEntry>,
}

/// Response from `ward report`.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct TreatmentReport {
    pub groups: Vec<DiagnosisGroup>,
}

/// Response from `ward backup` and `ward restore`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct BackupResponse {
    pub path: String,
    pub patients: usize,
    pub appointments: usize,
}

/// Why a rollback candidate was left alone.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkipReason {
    /// The book already matches the state before the logged action.
    AlreadyApplied,
    /// The logged patient ID is not an integer.
    InvalidPatientId,
}

/// What the rollback engine did with one candidate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "result", content = "reason")]
pub enum StepOutcome {
    /// A logged `SCHEDULE` was undone by removing the appointment.
    Removed,
    /// A logged `CANCEL` was undone by re-inserting the appointment.
    Reinserted,
    Skipped(SkipReason),
}

/// One candidate examined by the rollback engine.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollbackStep {
    /// The `SCHEDULE` or `CANCEL` record being undone.
    pub source: AuditRecord,
    /// The rebuilt appointment, absent when the patient ID did not parse.
    pub appointment: Option<Appointment>,
    pub outcome: StepOutcome,
    /// Whether the `ROLLBACK` record for this step reached the log.
    pub logged: bool,
}

/// Summary of a completed rollback run.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct RollbackReport {
    /// Candidates collected from the log tail, most recent first.
    pub collected: usize,
    pub steps: Vec<RollbackStep>,
}

impl RollbackReport {
    /// Number of steps that changed the appointment book.
    #[must_use]
    pub fn applied(&self) -> usize {
        self.steps
            .iter()
            .filter(|step| !matches!(step.outcome, StepOutcome::Skipped(_)))
            .count()
    }

    /// Number of steps that were skipped.
    #[must_use]
    pub fn skipped(&self) -> usize {
        self.steps.len() - self.applied()
    }
}

/// Result of `ward rollback`.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case", tag = "status", content = "report")]
pub enum RollbackOutcome {
    /// The log is missing or holds no `SCHEDULE`/`CANCEL` records.
    NothingToRollBack,
    Completed(RollbackReport),
}

impl RollbackOutcome {
    /// Number of appointment book mutations performed.
    #[must_use]
    pub fn applied(&self) -> usize {
        match self {
            Self::NothingToRollBack => 0,
            Self::Completed(report) => report.applied(),
        }
    }
}
