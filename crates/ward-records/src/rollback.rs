//! Undo the most recent appointment changes by replaying the audit log.
//!
//! The engine scans the log last-line-first, collects up to `window`
//! `SCHEDULE`/`CANCEL` records, and applies the inverse of each to the
//! appointment store, most recent first:
//!
//! ```text
//! SCHEDULE  →  remove the appointment, if present
//! CANCEL    →  re-insert the appointment, if absent
//! ```
//!
//! Every applied undo appends a `ROLLBACK` record. Earlier lines are never
//! touched, and `ROLLBACK` records are not themselves candidates, so running
//! the engine again against the same state changes nothing.

use ward_core::entities::AuditRecord;
use ward_core::enums::AuditAction;
use ward_core::responses::{
    RollbackOutcome, RollbackReport, RollbackStep, SkipReason, StepOutcome,
};

use crate::appointments::AppointmentStore;
use crate::audit::{AuditLog, reader};
use crate::error::AuditError;

/// Default number of records one rollback inspects.
pub const DEFAULT_WINDOW: usize = 3;

const UNDO_SCHEDULE_MESSAGE: &str = "Undo scheduled appointment";
const UNDO_CANCEL_MESSAGE: &str = "Undo canceled appointment";

/// Replays the audit log backwards against an appointment store.
pub struct RollbackEngine<'a> {
    log: &'a AuditLog,
    window: usize,
}

impl<'a> RollbackEngine<'a> {
    #[must_use]
    pub const fn new(log: &'a AuditLog, window: usize) -> Self {
        Self { log, window }
    }

    /// Undo the last `window` appointment changes recorded in the log.
    ///
    /// Returns [`RollbackOutcome::NothingToRollBack`] when the log file does
    /// not exist or holds no `SCHEDULE`/`CANCEL` records. Individual
    /// candidates whose patient ID does not parse, or whose target state is
    /// already in place, are skipped and reported in the step list.
    ///
    /// # Errors
    ///
    /// Returns `AuditError::Read` if the log exists but cannot be read. The
    /// store is not touched in that case.
    pub fn run<S>(&self, store: &mut S) -> Result<RollbackOutcome, AuditError>
    where
        S: AppointmentStore + ?Sized,
    {
        let Some(lines) = reader::read_lines(self.log.path())? else {
            tracing::debug!(path = %self.log.path().display(), "no audit log, nothing to roll back");
            return Ok(RollbackOutcome::NothingToRollBack);
        };

        let candidates = collect_candidates(&lines, self.window);
        if candidates.is_empty() {
            return Ok(RollbackOutcome::NothingToRollBack);
        }

        let mut report = RollbackReport {
            collected: candidates.len(),
            steps: Vec::with_capacity(candidates.len()),
        };
        for source in candidates {
            report.steps.push(self.undo(source, store));
        }

        tracing::debug!(
            collected = report.collected,
            applied = report.applied(),
            skipped = report.skipped(),
            "rollback complete"
        );
        Ok(RollbackOutcome::Completed(report))
    }

    fn undo<S>(&self, source: AuditRecord, store: &mut S) -> RollbackStep
    where
        S: AppointmentStore + ?Sized,
    {
        let Some(appointment) = source.appointment() else {
            tracing::debug!(patient_id = %source.patient_id, "skipping rollback candidate with non-integer patient id");
            return RollbackStep {
                source,
                appointment: None,
                outcome: StepOutcome::Skipped(SkipReason::InvalidPatientId),
                logged: false,
            };
        };

        // `append` refuses an appointment that is already present, so both
        // arms only report success when the store actually changed.
        let applied = match source.action {
            AuditAction::Schedule => store
                .remove(&appointment)
                .then_some((StepOutcome::Removed, UNDO_SCHEDULE_MESSAGE)),
            AuditAction::Cancel => store
                .append(appointment.clone())
                .then_some((StepOutcome::Reinserted, UNDO_CANCEL_MESSAGE)),
            _ => None,
        };
        let Some((outcome, message)) = applied else {
            return RollbackStep {
                source,
                appointment: Some(appointment),
                outcome: StepOutcome::Skipped(SkipReason::AlreadyApplied),
                logged: false,
            };
        };

        let record = AuditRecord {
            action: AuditAction::Rollback,
            date: source.date.clone(),
            time: source.time.clone(),
            doctor: source.doctor.clone(),
            patient_id: source.patient_id.clone(),
            message: message.to_string(),
        };
        let logged = match self.log.record(&record) {
            Ok(()) => true,
            Err(error) => {
                tracing::warn!(%error, "failed to append ROLLBACK record");
                false
            }
        };

        RollbackStep {
            source,
            appointment: Some(appointment),
            outcome,
            logged,
        }
    }
}

/// Pick the last `window` `SCHEDULE`/`CANCEL` records, most recent first.
///
/// Lines with fewer than six fields are skipped.
#[must_use]
pub fn collect_candidates(lines: &[String], window: usize) -> Vec<AuditRecord> {
    lines
        .iter()
        .rev()
        .filter_map(|line| AuditRecord::parse_line(line))
        .filter(|record| record.action.is_undoable())
        .take(window)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::appointments::AppointmentBook;
    use pretty_assertions::assert_eq;
    use ward_core::entities::Appointment;

    fn lines(raw: &[&str]) -> Vec<String> {
        raw.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn candidates_are_most_recent_first_and_capped() {
        let log = lines(&[
            "SCHEDULE|2024-01-01|09:00|A|1|m",
            "SCHEDULE|2024-01-01|09:00|B|2|m",
            "ROLLBACK|2024-01-01|09:00|B|2|m",
            "CANCEL|2024-01-01|09:00|C|3|m",
            "ERROR|||||m",
            "SCHEDULE|2024-01-01|09:00|D|4|m",
        ]);

        let picked = collect_candidates(&log, 3);
        let doctors: Vec<&str> = picked.iter().map(|r| r.doctor.as_str()).collect();
        assert_eq!(doctors, vec!["D", "C", "B"]);
    }

    #[test]
    fn candidates_skip_malformed_lines() {
        let log = lines(&[
            "SCHEDULE|2024-01-01|09:00|A|1|m",
            "SCHEDULE|onlythreefields",
            "CANCEL|2024-01-01",
        ]);
        let picked = collect_candidates(&log, 3);
        assert_eq!(picked.len(), 1);
        assert_eq!(picked[0].doctor, "A");
    }

    #[test]
    fn skipped_step_is_not_logged() {
        let dir = tempfile::tempdir().unwrap();
        let log = AuditLog::new(dir.path().join("audit.log"));
        let engine = RollbackEngine::new(&log, DEFAULT_WINDOW);
        let mut book = AppointmentBook::new();

        let source = AuditRecord::parse_line("SCHEDULE|2024-01-01|09:00|A|1|m").unwrap();
        let step = engine.undo(source, &mut book);

        assert_eq!(step.outcome, StepOutcome::Skipped(SkipReason::AlreadyApplied));
        assert!(!step.logged);
        assert!(!log.path().exists());
    }

    #[test]
    fn unwritable_log_still_mutates_store() {
        let dir = tempfile::tempdir().unwrap();
        let log = AuditLog::new(dir.path().join("missing-dir").join("audit.log"));
        let engine = RollbackEngine::new(&log, DEFAULT_WINDOW);
        let mut book =
            AppointmentBook::from_appointments([Appointment::new("2024-01-01", "09:00", "A", 1)]);

        let source = AuditRecord::parse_line("SCHEDULE|2024-01-01|09:00|A|1|m").unwrap();
        let step = engine.undo(source, &mut book);

        assert_eq!(step.outcome, StepOutcome::Removed);
        assert!(!step.logged);
        assert!(book.is_empty());
    }
}
