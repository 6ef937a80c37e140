//! WardService scenarios spanning several operations and reopenings.

use std::path::Path;

use pretty_assertions::assert_eq;
use ward_config::WardConfig;
use ward_core::entities::Patient;
use ward_core::enums::AuditAction;
use ward_core::responses::RollbackOutcome;
use ward_records::patients::PatientStore;
use ward_records::{RecordsError, WardService};

fn open(dir: &Path) -> WardService {
    let mut config = WardConfig::default();
    config.storage.data_dir = dir.to_path_buf();
    WardService::open(&config).expect("service opens")
}

fn block_appointment_file(dir: &Path) {
    let path = dir.join("appointments.json");
    if path.is_file() {
        std::fs::remove_file(&path).unwrap();
    }
    std::fs::create_dir(&path).unwrap();
}

fn patient(id: i64, name: &str, diagnosis: &str) -> Patient {
    Patient {
        id,
        name: name.to_string(),
        diagnosis: diagnosis.to_string(),
        medications: String::new(),
    }
}

#[test]
fn schedule_cancel_reschedule_then_roll_back() {
    let dir = tempfile::tempdir().unwrap();
    let mut svc = open(dir.path());
    svc.add_patient(patient(5, "Ana", "Flu")).unwrap();
    svc.add_patient(patient(7, "Ben", "Asthma")).unwrap();

    let a = svc.schedule(5, "2024-01-01", "09:00", "Dr.Lee").unwrap();
    let b = svc.schedule(7, "2024-01-02", "10:00", "Dr.Kim").unwrap();
    svc.cancel(a.clone()).unwrap();
    let c = svc.schedule(5, "2024-01-03", "11:00", "Dr.Lee").unwrap();
    assert_eq!(svc.appointments().as_slice(), &[b, c]);

    // Undo SCHEDULE c, CANCEL a, SCHEDULE b, in that order.
    let outcome = svc.rollback().unwrap();
    assert_eq!(outcome.applied(), 3);
    assert_eq!(svc.appointments().as_slice(), &[a.clone()]);

    // Persisted, so a fresh process sees the rolled-back book.
    let reopened = open(dir.path());
    assert_eq!(reopened.appointments().as_slice(), &[a]);

    // The log only grew, and the same tail is now fully applied.
    let again = svc.rollback().unwrap();
    assert_eq!(again.applied(), 0);
    let rollbacks = svc
        .audit_tail(usize::MAX)
        .unwrap()
        .into_iter()
        .filter(|r| r.action == AuditAction::Rollback)
        .count();
    assert_eq!(rollbacks, 3);
}

#[test]
fn rollback_without_log_reports_nothing() {
    let dir = tempfile::tempdir().unwrap();
    let mut svc = open(dir.path());
    assert_eq!(svc.rollback().unwrap(), RollbackOutcome::NothingToRollBack);
}

#[test]
fn rollback_window_comes_from_config() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = WardConfig::default();
    config.storage.data_dir = dir.path().to_path_buf();
    config.rollback.window = 1;

    let mut svc = WardService::open(&config).unwrap();
    svc.add_patient(patient(5, "Ana", "Flu")).unwrap();
    let first = svc.schedule(5, "2024-01-01", "09:00", "Dr.Lee").unwrap();
    svc.schedule(5, "2024-01-02", "09:00", "Dr.Lee").unwrap();

    assert_eq!(svc.rollback().unwrap().applied(), 1);
    assert_eq!(svc.appointments().as_slice(), &[first]);
}

#[test]
fn backup_and_restore_replace_both_stores() {
    let dir = tempfile::tempdir().unwrap();
    let backup_path = dir.path().join("backup.json");

    let mut svc = open(dir.path());
    svc.add_patient(patient(1, "Ana", "Flu")).unwrap();
    let appt = svc.schedule(1, "2024-01-01", "09:00", "Dr.Lee").unwrap();
    let saved = svc.backup(&backup_path).unwrap();
    assert_eq!((saved.patients, saved.appointments), (1, 1));

    svc.add_patient(patient(2, "Ben", "Asthma")).unwrap();
    svc.cancel(appt.clone()).unwrap();

    let restored = svc.restore(&backup_path).unwrap();
    assert_eq!((restored.patients, restored.appointments), (1, 1));
    assert!(!svc.patients().contains(2));
    assert_eq!(svc.appointments().as_slice(), &[appt.clone()]);

    let reopened = open(dir.path());
    assert!(!reopened.patients().contains(2));
    assert_eq!(reopened.appointments().as_slice(), &[appt]);

    let actions: Vec<AuditAction> = svc
        .audit_tail(2)
        .unwrap()
        .into_iter()
        .map(|r| r.action)
        .collect();
    assert_eq!(actions, vec![AuditAction::LoadBackup, AuditAction::Cancel]);
}

#[test]
fn failed_restore_keeps_data_and_logs_error() {
    let dir = tempfile::tempdir().unwrap();
    let mut svc = open(dir.path());
    svc.add_patient(patient(1, "Ana", "Flu")).unwrap();

    let corrupted = dir.path().join("corrupted.json");
    std::fs::write(&corrupted, "{").unwrap();
    assert!(matches!(
        svc.restore(&corrupted),
        Err(RecordsError::BackupCorrupted { .. })
    ));

    let missing = dir.path().join("missing.json");
    assert!(matches!(
        svc.restore(&missing),
        Err(RecordsError::BackupMissing(_))
    ));

    assert!(matches!(
        svc.restore(Path::new("")),
        Err(RecordsError::EmptyPath)
    ));

    assert!(svc.patients().contains(1));
    let tail = svc.audit_tail(2).unwrap();
    assert_eq!(tail[0].action, AuditAction::Error);
    assert!(tail[0].message.ends_with("does not exist."));
    assert!(tail[1].message.ends_with("is corrupted. Data not changed."));
}

#[test]
fn failed_restore_leaves_patient_file_alone() {
    let dir = tempfile::tempdir().unwrap();
    let backup_path = dir.path().join("backup.json");

    let mut other = open(&dir.path().join("other"));
    other.add_patient(patient(2, "Ben", "Flu")).unwrap();
    other.backup(&backup_path).unwrap();

    let mut svc = open(dir.path());
    svc.add_patient(patient(1, "Ana", "Flu")).unwrap();
    block_appointment_file(dir.path());

    assert!(svc.restore(&backup_path).is_err());

    let on_disk = PatientStore::load(&dir.path().join("patients.csv")).unwrap();
    let ids: Vec<i64> = on_disk.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1]);
    assert!(svc.patients().contains(1));
    assert!(!svc.patients().contains(2));
    assert_eq!(svc.audit_tail(1).unwrap()[0].action, AuditAction::Error);
}

#[test]
fn rollback_save_failure_keeps_book() {
    let dir = tempfile::tempdir().unwrap();
    let mut svc = open(dir.path());
    svc.add_patient(patient(1, "Ana", "Flu")).unwrap();
    let appt = svc.schedule(1, "2024-01-01", "09:00", "Dr.Lee").unwrap();
    block_appointment_file(dir.path());

    assert!(svc.rollback().is_err());

    assert_eq!(svc.appointments().as_slice(), &[appt]);
    let tail = svc.audit_tail(2).unwrap();
    assert_eq!(tail[0].action, AuditAction::Error);
    assert!(tail[0].message.starts_with("Rollback not saved"));
    assert_eq!(tail[1].action, AuditAction::Rollback);
}

#[test]
fn unwritable_audit_log_does_not_fail_operations() {
    let dir = tempfile::tempdir().unwrap();
    let mut config = WardConfig::default();
    config.storage.data_dir = dir.path().to_path_buf();
    config.storage.audit_log_file = "no-such-dir/audit.log".to_string();

    let mut svc = WardService::open(&config).unwrap();
    svc.add_patient(patient(1, "Ana", "Flu")).unwrap();
    let appt = svc.schedule(1, "2024-01-01", "09:00", "Dr.Lee").unwrap();

    assert_eq!(svc.appointments().as_slice(), &[appt]);
    assert!(svc.audit_tail(10).unwrap().is_empty());
    assert_eq!(svc.rollback().unwrap(), RollbackOutcome::NothingToRollBack);
}

#[test]
fn report_groups_patients_on_file() {
    let dir = tempfile::tempdir().unwrap();
    let mut svc = open(dir.path());
    svc.add_patient(patient(2, "Ben", "Flu")).unwrap();
    svc.add_patient(patient(1, "Ana", "Flu")).unwrap();

    let report = svc.treatment_report();
    assert_eq!(report.groups.len(), 1);
    let ids: Vec<i64> = report.groups[0].patients.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2]);

    assert!(svc.appointment_views().is_empty());
}
