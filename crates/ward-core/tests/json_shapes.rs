//! JSON shapes printed by `ward --format json`.

use pretty_assertions::assert_eq;
use serde_json::json;
use ward_core::entities::{Appointment, AuditRecord};
use ward_core::enums::AuditAction;
use ward_core::responses::{
    RollbackOutcome, RollbackReport, RollbackStep, SkipReason, StepOutcome,
};

#[test]
fn nothing_to_roll_back_has_no_report() {
    let value = serde_json::to_value(RollbackOutcome::NothingToRollBack).unwrap();
    assert_eq!(value, json!({ "status": "nothing_to_roll_back" }));
}

#[test]
fn completed_rollback_nests_steps() {
    let appointment = Appointment::new("2024-01-01", "09:00", "Dr.Lee", 5);
    let source = AuditRecord::for_appointment(AuditAction::Schedule, &appointment, "booked");
    let outcome = RollbackOutcome::Completed(RollbackReport {
        collected: 2,
        steps: vec![
            RollbackStep {
                source: source.clone(),
                appointment: Some(appointment),
                outcome: StepOutcome::Removed,
                logged: true,
            },
            RollbackStep {
                source,
                appointment: None,
                outcome: StepOutcome::Skipped(SkipReason::InvalidPatientId),
                logged: false,
            },
        ],
    });

    let value = serde_json::to_value(&outcome).unwrap();

    assert_eq!(value["status"], "completed");
    assert_eq!(value["report"]["collected"], 2);
    let steps = &value["report"]["steps"];
    assert_eq!(steps[0]["source"]["action"], "SCHEDULE");
    assert_eq!(steps[0]["appointment"]["patient_id"], 5);
    assert_eq!(steps[0]["outcome"], json!({ "result": "removed" }));
    assert_eq!(
        steps[1]["outcome"],
        json!({ "result": "skipped", "reason": "invalid_patient_id" })
    );
    assert_eq!(steps[1]["appointment"], serde_json::Value::Null);
}

#[test]
fn unknown_actions_survive_json() {
    let record = AuditRecord::parse_line("TRANSFER|||||moved ward").unwrap();
    let value = serde_json::to_value(&record).unwrap();
    assert_eq!(value["action"], "TRANSFER");

    let back: AuditRecord = serde_json::from_value(value).unwrap();
    assert_eq!(back.action, AuditAction::Other("TRANSFER".into()));
    assert_eq!(back.to_string(), "TRANSFER|||||moved ward");
}
