use serde::{Deserialize, Serialize};
use std::fmt;

use super::{Appointment, PatientId};
use crate::enums::AuditAction;

/// Number of `|`-separated fields in an audit line.
pub const AUDIT_FIELD_COUNT: usize = 6;

/// One line of the audit log.
///
/// Line layout: `action|date|time|doctor|patient_id|message`. The message is
/// last and is not escaped, so everything after the fifth `|` belongs to it.
/// `patient_id` stays a raw string: it is empty for records that concern no
/// patient and may hold whatever the user typed for failed operations.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct AuditRecord {
    pub action: AuditAction,
    pub date: String,
    pub time: String,
    pub doctor: String,
    pub patient_id: String,
    pub message: String,
}

impl AuditRecord {
    /// A record with only an action and a message; slot fields are empty.
    pub fn new(action: AuditAction, message: impl Into<String>) -> Self {
        Self {
            action,
            date: String::new(),
            time: String::new(),
            doctor: String::new(),
            patient_id: String::new(),
            message: message.into(),
        }
    }

    /// A record describing the given appointment.
    pub fn for_appointment(
        action: AuditAction,
        appointment: &Appointment,
        message: impl Into<String>,
    ) -> Self {
        Self {
            action,
            date: appointment.date.clone(),
            time: appointment.time.clone(),
            doctor: appointment.doctor.clone(),
            patient_id: appointment.patient_id.to_string(),
            message: message.into(),
        }
    }

    /// Set the patient field.
    #[must_use]
    pub fn with_patient(mut self, patient_id: PatientId) -> Self {
        self.patient_id = patient_id.to_string();
        self
    }

    /// Parse one log line.
    ///
    /// Surrounding whitespace is trimmed. Returns `None` for lines with
    /// fewer than [`AUDIT_FIELD_COUNT`] fields.
    #[must_use]
    pub fn parse_line(line: &str) -> Option<Self> {
        let mut parts = line.trim().splitn(AUDIT_FIELD_COUNT, '|');
        let action = parts.next()?;
        let date = parts.next()?;
        let time = parts.next()?;
        let doctor = parts.next()?;
        let patient_id = parts.next()?;
        let message = parts.next()?;

        Some(Self {
            action: action.to_string().into(),
            date: date.to_string(),
            time: time.to_string(),
            doctor: doctor.to_string(),
            patient_id: patient_id.to_string(),
            message: message.to_string(),
        })
    }

    /// Rebuild the appointment this record describes.
    ///
    /// Returns `None` when `patient_id` is not an integer.
    #[must_use]
    pub fn appointment(&self) -> Option<Appointment> {
        let patient_id = self.patient_id.trim().parse::<PatientId>().ok()?;
        Some(Appointment::new(
            self.date.clone(),
            self.time.clone(),
            self.doctor.clone(),
            patient_id,
        ))
    }
}

/// Formats the record as a log line, without the trailing newline.
impl fmt::Display for AuditRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}|{}|{}|{}|{}|{}",
            self.action, self.date, self.time, self.doctor, self.patient_id, self.message
        )
    }
}
