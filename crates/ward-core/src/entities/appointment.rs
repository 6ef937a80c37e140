use chrono::{NaiveDate, NaiveTime};
use serde::{Deserialize, Serialize};
use std::fmt;

use super::PatientId;
use crate::errors::CoreError;

/// Booking date format (`YYYY-MM-DD`).
const DATE_FORMAT: &str = "%Y-%m-%d";
/// Booking time format (`HH:MM`).
const TIME_FORMAT: &str = "%H:%M";

/// A booked appointment.
///
/// Identity is full-field equality; there is no synthetic identifier. Date
/// and time are kept as the strings they were entered with so that records
/// rebuilt from the audit log compare equal to the originals.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub struct Appointment {
    pub date: String,
    pub time: String,
    pub doctor: String,
    pub patient_id: PatientId,
}

impl Appointment {
    pub fn new(
        date: impl Into<String>,
        time: impl Into<String>,
        doctor: impl Into<String>,
        patient_id: PatientId,
    ) -> Self {
        Self {
            date: date.into(),
            time: time.into(),
            doctor: doctor.into(),
            patient_id,
        }
    }

    /// Whether `other` books the same doctor at the same date and time.
    #[must_use]
    pub fn same_slot(&self, other: &Self) -> bool {
        self.date == other.date && self.time == other.time && self.doctor == other.doctor
    }
}

impl fmt::Display for Appointment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} {} | {} | ID {}",
            self.date, self.time, self.doctor, self.patient_id
        )
    }
}

/// Check that a booking date is `YYYY-MM-DD` and time is `HH:MM`.
///
/// # Errors
///
/// Returns `CoreError::Validation` naming the offending field.
pub fn validate_slot(date: &str, time: &str) -> Result<(), CoreError> {
    NaiveDate::parse_from_str(date, DATE_FORMAT).map_err(|e| {
        CoreError::Validation(format!("invalid date '{date}' (expected YYYY-MM-DD): {e}"))
    })?;
    NaiveTime::parse_from_str(time, TIME_FORMAT).map_err(|e| {
        CoreError::Validation(format!("invalid time '{time}' (expected HH:MM): {e}"))
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn same_slot_ignores_patient() {
        let a = Appointment::new("2024-01-01", "09:00", "Dr.Lee", 5);
        let b = Appointment::new("2024-01-01", "09:00", "Dr.Lee", 7);
        assert!(a.same_slot(&b));
        assert_ne!(a, b);
    }

    #[test]
    fn display_matches_listing_layout() {
        let a = Appointment::new("2024-01-02", "10:00", "Dr.Kim", 7);
        assert_eq!(a.to_string(), "2024-01-02 10:00 | Dr.Kim | ID 7");
    }

    #[rstest]
    #[case("2024-02-29", "23:59")]
    #[case("2025-12-01", "00:00")]
    fn accepts_valid_slots(#[case] date: &str, #[case] time: &str) {
        assert!(validate_slot(date, time).is_ok());
    }

    #[rstest]
    #[case("2023-02-29", "09:00", "date")]
    #[case("01/02/2024", "09:00", "date")]
    #[case("2024-01-01", "25:00", "time")]
    #[case("2024-01-01", "9am", "time")]
    fn rejects_invalid_slots(#[case] date: &str, #[case] time: &str, #[case] field: &str) {
        let err = validate_slot(date, time).unwrap_err();
        assert!(err.to_string().contains(&format!("invalid {field}")));
    }
}
