//! Record types persisted by Ward.

mod appointment;
mod audit;
mod patient;

pub use appointment::{Appointment, validate_slot};
pub use audit::{AUDIT_FIELD_COUNT, AuditRecord};
pub use patient::{Patient, PatientId};
