//! # ward-records
//!
//! Patient and appointment stores, the pipe-delimited audit log, and the
//! rollback engine that replays it.
//!
//! - [`patients::PatientStore`]: patients keyed by ID, persisted as CSV.
//! - [`appointments::AppointmentBook`]: the ordered appointment list,
//!   persisted as JSON, behind the [`appointments::AppointmentStore`] trait.
//! - [`audit::AuditLog`]: append-only audit log writer; [`audit::reader`]
//!   reads it back.
//! - [`rollback::RollbackEngine`]: undoes the latest `SCHEDULE`/`CANCEL`
//!   records.
//! - [`backup`]: JSON snapshots of both stores.
//! - [`service::WardService`]: the operations above wired together.

pub mod appointments;
pub mod audit;
pub mod backup;
pub mod error;
pub mod patients;
pub mod report;
pub mod rollback;
pub mod service;

pub use error::{AuditError, RecordsError};
pub use service::WardService;
