//! Pipe-delimited audit log writer and reader.
//!
//! The audit log is append-only: every mutating action adds one line and
//! nothing ever rewrites earlier lines. The rollback engine reads it back to
//! find the appointment changes to undo.

pub mod reader;
pub mod writer;

pub use writer::AuditLog;
