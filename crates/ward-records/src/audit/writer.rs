//! Audit log writer.
//!
//! Appends [`AuditRecord`] lines to a single log file. The file is opened in
//! append mode, written, and closed on every call; no handle is kept.

use std::fs::OpenOptions;
use std::io::Write;
use std::path::{Path, PathBuf};

use ward_core::entities::AuditRecord;

use crate::error::AuditError;

/// Appends audit records to the log file.
#[derive(Debug, Clone)]
pub struct AuditLog {
    path: PathBuf,
}

impl AuditLog {
    /// Create a writer for the log at `path`.
    ///
    /// Nothing is touched on disk until the first [`Self::record`].
    #[must_use]
    pub const fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// Append one record as a single line.
    ///
    /// # Errors
    ///
    /// Returns `AuditError::Write` if the file cannot be opened or written.
    /// Callers treat this as non-fatal: report it and carry on.
    pub fn record(&self, record: &AuditRecord) -> Result<(), AuditError> {
        let write_err = |source| AuditError::Write {
            path: self.path.clone(),
            source,
        };

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.path)
            .map_err(write_err)?;
        writeln!(file, "{record}").map_err(write_err)?;

        tracing::debug!(action = %record.action, "audit record appended");
        Ok(())
    }

    /// Path of the log file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}
