//! Audit log reader.

use std::io::ErrorKind;
use std::path::Path;

use ward_core::entities::AuditRecord;

use crate::error::AuditError;

/// Read every line of the log, oldest first.
///
/// Returns `Ok(None)` when the file does not exist.
///
/// # Errors
///
/// Returns `AuditError::Read` for any other I/O failure, including content
/// that is not valid UTF-8.
pub fn read_lines(path: &Path) -> Result<Option<Vec<String>>, AuditError> {
    match std::fs::read_to_string(path) {
        Ok(content) => Ok(Some(content.lines().map(str::to_string).collect())),
        Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
        Err(source) => Err(AuditError::Read {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Read all well-formed records, oldest first. Malformed lines are dropped.
///
/// # Errors
///
/// Same as [`read_lines`].
pub fn read_records(path: &Path) -> Result<Option<Vec<AuditRecord>>, AuditError> {
    Ok(read_lines(path)?.map(|lines| {
        lines
            .iter()
            .filter_map(|line| AuditRecord::parse_line(line))
            .collect()
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use ward_core::enums::AuditAction;

    #[test]
    fn missing_file_is_none() {
        let dir = tempfile::tempdir().unwrap();
        assert!(read_lines(&dir.path().join("nope.log")).unwrap().is_none());
        assert!(read_records(&dir.path().join("nope.log")).unwrap().is_none());
    }

    #[test]
    fn directory_is_a_read_error() {
        let dir = tempfile::tempdir().unwrap();
        let err = read_lines(dir.path()).unwrap_err();
        assert!(matches!(err, AuditError::Read { .. }));
    }

    #[test]
    fn records_skip_malformed_lines() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("audit.log");
        std::fs::write(
            &path,
            "SCHEDULE|2024-01-01|09:00|Dr.Lee|5|msg\nSCHEDULE|onlythreefields\n\nROLLBACK|2024-01-01|09:00|Dr.Lee|5|undo\n",
        )
        .unwrap();

        let records = read_records(&path).unwrap().unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].action, AuditAction::Schedule);
        assert_eq!(records[1].action, AuditAction::Rollback);
    }
}
