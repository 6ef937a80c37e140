//! Audit action kinds.
//!
//! Action kinds are written to the audit log in `SCREAMING_SNAKE_CASE`.
//! Kinds this build does not know about are kept verbatim as
//! [`AuditAction::Other`] so that reading an older or foreign log never fails.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Kind of mutation recorded in the audit log.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum AuditAction {
    AddPatient,
    Schedule,
    Cancel,
    Rollback,
    Backup,
    LoadBackup,
    Error,
    Other(String),
}

impl AuditAction {
    /// Return the string representation used in the log file.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::AddPatient => "ADD_PATIENT",
            Self::Schedule => "SCHEDULE",
            Self::Cancel => "CANCEL",
            Self::Rollback => "ROLLBACK",
            Self::Backup => "BACKUP",
            Self::LoadBackup => "LOAD_BACKUP",
            Self::Error => "ERROR",
            Self::Other(raw) => raw,
        }
    }

    /// Whether the rollback engine may undo this action.
    ///
    /// Only appointment insertions and removals have an inverse.
    /// `ROLLBACK` records are never undone themselves.
    #[must_use]
    pub const fn is_undoable(&self) -> bool {
        matches!(self, Self::Schedule | Self::Cancel)
    }
}

impl fmt::Display for AuditAction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for AuditAction {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(match s {
            "ADD_PATIENT" => Self::AddPatient,
            "SCHEDULE" => Self::Schedule,
            "CANCEL" => Self::Cancel,
            "ROLLBACK" => Self::Rollback,
            "BACKUP" => Self::Backup,
            "LOAD_BACKUP" => Self::LoadBackup,
            "ERROR" => Self::Error,
            other => Self::Other(other.to_string()),
        })
    }
}

impl From<String> for AuditAction {
    fn from(value: String) -> Self {
        match value.parse() {
            Ok(action) => action,
            Err(never) => match never {},
        }
    }
}

impl From<AuditAction> for String {
    fn from(value: AuditAction) -> Self {
        value.as_str().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("ADD_PATIENT", AuditAction::AddPatient)]
    #[case("SCHEDULE", AuditAction::Schedule)]
    #[case("CANCEL", AuditAction::Cancel)]
    #[case("ROLLBACK", AuditAction::Rollback)]
    #[case("BACKUP", AuditAction::Backup)]
    #[case("LOAD_BACKUP", AuditAction::LoadBackup)]
    #[case("ERROR", AuditAction::Error)]
    fn known_kinds_parse(#[case] raw: &str, #[case] expected: AuditAction) {
        let parsed: AuditAction = raw.parse().unwrap();
        assert_eq!(parsed, expected);
        assert_eq!(parsed.as_str(), raw);
    }

    #[test]
    fn unknown_kind_is_preserved() {
        let parsed: AuditAction = "DISCHARGE".parse().unwrap();
        assert_eq!(parsed, AuditAction::Other("DISCHARGE".into()));
        assert_eq!(parsed.to_string(), "DISCHARGE");
    }

    #[test]
    fn kinds_are_case_sensitive() {
        let parsed: AuditAction = "schedule".parse().unwrap();
        assert!(!parsed.is_undoable());
    }

    #[test]
    fn only_schedule_and_cancel_are_undoable() {
        assert!(AuditAction::Schedule.is_undoable());
        assert!(AuditAction::Cancel.is_undoable());
        assert!(!AuditAction::Rollback.is_undoable());
        assert!(!AuditAction::Error.is_undoable());
        assert!(!AuditAction::AddPatient.is_undoable());
    }

    #[test]
    fn serializes_as_log_string() {
        let json = serde_json::to_string(&AuditAction::LoadBackup).unwrap();
        assert_eq!(json, "\"LOAD_BACKUP\"");
        let back: AuditAction = serde_json::from_str(&json).unwrap();
        assert_eq!(back, AuditAction::LoadBackup);
    }
}
