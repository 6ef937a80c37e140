//! File locations for patient records, appointments, and the audit log.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

fn default_data_dir() -> PathBuf {
    PathBuf::from(".")
}

fn default_patients_file() -> String {
    "patients.csv".to_string()
}

fn default_appointments_file() -> String {
    "appointments.json".to_string()
}

fn default_audit_log_file() -> String {
    "audit.log".to_string()
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct StorageConfig {
    /// Directory the file names below are resolved against.
    #[serde(default = "default_data_dir")]
    pub data_dir: PathBuf,

    /// Patient records (CSV with an `id,name,diagnosis,medications` header).
    #[serde(default = "default_patients_file")]
    pub patients_file: String,

    /// Appointment book (JSON array).
    #[serde(default = "default_appointments_file")]
    pub appointments_file: String,

    /// Pipe-delimited audit log.
    #[serde(default = "default_audit_log_file")]
    pub audit_log_file: String,
}

impl StorageConfig {
    /// Absolute or data-dir-relative path of the patient file.
    #[must_use]
    pub fn patients_path(&self) -> PathBuf {
        self.data_dir.join(&self.patients_file)
    }

    #[must_use]
    pub fn appointments_path(&self) -> PathBuf {
        self.data_dir.join(&self.appointments_file)
    }

    #[must_use]
    pub fn audit_log_path(&self) -> PathBuf {
        self.data_dir.join(&self.audit_log_file)
    }
}

impl Default for StorageConfig {
    fn default() -> Self {
        Self {
            data_dir: default_data_dir(),
            patients_file: default_patients_file(),
            appointments_file: default_appointments_file(),
            audit_log_file: default_audit_log_file(),
        }
    }
}
