use serde::{Deserialize, Serialize};

/// Integer patient identifier, shared by patient records and appointments.
pub type PatientId = i64;

/// A patient on file.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Patient {
    pub id: PatientId,
    pub name: String,
    pub diagnosis: String,
    pub medications: String,
}
