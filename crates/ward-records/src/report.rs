//! Treatment report: patients grouped by diagnosis.

use std::collections::BTreeMap;

use ward_core::responses::{DiagnosisGroup, ReportEntry, TreatmentReport};

use crate::patients::PatientStore;

/// Label used for patients with an empty diagnosis.
pub const UNKNOWN_DIAGNOSIS: &str = "Unknown";

/// Group patients by diagnosis. Groups are sorted by diagnosis, patients
/// within a group by ID.
#[must_use]
pub fn treatment_report(patients: &PatientStore) -> TreatmentReport {
    let mut by_diagnosis: BTreeMap<&str, Vec<ReportEntry>> = BTreeMap::new();

    for patient in patients.iter() {
        let diagnosis = match patient.diagnosis.as_str() {
            "" => UNKNOWN_DIAGNOSIS,
            other => other,
        };
        by_diagnosis.entry(diagnosis).or_default().push(ReportEntry {
            id: patient.id,
            name: patient.name.clone(),
        });
    }

    TreatmentReport {
        groups: by_diagnosis
            .into_iter()
            .map(|(diagnosis, patients)| DiagnosisGroup {
                diagnosis: diagnosis.to_string(),
                patients,
            })
            .collect(),
    }
}
