use ward_core::entities::{Appointment, AuditRecord, Patient};
use ward_core::responses::{
    AppointmentView, BackupResponse, RollbackOutcome, SkipReason, StepOutcome, TreatmentReport,
};

/// A response that knows how to lay itself out as rows.
pub trait Tabular {
    fn headers(&self) -> Vec<&'static str>;
    fn rows(&self) -> Vec<Vec<String>>;
}

/// One table row per item, for list responses.
pub trait TableRow {
    const HEADERS: &'static [&'static str];
    fn cells(&self) -> Vec<String>;
}

impl<T: TableRow> Tabular for [T] {
    fn headers(&self) -> Vec<&'static str> {
        T::HEADERS.to_vec()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.iter().map(TableRow::cells).collect()
    }
}

impl<T: TableRow> Tabular for Vec<T> {
    fn headers(&self) -> Vec<&'static str> {
        self.as_slice().headers()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.as_slice().rows()
    }
}

impl TableRow for Patient {
    const HEADERS: &'static [&'static str] = &["id", "name", "diagnosis", "medications"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.id.to_string(),
            self.name.clone(),
            self.diagnosis.clone(),
            self.medications.clone(),
        ]
    }
}

impl TableRow for Appointment {
    const HEADERS: &'static [&'static str] = &["date", "time", "doctor", "patient_id"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.time.clone(),
            self.doctor.clone(),
            self.patient_id.to_string(),
        ]
    }
}

impl TableRow for AppointmentView {
    const HEADERS: &'static [&'static str] = &["date", "time", "doctor", "patient_id", "name"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.date.clone(),
            self.time.clone(),
            self.doctor.clone(),
            self.patient_id.to_string(),
            self.patient_name.clone(),
        ]
    }
}

impl TableRow for AuditRecord {
    const HEADERS: &'static [&'static str] =
        &["action", "date", "time", "doctor", "patient_id", "message"];

    fn cells(&self) -> Vec<String> {
        vec![
            self.action.to_string(),
            self.date.clone(),
            self.time.clone(),
            self.doctor.clone(),
            self.patient_id.clone(),
            self.message.clone(),
        ]
    }
}

impl Tabular for Patient {
    fn headers(&self) -> Vec<&'static str> {
        Self::HEADERS.to_vec()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![self.cells()]
    }
}

impl Tabular for Appointment {
    fn headers(&self) -> Vec<&'static str> {
        Self::HEADERS.to_vec()
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![self.cells()]
    }
}

impl Tabular for TreatmentReport {
    fn headers(&self) -> Vec<&'static str> {
        vec!["diagnosis", "id", "name"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        self.groups
            .iter()
            .flat_map(|group| {
                group.patients.iter().map(|entry| {
                    vec![
                        group.diagnosis.clone(),
                        entry.id.to_string(),
                        entry.name.clone(),
                    ]
                })
            })
            .collect()
    }
}

impl Tabular for BackupResponse {
    fn headers(&self) -> Vec<&'static str> {
        vec!["key", "value"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        vec![
            vec!["path".into(), self.path.clone()],
            vec!["patients".into(), self.patients.to_string()],
            vec!["appointments".into(), self.appointments.to_string()],
        ]
    }
}

impl Tabular for RollbackOutcome {
    fn headers(&self) -> Vec<&'static str> {
        vec!["action", "date", "time", "doctor", "patient_id", "outcome"]
    }

    fn rows(&self) -> Vec<Vec<String>> {
        let Self::Completed(report) = self else {
            return Vec::new();
        };
        report
            .steps
            .iter()
            .map(|step| {
                let source = &step.source;
                vec![
                    source.action.to_string(),
                    source.date.clone(),
                    source.time.clone(),
                    source.doctor.clone(),
                    source.patient_id.clone(),
                    outcome_label(step.outcome).to_string(),
                ]
            })
            .collect()
    }
}

const fn outcome_label(outcome: StepOutcome) -> &'static str {
    match outcome {
        StepOutcome::Removed => "removed",
        StepOutcome::Reinserted => "reinserted",
        StepOutcome::Skipped(SkipReason::AlreadyApplied) => "skipped: already applied",
        StepOutcome::Skipped(SkipReason::InvalidPatientId) => "skipped: invalid patient id",
    }
}

/// Render any `Tabular` response as an aligned text table.
pub fn render_table<T: Tabular + ?Sized>(value: &T) -> String {
    let rows = value.rows();
    if rows.is_empty() {
        return String::from("(no rows)");
    }
    render_rows(&value.headers(), &rows)
}

/// Render an aligned table for string rows. Numeric cells are right-aligned.
#[must_use]
pub fn render_rows(headers: &[&str], rows: &[Vec<String>]) -> String {
    let widths: Vec<usize> = headers
        .iter()
        .enumerate()
        .map(|(index, header)| {
            rows.iter()
                .filter_map(|row| row.get(index))
                .map(|cell| cell.chars().count())
                .max()
                .unwrap_or(0)
                .max(header.len())
        })
        .collect();

    let header_line = headers
        .iter()
        .zip(&widths)
        .map(|(header, width)| pad(header, *width, false))
        .collect::<Vec<_>>()
        .join("  ");
    let divider = "-".repeat(header_line.chars().count());

    let mut lines = Vec::with_capacity(rows.len() + 2);
    lines.push(header_line.trim_end().to_string());
    lines.push(divider);
    for row in rows {
        let line = widths
            .iter()
            .enumerate()
            .map(|(index, width)| {
                let cell = row.get(index).map_or("-", String::as_str);
                pad(cell, *width, looks_numeric(cell))
            })
            .collect::<Vec<_>>()
            .join("  ");
        lines.push(line.trim_end().to_string());
    }
    lines.join("\n")
}

fn pad(value: &str, width: usize, right_align: bool) -> String {
    let fill = " ".repeat(width.saturating_sub(value.chars().count()));
    if right_align {
        format!("{fill}{value}")
    } else {
        format!("{value}{fill}")
    }
}

fn looks_numeric(value: &str) -> bool {
    value.parse::<i64>().is_ok()
}
