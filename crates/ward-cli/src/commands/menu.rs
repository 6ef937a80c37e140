//! Interactive numbered menu over stdin/stdout.

use std::io::{BufRead, Write};
use std::path::Path;

use ward_core::entities::{Appointment, Patient, PatientId};
use ward_core::responses::{RollbackOutcome, StepOutcome};
use ward_records::{RecordsError, WardService};

use crate::context::AppContext;

const TITLE: &str = " Hospital Patient Management System ";

const OPTIONS: [&str; 7] = [
    "1. Add new patient",
    "2. Schedule appointment",
    "3. Cancel appointment",
    "4. View appointments",
    "5. Treatment report (grouped by diagnosis)",
    "6. Backup to JSON",
    "7. Load from backup JSON",
];

/// Handle `ward menu` (and a bare `ward`).
pub fn handle(ctx: &mut AppContext) -> anyhow::Result<()> {
    let stdin = std::io::stdin();
    let stdout = std::io::stdout();
    Menu::new(stdin.lock(), stdout.lock()).run(&mut ctx.service)
}

/// Prompt-driven session. Input ends at `9` or end of input.
pub struct Menu<R, W> {
    input: R,
    out: W,
}

impl<R: BufRead, W: Write> Menu<R, W> {
    pub const fn new(input: R, out: W) -> Self {
        Self { input, out }
    }

    pub fn run(&mut self, service: &mut WardService) -> anyhow::Result<()> {
        loop {
            writeln!(self.out, "{TITLE}")?;
            for option in OPTIONS {
                writeln!(self.out, "{option}")?;
            }
            writeln!(
                self.out,
                "8. Rollback last {} actions",
                service.rollback_window()
            )?;
            writeln!(self.out, "9. Exit")?;

            let Some(choice) = self.prompt("Enter choice: ")? else {
                return Ok(());
            };
            match choice.as_str() {
                "1" => self.add_patient(service)?,
                "2" => self.schedule(service)?,
                "3" => self.cancel(service)?,
                "4" => self.view_appointments(service)?,
                "5" => self.treatment_report(service)?,
                "6" => self.backup(service)?,
                "7" => self.restore(service)?,
                "8" => self.rollback(service)?,
                "9" => {
                    writeln!(
                        self.out,
                        "Thank you for using the Hospital Patient Management System."
                    )?;
                    return Ok(());
                }
                _ => writeln!(self.out, "Invalid choice.\n")?,
            }
        }
    }

    /// Print `label`, then read one trimmed line. `None` at end of input.
    fn prompt(&mut self, label: &str) -> anyhow::Result<Option<String>> {
        write!(self.out, "{label}")?;
        self.out.flush()?;

        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim().to_string()))
    }

    fn prompt_text(&mut self, label: &str) -> anyhow::Result<String> {
        Ok(self.prompt(label)?.unwrap_or_default())
    }

    fn prompt_id(&mut self, label: &str) -> anyhow::Result<Option<PatientId>> {
        Ok(self
            .prompt(label)?
            .and_then(|raw| raw.parse::<PatientId>().ok()))
    }

    fn prompt_slot(&mut self) -> anyhow::Result<(String, String, String)> {
        let date = self.prompt_text("Enter date (YYYY-MM-DD): ")?;
        let time = self.prompt_text("Enter time (HH:MM): ")?;
        let doctor = self.prompt_text("Enter doctor name: ")?;
        Ok((date, time, doctor))
    }

    fn add_patient(&mut self, service: &mut WardService) -> anyhow::Result<()> {
        let Some(id) = self.prompt_id("Enter new patient ID: ")? else {
            writeln!(self.out, "Invalid ID. Must be a number.")?;
            return Ok(());
        };
        if service.patients().contains(id) {
            writeln!(self.out, "This patient ID already exists.")?;
            return Ok(());
        }

        let patient = Patient {
            id,
            name: self.prompt_text("Enter patient name: ")?,
            diagnosis: self.prompt_text("Enter diagnosis: ")?,
            medications: self.prompt_text("Enter medications: ")?,
        };
        match service.add_patient(patient) {
            Ok(added) => writeln!(
                self.out,
                "New patient added: ID {}, Name {}",
                added.id, added.name
            )?,
            Err(error) => writeln!(self.out, "Failed to add patient: {error}")?,
        }
        Ok(())
    }

    fn schedule(&mut self, service: &mut WardService) -> anyhow::Result<()> {
        let Some(id) = self.prompt_id("Enter patient ID: ")? else {
            writeln!(self.out, "Invalid patient ID.")?;
            return Ok(());
        };
        if let Err(error) = service.require_patient(id) {
            writeln!(self.out, "{error}")?;
            return Ok(());
        }

        let (date, time, doctor) = self.prompt_slot()?;
        match service.schedule(id, &date, &time, &doctor) {
            Ok(booked) => writeln!(
                self.out,
                "Appointment scheduled for ID {} on {} at {} with {}",
                booked.patient_id, booked.date, booked.time, booked.doctor
            )?,
            Err(error) => writeln!(self.out, "{error}")?,
        }
        Ok(())
    }

    fn cancel(&mut self, service: &mut WardService) -> anyhow::Result<()> {
        let Some(id) = self.prompt_id("Enter patient ID: ")? else {
            writeln!(self.out, "Invalid patient ID.")?;
            return Ok(());
        };

        let (date, time, doctor) = self.prompt_slot()?;
        match service.cancel(Appointment::new(date, time, doctor, id)) {
            Ok(canceled) => writeln!(
                self.out,
                "Appointment canceled for ID {} on {} at {} with {}",
                canceled.patient_id, canceled.date, canceled.time, canceled.doctor
            )?,
            Err(error) => writeln!(self.out, "{error}")?,
        }
        Ok(())
    }

    fn view_appointments(&mut self, service: &WardService) -> anyhow::Result<()> {
        writeln!(self.out, "\n--- Current Appointments ---")?;
        let views = service.appointment_views();
        if views.is_empty() {
            writeln!(self.out, "No appointments.")?;
        }
        for view in views {
            writeln!(
                self.out,
                "{} {} | {} | ID {} ({})",
                view.date, view.time, view.doctor, view.patient_id, view.patient_name
            )?;
        }
        Ok(())
    }

    fn treatment_report(&mut self, service: &WardService) -> anyhow::Result<()> {
        writeln!(self.out, "\n=== Treatment Report (by diagnosis) ===")?;
        for group in service.treatment_report().groups {
            writeln!(self.out, "\nDiagnosis: {}", group.diagnosis)?;
            for entry in group.patients {
                writeln!(self.out, "  ID: {}, Name: {}", entry.id, entry.name)?;
            }
        }
        Ok(())
    }

    fn backup(&mut self, service: &WardService) -> anyhow::Result<()> {
        let filename = self.prompt_text("Enter backup filename (e.g. backup.json): ")?;
        match service.backup(Path::new(&filename)) {
            Ok(saved) => writeln!(self.out, "Backup saved to {}", saved.path)?,
            Err(error @ RecordsError::EmptyPath) => writeln!(self.out, "{error}")?,
            Err(error) => writeln!(self.out, "Backup failed: {error}")?,
        }
        Ok(())
    }

    fn restore(&mut self, service: &mut WardService) -> anyhow::Result<()> {
        let filename = self.prompt_text("Enter backup filename to load: ")?;
        match service.restore(Path::new(&filename)) {
            Ok(restored) => writeln!(self.out, "Data loaded from {}", restored.path)?,
            Err(error) => writeln!(self.out, "{error}")?,
        }
        Ok(())
    }

    fn rollback(&mut self, service: &mut WardService) -> anyhow::Result<()> {
        let log_exists = service.audit_log().path().exists();
        let report = match service.rollback() {
            Ok(RollbackOutcome::Completed(report)) => report,
            Ok(RollbackOutcome::NothingToRollBack) if log_exists => {
                writeln!(self.out, "No SCHEDULE/CANCEL actions to rollback.")?;
                return Ok(());
            }
            Ok(RollbackOutcome::NothingToRollBack) => {
                writeln!(self.out, "No log file found. Nothing to rollback.")?;
                return Ok(());
            }
            Err(error) => {
                writeln!(self.out, "{error}")?;
                return Ok(());
            }
        };

        writeln!(self.out, "Rolling back last {} actions:", report.collected)?;
        for step in &report.steps {
            let Some(appointment) = &step.appointment else {
                continue;
            };
            if matches!(step.outcome, StepOutcome::Removed | StepOutcome::Reinserted) {
                writeln!(
                    self.out,
                    "  Rolled back {}: {appointment}",
                    step.source.action
                )?;
            }
        }
        writeln!(self.out, "Rollback complete.\n")?;
        Ok(())
    }
}
