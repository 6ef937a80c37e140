mod appointment;
mod patient;

pub use appointment::{AppointmentCommands, SlotArgs};
pub use patient::PatientCommands;
