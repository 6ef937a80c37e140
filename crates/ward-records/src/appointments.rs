//! The appointment book and the store interface the rollback engine needs.

use std::io::ErrorKind;
use std::path::Path;

use ward_core::entities::Appointment;

use crate::error::RecordsError;

/// Membership, append, and exact-match removal over appointments.
///
/// This is everything the rollback engine asks of a store.
pub trait AppointmentStore {
    fn contains(&self, appointment: &Appointment) -> bool;

    /// Append `appointment`. Returns `false` (and changes nothing) when an
    /// identical appointment is already stored.
    fn append(&mut self, appointment: Appointment) -> bool;

    /// Remove the appointment equal to `appointment`. Returns whether one
    /// was removed.
    fn remove(&mut self, appointment: &Appointment) -> bool;
}

/// Ordered, duplicate-free list of appointments, persisted as a JSON array.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AppointmentBook {
    items: Vec<Appointment>,
}

impl AppointmentBook {
    #[must_use]
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Build a book from a list, dropping repeated appointments.
    #[must_use]
    pub fn from_appointments(appointments: impl IntoIterator<Item = Appointment>) -> Self {
        let mut book = Self::new();
        for appointment in appointments {
            book.append(appointment);
        }
        book
    }

    /// Load the book from `path`. A missing file is an empty book.
    ///
    /// # Errors
    ///
    /// Returns `RecordsError` if the file cannot be read or is not a JSON
    /// array of appointments.
    pub fn load(path: &Path) -> Result<Self, RecordsError> {
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(error) if error.kind() == ErrorKind::NotFound => {
                tracing::info!(path = %path.display(), "appointment file not found, starting empty");
                return Ok(Self::new());
            }
            Err(error) => return Err(RecordsError::io(path, error)),
        };

        let items: Vec<Appointment> = serde_json::from_str(&content)?;
        Ok(Self::from_appointments(items))
    }

    /// Rewrite the whole file at `path`.
    ///
    /// # Errors
    ///
    /// Returns `RecordsError::Io` if the file cannot be written.
    pub fn save(&self, path: &Path) -> Result<(), RecordsError> {
        let json = serde_json::to_string_pretty(&self.items)?;
        std::fs::write(path, json).map_err(|e| RecordsError::io(path, e))
    }

    /// Whether another appointment already books this doctor at this date
    /// and time.
    #[must_use]
    pub fn slot_taken(&self, candidate: &Appointment) -> bool {
        self.items.iter().any(|existing| existing.same_slot(candidate))
    }

    pub fn iter(&self) -> impl Iterator<Item = &Appointment> {
        self.items.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    #[must_use]
    pub fn as_slice(&self) -> &[Appointment] {
        &self.items
    }
}

impl AppointmentStore for AppointmentBook {
    fn contains(&self, appointment: &Appointment) -> bool {
        self.items.contains(appointment)
    }

    fn append(&mut self, appointment: Appointment) -> bool {
        if self.contains(&appointment) {
            return false;
        }
        self.items.push(appointment);
        true
    }

    fn remove(&mut self, appointment: &Appointment) -> bool {
        match self.items.iter().position(|existing| existing == appointment) {
            Some(index) => {
                self.items.remove(index);
                true
            }
            None => false,
        }
    }
}
