//! Appointment book over the blob store.
//!
//! Appointments are created from drafts, deleted by id, and never edited
//! in place — edits replace the whole record under the same id. After
//! any mutation the caller re-runs `reminders::reschedule_all` with the
//! current list.

use rusqlite::Connection;
use uuid::Uuid;

use crate::db::{repository, StoreError};
use crate::models::{Appointment, AppointmentDraft};

/// The in-memory appointment list, kept sorted by (date, time) and
/// persisted as one blob on every mutation.
pub struct AppointmentBook {
    appointments: Vec<Appointment>,
}

impl AppointmentBook {
    /// Load the book from the store.
    pub fn load(conn: &Connection) -> Result<Self, StoreError> {
        let mut appointments = repository::load_appointments(conn)?;
        sort_appointments(&mut appointments);

        tracing::debug!(count = appointments.len(), "appointment book loaded");
        Ok(Self { appointments })
    }

    /// An empty book (fresh install before any store exists).
    pub fn empty() -> Self {
        Self {
            appointments: Vec::new(),
        }
    }

    /// Create an appointment from a draft: assigns a fresh id, persists,
    /// and returns the stored record.
    pub fn add(
        &mut self,
        conn: &Connection,
        draft: AppointmentDraft,
    ) -> Result<Appointment, StoreError> {
        let appointment = draft.with_id(Uuid::new_v4());
        self.appointments.push(appointment.clone());
        sort_appointments(&mut self.appointments);
        repository::save_appointments(conn, &self.appointments)?;

        tracing::info!(id = %appointment.id, "appointment created");
        Ok(appointment)
    }

    /// Delete by id. Removing an absent id is not an error — the store
    /// is simply rewritten without it.
    pub fn remove(&mut self, conn: &Connection, id: Uuid) -> Result<(), StoreError> {
        self.appointments.retain(|a| a.id != id);
        repository::save_appointments(conn, &self.appointments)
    }

    /// Replace-on-edit: swap the record under `id` for the draft,
    /// keeping the id. Returns the stored record, or `None` when the id
    /// is unknown (nothing is written in that case).
    pub fn replace(
        &mut self,
        conn: &Connection,
        id: Uuid,
        draft: AppointmentDraft,
    ) -> Result<Option<Appointment>, StoreError> {
        let Some(slot) = self.appointments.iter_mut().find(|a| a.id == id) else {
            return Ok(None);
        };

        *slot = draft.with_id(id);
        let replaced = slot.clone();
        sort_appointments(&mut self.appointments);
        repository::save_appointments(conn, &self.appointments)?;

        tracing::info!(id = %id, "appointment replaced");
        Ok(Some(replaced))
    }

    /// The current list, ordered by (date, time).
    pub fn appointments(&self) -> &[Appointment] {
        &self.appointments
    }

    pub fn len(&self) -> usize {
        self.appointments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.appointments.is_empty()
    }
}

fn sort_appointments(appointments: &mut [Appointment]) {
    appointments.sort_by_key(|a| (a.date, a.time));
}
