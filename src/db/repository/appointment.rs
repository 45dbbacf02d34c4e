use rusqlite::Connection;

use super::kv;
use crate::db::StoreError;
use crate::models::Appointment;

/// Blob key holding the full appointment list.
pub const APPOINTMENTS_KEY: &str = "appointments";

/// Load all appointments. An absent blob is an empty list.
pub fn load_appointments(conn: &Connection) -> Result<Vec<Appointment>, StoreError> {
    match kv::get_blob(conn, APPOINTMENTS_KEY)? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Vec::new()),
    }
}

/// Persist the full appointment list as one blob.
pub fn save_appointments(conn: &Connection, appointments: &[Appointment]) -> Result<(), StoreError> {
    let json = serde_json::to_string(appointments)?;
    kv::set_blob(conn, APPOINTMENTS_KEY, &json)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::sqlite::open_memory_database;
    use crate::models::{AppointmentDraft, ReminderPolicy};
    use chrono::{NaiveDate, NaiveTime};
    use uuid::Uuid;

    fn sample() -> Appointment {
        AppointmentDraft {
            date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
            time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            title: "Consultation cardiologie".into(),
            description: "Contrôle annuel".into(),
            doctor_ref: Some("d1".into()),
            hospital_ref: Some("h1".into()),
            type_tag: "consultation".into(),
            reminder_policy: ReminderPolicy::TwoHours,
        }
        .with_id(Uuid::new_v4())
    }

    #[test]
    fn empty_store_yields_empty_list() {
        let conn = open_memory_database().unwrap();
        assert!(load_appointments(&conn).unwrap().is_empty());
    }

    #[test]
    fn save_and_load_round_trip() {
        let conn = open_memory_database().unwrap();
        let appt = sample();
        save_appointments(&conn, &[appt.clone()]).unwrap();

        let loaded = load_appointments(&conn).unwrap();
        assert_eq!(loaded.len(), 1);
        assert_eq!(loaded[0].id, appt.id);
        assert_eq!(loaded[0].title, "Consultation cardiologie");
        assert_eq!(loaded[0].reminder_policy, ReminderPolicy::TwoHours);
    }

    #[test]
    fn corrupt_blob_surfaces_serialization_error() {
        let conn = open_memory_database().unwrap();
        kv::set_blob(&conn, APPOINTMENTS_KEY, "not json").unwrap();
        assert!(matches!(
            load_appointments(&conn),
            Err(StoreError::Serialization(_))
        ));
    }
}
