use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::enums::ReminderPolicy;

/// A scheduled appointment. Never edited in place — edits go through
/// replace-on-edit in the appointment book.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Appointment {
    pub id: Uuid,
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub title: String,
    pub description: String,
    /// References into the static catalogs. Referential integrity is NOT
    /// guaranteed; resolve with `catalog::find_*` and supply a fallback.
    pub doctor_ref: Option<String>,
    pub hospital_ref: Option<String>,
    pub type_tag: String,
    pub reminder_policy: ReminderPolicy,
}

impl Appointment {
    /// The moment the appointment starts.
    pub fn starts_at(&self) -> NaiveDateTime {
        self.date.and_time(self.time)
    }
}

/// Appointment fields as entered in the scheduling UI, before an id is
/// assigned.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AppointmentDraft {
    pub date: NaiveDate,
    pub time: NaiveTime,
    pub title: String,
    pub description: String,
    pub doctor_ref: Option<String>,
    pub hospital_ref: Option<String>,
    pub type_tag: String,
    pub reminder_policy: ReminderPolicy,
}

impl AppointmentDraft {
    /// Materialize the draft under the given id.
    pub fn with_id(self, id: Uuid) -> Appointment {
        Appointment {
            id,
            date: self.date,
            time: self.time,
            title: self.title,
            description: self.description,
            doctor_ref: self.doctor_ref,
            hospital_ref: self.hospital_ref,
            type_tag: self.type_tag,
            reminder_policy: self.reminder_policy,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_at_combines_date_and_time() {
        let appt = Appointment {
            id: Uuid::new_v4(),
            date: NaiveDate::from_ymd_opt(2026, 3, 15).unwrap(),
            time: NaiveTime::from_hms_opt(14, 30, 0).unwrap(),
            title: "Consultation".into(),
            description: String::new(),
            doctor_ref: None,
            hospital_ref: None,
            type_tag: "consultation".into(),
            reminder_policy: ReminderPolicy::TwoHours,
        };

        let expected = NaiveDate::from_ymd_opt(2026, 3, 15)
            .unwrap()
            .and_hms_opt(14, 30, 0)
            .unwrap();
        assert_eq!(appt.starts_at(), expected);
    }
}
