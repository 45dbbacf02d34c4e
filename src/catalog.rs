//! Static doctor/hospital reference data for the scheduling UI.
//!
//! Appointment records reference these entries by id, but referential
//! integrity is not guaranteed — a lookup miss is a normal outcome, and
//! the caller decides what placeholder label to show.

/// A doctor the scheduling UI can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Doctor {
    pub id: &'static str,
    pub name: &'static str,
    pub specialty: &'static str,
}

/// A hospital the scheduling UI can pick.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Hospital {
    pub id: &'static str,
    pub name: &'static str,
    pub city: &'static str,
}

pub const DOCTORS: &[Doctor] = &[
    Doctor { id: "d1", name: "Dr. Amina Benali", specialty: "Cardiologue" },
    Doctor { id: "d2", name: "Dr. Youssef El Fassi", specialty: "Généraliste" },
    Doctor { id: "d3", name: "Dr. Salma Idrissi", specialty: "Pédiatre" },
    Doctor { id: "d4", name: "Dr. Karim Tazi", specialty: "Dermatologue" },
];

pub const HOSPITALS: &[Hospital] = &[
    Hospital { id: "h1", name: "CHU Ibn Rochd", city: "Casablanca" },
    Hospital { id: "h2", name: "Hôpital Cheikh Zaïd", city: "Rabat" },
    Hospital { id: "h3", name: "Clinique Atlas", city: "Casablanca" },
];

/// Look up a doctor by id.
pub fn find_doctor(id: &str) -> Option<&'static Doctor> {
    DOCTORS.iter().find(|d| d.id == id)
}

/// Look up a hospital by id.
pub fn find_hospital(id: &str) -> Option<&'static Hospital> {
    HOSPITALS.iter().find(|h| h.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn find_doctor_hit_and_miss() {
        assert_eq!(find_doctor("d1").unwrap().name, "Dr. Amina Benali");
        assert!(find_doctor("d99").is_none());
    }

    #[test]
    fn find_hospital_hit_and_miss() {
        assert_eq!(find_hospital("h2").unwrap().city, "Rabat");
        assert!(find_hospital("").is_none());
    }

    #[test]
    fn caller_supplies_the_fallback_label() {
        // The lookup itself never fabricates a placeholder.
        let label = find_doctor("d99")
            .map(|d| d.name)
            .unwrap_or("Médecin non spécifié");
        assert_eq!(label, "Médecin non spécifié");
    }

    #[test]
    fn catalog_ids_are_unique() {
        let mut ids: Vec<&str> = DOCTORS.iter().map(|d| d.id).collect();
        ids.sort_unstable();
        ids.dedup();
        assert_eq!(ids.len(), DOCTORS.len());
    }
}
