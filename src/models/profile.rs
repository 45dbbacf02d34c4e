use serde::{Deserialize, Serialize};

/// Medical profile fields, free text exactly as the profile form holds
/// them. Field validation stays a UI concern.
///
/// Serialized with the mobile client's camelCase keys so existing
/// `userProfile_<username>` blobs keep loading.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UserProfile {
    pub name: String,
    pub birth_date: String,
    pub blood_type: String,
    pub height: String,
    pub weight: String,
    pub allergies: String,
    pub chronic_diseases: String,
    pub medications: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blob_uses_client_keys() {
        let profile = UserProfile {
            name: "Yasmine A.".into(),
            birth_date: "12/04/1991".into(),
            blood_type: "O-".into(),
            ..Default::default()
        };
        let json = serde_json::to_string(&profile).unwrap();
        assert!(json.contains("\"birthDate\":\"12/04/1991\""));
        assert!(json.contains("\"bloodType\":\"O-\""));
        assert!(json.contains("\"chronicDiseases\":\"\""));
    }
}
