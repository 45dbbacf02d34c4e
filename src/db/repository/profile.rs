use rusqlite::Connection;

use super::kv;
use crate::db::StoreError;
use crate::models::UserProfile;

/// Blob key for a user's medical profile.
pub fn profile_key(username: &str) -> String {
    format!("userProfile_{username}")
}

/// Load the medical profile for a user, if one was ever saved.
pub fn load_profile(conn: &Connection, username: &str) -> Result<Option<UserProfile>, StoreError> {
    match kv::get_blob(conn, &profile_key(username))? {
        Some(json) => Ok(Some(serde_json::from_str(&json)?)),
        None => Ok(None),
    }
}

/// Persist the medical profile for a user (upsert).
pub fn save_profile(
    conn: &Connection,
    username: &str,
    profile: &UserProfile,
) -> Result<(), StoreError> {
    let json = serde_json::to_string(profile)?;
    kv::set_blob(conn, &profile_key(username), &json)
}
