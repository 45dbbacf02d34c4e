use rusqlite::Connection;

use super::kv;
use crate::db::StoreError;
use crate::models::User;

/// Blob key holding the registered-user list.
pub const REGISTERED_USERS_KEY: &str = "registeredUsers";

/// Load the persisted registered users (raw — seed merging happens in
/// `auth::AuthGate::load`). An absent blob is an empty list.
pub fn load_registered_users(conn: &Connection) -> Result<Vec<User>, StoreError> {
    match kv::get_blob(conn, REGISTERED_USERS_KEY)? {
        Some(json) => Ok(serde_json::from_str(&json)?),
        None => Ok(Vec::new()),
    }
}

/// Persist the full registered-user list as one blob.
pub fn save_registered_users(conn: &Connection, users: &[User]) -> Result<(), StoreError> {
    let json = serde_json::to_string(users)?;
    kv::set_blob(conn, REGISTERED_USERS_KEY, &json)
}
