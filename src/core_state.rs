//! Shared application state between UI transports.
//!
//! `CoreState` is the single object the screens talk to: it owns the
//! store path, the auth gate, and the emergency log, created once at app
//! boot and passed by reference everywhere — no ambient singletons.
//! Lifecycle: `init` loads from the store, `logout` clears the in-memory
//! session.

use std::path::PathBuf;
use std::sync::{RwLock, RwLockReadGuard, RwLockWriteGuard};

use crate::auth::AuthGate;
use crate::db::{self, StoreError};
use crate::dispatch::EmergencyLog;

/// Transport-agnostic application state.
///
/// `RwLock` per concern: most screens only read the session, while
/// login/logout and dispatch updates take the write path.
pub struct CoreState {
    db_path: PathBuf,
    auth: RwLock<AuthGate>,
    emergencies: RwLock<EmergencyLog>,
}

impl CoreState {
    /// Open the store at `db_path` (running migrations if needed) and
    /// load the user directory.
    pub fn init(db_path: PathBuf) -> Result<Self, CoreError> {
        let conn = db::open_database(&db_path)?;
        let auth = AuthGate::load(&conn)?;

        tracing::info!(path = %db_path.display(), "core state initialized");
        Ok(Self {
            db_path,
            auth: RwLock::new(auth),
            emergencies: RwLock::new(EmergencyLog::new()),
        })
    }

    /// Open a store connection. Screens open short-lived connections per
    /// operation rather than sharing one.
    pub fn open_db(&self) -> Result<rusqlite::Connection, CoreError> {
        db::open_database(&self.db_path).map_err(CoreError::Store)
    }

    // ── Auth access ─────────────────────────────────────────

    pub fn read_auth(&self) -> Result<RwLockReadGuard<'_, AuthGate>, CoreError> {
        self.auth.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn write_auth(&self) -> Result<RwLockWriteGuard<'_, AuthGate>, CoreError> {
        self.auth.write().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn is_authenticated(&self) -> bool {
        self.auth
            .read()
            .map(|gate| gate.is_authenticated())
            .unwrap_or(false)
    }

    /// Teardown: drop the in-memory session. The store is untouched.
    pub fn logout(&self) -> Result<(), CoreError> {
        self.write_auth()?.logout();
        tracing::info!("session cleared");
        Ok(())
    }

    // ── Emergency log access ────────────────────────────────

    pub fn read_emergencies(&self) -> Result<RwLockReadGuard<'_, EmergencyLog>, CoreError> {
        self.emergencies.read().map_err(|_| CoreError::LockPoisoned)
    }

    pub fn write_emergencies(&self) -> Result<RwLockWriteGuard<'_, EmergencyLog>, CoreError> {
        self.emergencies
            .write()
            .map_err(|_| CoreError::LockPoisoned)
    }
}

/// Errors from CoreState operations.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Internal lock error")]
    LockPoisoned,
    #[error("Store error: {0}")]
    Store(#[from] StoreError),
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{NewUser, Secret};

    fn state_in(dir: &tempfile::TempDir) -> CoreState {
        CoreState::init(dir.path().join("secours.db")).unwrap()
    }

    #[test]
    fn init_creates_the_store_and_starts_anonymous() {
        let tmp = tempfile::tempdir().unwrap();
        let state = state_in(&tmp);

        assert!(tmp.path().join("secours.db").exists());
        assert!(!state.is_authenticated());
    }

    #[test]
    fn login_logout_lifecycle() {
        let tmp = tempfile::tempdir().unwrap();
        let state = state_in(&tmp);

        assert!(state.write_auth().unwrap().login("user1", "password1"));
        assert!(state.is_authenticated());

        state.logout().unwrap();
        assert!(!state.is_authenticated());
    }

    #[test]
    fn registration_survives_a_restart() {
        let tmp = tempfile::tempdir().unwrap();

        {
            let state = state_in(&tmp);
            let conn = state.open_db().unwrap();
            state
                .write_auth()
                .unwrap()
                .register(
                    &conn,
                    NewUser {
                        username: "rachid".into(),
                        password: Secret::new("s3cret"),
                        phone: "0622222222".into(),
                    },
                )
                .unwrap();
        }

        // Fresh CoreState over the same store path.
        let state = state_in(&tmp);
        assert!(state.write_auth().unwrap().login("rachid", "s3cret"));
    }

    #[test]
    fn emergency_log_is_shared_through_the_state() {
        use crate::dispatch;
        use crate::geo::CASABLANCA;
        use crate::providers;
        use chrono::NaiveDate;
        use rand::rngs::StdRng;
        use rand::SeedableRng;

        let tmp = tempfile::tempdir().unwrap();
        let state = state_in(&tmp);

        let call = dispatch::request_dispatch(
            CASABLANCA,
            &providers::seed_providers(),
            NaiveDate::from_ymd_opt(2026, 5, 1)
                .unwrap()
                .and_hms_opt(12, 0, 0)
                .unwrap(),
            &mut StdRng::seed_from_u64(1),
        )
        .unwrap();

        state.write_emergencies().unwrap().report(call);
        assert_eq!(state.read_emergencies().unwrap().calls().len(), 1);
    }
}
