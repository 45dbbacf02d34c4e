//! Login/signup against the seeded user directory.
//!
//! The directory starts from a fixed seed list and grows through
//! registration; it never shrinks, and seed entries can neither be
//! removed nor shadowed. Credential policy (length, complexity) is a
//! caller concern — this gate only checks exact matches.

use rusqlite::Connection;
use thiserror::Error;

use crate::db::{repository, StoreError};
use crate::models::{NewUser, Secret, Session, User};

/// The fixed, non-deletable initial accounts.
pub fn seed_users() -> Vec<User> {
    vec![
        User {
            username: "user1".into(),
            password: Secret::new("password1"),
            phone: "1234567890".into(),
        },
        User {
            username: "user2".into(),
            password: Secret::new("password2"),
            phone: "0987654321".into(),
        },
    ]
}

/// Errors from gate operations.
#[derive(Debug, Error)]
pub enum AuthError {
    #[error("username already taken: {0}")]
    UsernameTaken(String),
    #[error("store error: {0}")]
    Store(#[from] StoreError),
}

/// Authentication gate: registered directory + current session.
///
/// One explicit instance per app, created by [`AuthGate::load`] and
/// passed to whoever needs it — no ambient singleton.
pub struct AuthGate {
    registered: Vec<User>,
    session: Option<Session>,
}

impl AuthGate {
    /// A gate holding only the seed directory (no store behind it).
    pub fn seeded() -> Self {
        Self {
            registered: seed_users(),
            session: None,
        }
    }

    /// Load the directory: seed users first, then persisted users that
    /// do not collide with an already-known username.
    pub fn load(conn: &Connection) -> Result<Self, StoreError> {
        let mut registered = seed_users();
        for stored in repository::load_registered_users(conn)? {
            if !registered.iter().any(|u| u.username == stored.username) {
                registered.push(stored);
            }
        }

        tracing::debug!(count = registered.len(), "user directory loaded");
        Ok(Self {
            registered,
            session: None,
        })
    }

    /// Attempt a login. On success the gate becomes authenticated and
    /// exposes a password-stripped [`Session`]; on failure it stays
    /// anonymous.
    pub fn login(&mut self, username: &str, password: &str) -> bool {
        let found = self
            .registered
            .iter()
            .find(|u| u.username == username && u.password.matches(password));

        match found {
            Some(user) => {
                self.session = Some(Session {
                    username: user.username.clone(),
                    phone: user.phone.clone(),
                    display_name: None,
                });
                tracing::info!(username, "login succeeded");
                true
            }
            None => {
                tracing::info!(username, "login failed");
                false
            }
        }
    }

    /// Register a new account and persist the directory. The auth state
    /// is left unchanged — the caller still logs in explicitly (the
    /// signup screen chooses to auto-login).
    pub fn register(&mut self, conn: &Connection, candidate: NewUser) -> Result<(), AuthError> {
        if self
            .registered
            .iter()
            .any(|u| u.username == candidate.username)
        {
            return Err(AuthError::UsernameTaken(candidate.username));
        }

        self.registered.push(User {
            username: candidate.username,
            password: candidate.password,
            phone: candidate.phone,
        });
        repository::save_registered_users(conn, &self.registered)?;

        tracing::info!("user registered");
        Ok(())
    }

    /// Drop the session unconditionally.
    pub fn logout(&mut self) {
        self.session = None;
    }

    pub fn is_authenticated(&self) -> bool {
        self.session.is_some()
    }

    /// The password-stripped projection of the logged-in user.
    pub fn session(&self) -> Option<&Session> {
        self.session.as_ref()
    }

    /// Patch the display name on the in-memory session projection (the
    /// profile editor sets it from the saved full name). No-op while
    /// anonymous.
    pub fn update_display_name(&mut self, display_name: impl Into<String>) {
        if let Some(session) = self.session.as_mut() {
            session.display_name = Some(display_name.into());
        }
    }

    /// Usernames currently in the directory, seed entries first.
    pub fn registered_usernames(&self) -> Vec<&str> {
        self.registered.iter().map(|u| u.username.as_str()).collect()
    }
}
