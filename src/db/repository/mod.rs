//! Repository layer — typed accessors over the key-value blob store.
//!
//! Each logical collection is persisted as one JSON text blob under a
//! fixed key, matching the mobile client's storage layout. All public
//! functions are re-exported here.

pub mod appointment;
pub mod kv;
pub mod profile;
pub mod user;

pub use appointment::*;
pub use kv::*;
pub use profile::*;
pub use user::*;
