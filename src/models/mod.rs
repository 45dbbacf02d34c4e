pub mod appointment;
pub mod enums;
pub mod profile;
pub mod provider;
pub mod user;

pub use appointment::{Appointment, AppointmentDraft};
pub use enums::{DispatchStatus, ProviderCategory, ReminderPolicy};
pub use profile::UserProfile;
pub use provider::Provider;
pub use user::{NewUser, Secret, Session, User};
