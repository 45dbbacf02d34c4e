pub mod appointments; // Appointment book over the blob store
pub mod auth; // Login/signup against the seeded user directory
pub mod catalog; // Static doctor/hospital reference data
pub mod config;
pub mod core_state; // Shared state between UI transports
pub mod db;
pub mod dispatch; // Emergency call log + nearest-provider dispatch
pub mod geo; // Great-circle distance
pub mod models;
pub mod providers; // Provider catalog + category filter
pub mod reminders; // Appointment reminder scheduling
pub mod route; // Synthetic route + ETA estimation

use tracing_subscriber::EnvFilter;

/// Initialize tracing. Call once at app boot, before any other crate API.
///
/// Honors `RUST_LOG` when set, otherwise falls back to the app default.
pub fn init_tracing() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("Secours core starting v{}", config::APP_VERSION);
}
