use std::path::PathBuf;

/// Application-level constants
pub const APP_NAME: &str = "Secours";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when `RUST_LOG` is not set.
pub fn default_log_filter() -> String {
    "info,secours_core=debug".to_string()
}

/// Get the application data directory
/// ~/Secours/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join(APP_NAME)
}

/// Get the path of the local store database
pub fn database_path() -> PathBuf {
    app_data_dir().join("secours.db")
}
