use std::path::{Path, PathBuf};

/// Application-level constants
pub const APP_NAME: &str = "MediView";
pub const APP_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Default tracing filter when RUST_LOG is not set.
pub fn default_log_filter() -> &'static str {
    "info,mediview_lib=debug"
}

/// Get the application data directory
/// ~/Mediview/ on all platforms (user-visible, per design requirement)
pub fn app_data_dir() -> PathBuf {
    let home = dirs::home_dir().expect("Cannot determine home directory");
    home.join("Mediview")
}

/// Get the persistent settings file (key-value store)
pub fn settings_file() -> PathBuf {
    app_data_dir().join("settings.json")
}

/// Fixed fallback data directory, used when no path was ever saved.
/// Returned to the caller as-is; persisting it requires an explicit save.
pub fn default_data_path() -> PathBuf {
    app_data_dir().join("server")
}

/// Resolve the patient store file under a configured base directory.
pub fn patient_store_path(base: &Path) -> PathBuf {
    base.join("db").join("patients.json")
}
