//! Persistent key-value settings, scoped to the local user profile.
//!
//! A flat string map serialized to `settings.json` under the app data
//! directory. Read-mostly: values are re-read on each `get` and written
//! only on explicit saves, so the screen never observes a half-written
//! file (writes go through a temp file + rename).

use std::collections::BTreeMap;
use std::path::PathBuf;

use crate::config;

/// Well-known settings keys.
pub mod keys {
    /// Base directory where the patient store lives.
    pub const DATA_PATH: &str = "data_path";
    /// Stored login identity, set by the sign-in screen.
    pub const EMAIL: &str = "email";
    pub const PASSWORD: &str = "password";
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("Settings I/O error: {0}")]
    Io(#[from] std::io::Error),
    #[error("Settings serialization error: {0}")]
    Serialize(#[from] serde_json::Error),
}

/// Handle to the on-disk settings file. Cheap to construct; every
/// operation opens the file fresh.
#[derive(Debug, Clone)]
pub struct SettingsStore {
    path: PathBuf,
}

impl SettingsStore {
    pub fn new(path: PathBuf) -> Self {
        Self { path }
    }

    /// The store at the default per-user location.
    pub fn open_default() -> Self {
        Self::new(config::settings_file())
    }

    /// Read a persisted value. A missing, unreadable, or corrupt settings
    /// file reads as "not set", never as an error.
    pub fn get(&self, key: &str) -> Option<String> {
        self.read_all().remove(key)
    }

    /// Write a value, overwriting any prior one. Idempotent.
    pub fn set(&self, key: &str, value: &str) -> Result<(), SettingsError> {
        let mut all = self.read_all();
        all.insert(key.to_string(), value.to_string());
        self.write_all(&all)
    }

    /// The configured patient data directory, if one was ever saved.
    pub fn stored_data_path(&self) -> Option<String> {
        self.get(keys::DATA_PATH)
    }

    pub fn store_data_path(&self, path: &str) -> Result<(), SettingsError> {
        self.set(keys::DATA_PATH, path)
    }

    fn read_all(&self) -> BTreeMap<String, String> {
        std::fs::read_to_string(&self.path)
            .ok()
            .and_then(|raw| serde_json::from_str(&raw).ok())
            .unwrap_or_default()
    }

    fn write_all(&self, all: &BTreeMap<String, String>) -> Result<(), SettingsError> {
        if let Some(parent) = self.path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        let raw = serde_json::to_string_pretty(all)?;
        let tmp = self.path.with_extension("json.tmp");
        std::fs::write(&tmp, raw)?;
        std::fs::rename(&tmp, &self.path)?;
        Ok(())
    }
}
