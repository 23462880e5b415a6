//! Shared application state managed by Tauri.
//!
//! `DirectoryState` is wrapped in `Arc` at startup and handed to every
//! IPC command. `RwLock` lets the read-heavy paths (filtering, listing)
//! run concurrently; writes happen on session changes and successful
//! loads. The selection flow sits in a tokio mutex because the hand-off
//! holds it across awaits.

use std::sync::{RwLock, RwLockReadGuard};

use crate::directory::{PatientCollection, SelectionFlow};
use crate::session::ScreenSession;
use crate::settings::SettingsStore;

/// Errors from DirectoryState operations.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("No active screen session")]
    NoActiveSession,
    #[error("Internal lock error")]
    LockPoisoned,
}

pub struct DirectoryState {
    /// Active screen session. `None` between screen exit and entry.
    session: RwLock<Option<ScreenSession>>,
    /// Loaded directory; lives and dies with the session. Replaced
    /// wholesale on successful loads — overlapping loads race and the
    /// last write wins.
    patients: RwLock<PatientCollection>,
    /// Picker state machine; locked across the hand-off's awaits.
    pub flow: tokio::sync::Mutex<SelectionFlow>,
    /// Persistent key-value store (path config, credentials).
    pub settings: SettingsStore,
}

impl DirectoryState {
    pub fn new() -> Self {
        Self::with_settings(SettingsStore::open_default())
    }

    pub fn with_settings(settings: SettingsStore) -> Self {
        Self {
            session: RwLock::new(None),
            patients: RwLock::new(PatientCollection::default()),
            flow: tokio::sync::Mutex::new(SelectionFlow::new()),
            settings,
        }
    }

    // ── Session lifecycle ───────────────────────────────────

    pub fn read_session(
        &self,
    ) -> Result<RwLockReadGuard<'_, Option<ScreenSession>>, StateError> {
        self.session.read().map_err(|_| StateError::LockPoisoned)
    }

    pub fn set_session(&self, session: ScreenSession) -> Result<(), StateError> {
        let mut guard = self.session.write().map_err(|_| StateError::LockPoisoned)?;
        *guard = Some(session);
        Ok(())
    }

    /// Screen exit: drop the session and the collection it owned.
    pub fn clear_session(&self) -> Result<(), StateError> {
        {
            let mut guard = self.session.write().map_err(|_| StateError::LockPoisoned)?;
            *guard = None;
        }
        let mut patients = self.patients.write().map_err(|_| StateError::LockPoisoned)?;
        *patients = PatientCollection::default();
        Ok(())
    }

    pub fn is_active(&self) -> bool {
        self.session
            .read()
            .map(|guard| guard.is_some())
            .unwrap_or(false)
    }

    /// The active session's configured data path.
    pub fn data_path(&self) -> Result<Option<String>, StateError> {
        let guard = self.session.read().map_err(|_| StateError::LockPoisoned)?;
        let session = guard.as_ref().ok_or(StateError::NoActiveSession)?;
        Ok(session.data_path.clone())
    }

    /// Keep the live session in step with an explicit path save.
    pub fn set_data_path(&self, path: &str) -> Result<(), StateError> {
        let mut guard = self.session.write().map_err(|_| StateError::LockPoisoned)?;
        if let Some(session) = guard.as_mut() {
            session.data_path = Some(path.to_string());
        }
        Ok(())
    }

    // ── Loaded directory ────────────────────────────────────

    pub fn patients(
        &self,
    ) -> Result<RwLockReadGuard<'_, PatientCollection>, StateError> {
        self.patients.read().map_err(|_| StateError::LockPoisoned)
    }

    pub fn replace_patients(&self, collection: PatientCollection) -> Result<(), StateError> {
        let mut guard = self.patients.write().map_err(|_| StateError::LockPoisoned)?;
        *guard = collection;
        Ok(())
    }
}

impl Default for DirectoryState {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Patient;
    use tempfile::TempDir;

    fn temp_state() -> (TempDir, DirectoryState) {
        let dir = TempDir::new().unwrap();
        let settings = SettingsStore::new(dir.path().join("settings.json"));
        (dir, DirectoryState::with_settings(settings))
    }

    fn session(path: Option<&str>) -> ScreenSession {
        ScreenSession {
            email: "ann@clinic.test".into(),
            authenticated: true,
            data_path: path.map(str::to_string),
        }
    }

    #[test]
    fn new_state_has_no_session() {
        let (_dir, state) = temp_state();
        assert!(!state.is_active());
        assert!(state.read_session().unwrap().is_none());
    }

    #[test]
    fn data_path_without_session_is_an_error() {
        let (_dir, state) = temp_state();
        assert!(matches!(
            state.data_path(),
            Err(StateError::NoActiveSession)
        ));
    }

    #[test]
    fn set_session_exposes_its_path() {
        let (_dir, state) = temp_state();
        state.set_session(session(Some("/srv/mediview"))).unwrap();
        assert!(state.is_active());
        assert_eq!(state.data_path().unwrap().as_deref(), Some("/srv/mediview"));
    }

    #[test]
    fn set_data_path_updates_live_session() {
        let (_dir, state) = temp_state();
        state.set_session(session(None)).unwrap();
        assert_eq!(state.data_path().unwrap(), None);

        state.set_data_path("/srv/new").unwrap();
        assert_eq!(state.data_path().unwrap().as_deref(), Some("/srv/new"));
    }

    #[test]
    fn set_data_path_without_session_is_a_noop() {
        let (_dir, state) = temp_state();
        state.set_data_path("/srv/new").unwrap();
        assert!(!state.is_active());
    }

    #[test]
    fn replace_patients_swaps_wholesale() {
        let (_dir, state) = temp_state();
        let collection = PatientCollection {
            patients: vec![Patient {
                pid: Some("P1".into()),
                ..Default::default()
            }],
            unreadable: 1,
        };
        state.replace_patients(collection).unwrap();

        let guard = state.patients().unwrap();
        assert_eq!(guard.patients.len(), 1);
        assert_eq!(guard.unreadable, 1);
    }

    #[test]
    fn clear_session_drops_the_collection_too() {
        let (_dir, state) = temp_state();
        state.set_session(session(Some("/srv/mediview"))).unwrap();
        state
            .replace_patients(PatientCollection {
                patients: vec![Patient::default()],
                unreadable: 0,
            })
            .unwrap();

        state.clear_session().unwrap();
        assert!(!state.is_active());
        assert!(state.patients().unwrap().patients.is_empty());
    }

    #[test]
    fn clear_session_on_empty_is_safe() {
        let (_dir, state) = temp_state();
        assert!(state.clear_session().is_ok());
        assert!(!state.is_active());
    }
}
