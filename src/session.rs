//! Screen session context.
//!
//! Created at screen entry, dropped at screen exit. Owns everything the
//! directory screen needs from persistent storage — the signed-in
//! identity and the configured data path — so the rest of the module
//! never does ambient settings lookups.

use serde::Serialize;

use crate::settings::{keys, SettingsStore};

#[derive(Debug, thiserror::Error)]
pub enum SessionError {
    /// No stored credentials; the caller redirects to the sign-in route.
    #[error("Not authenticated")]
    NotAuthenticated,
}

#[derive(Debug, Clone, Serialize)]
pub struct ScreenSession {
    pub email: String,
    pub authenticated: bool,
    /// Configured patient data directory, read once at screen entry.
    /// `None` until the user saves one.
    pub data_path: Option<String>,
}

impl ScreenSession {
    /// Gate on stored credentials and capture the configured path.
    pub fn begin(settings: &SettingsStore) -> Result<ScreenSession, SessionError> {
        let email = settings.get(keys::EMAIL);
        let password = settings.get(keys::PASSWORD);

        match (email, password) {
            (Some(email), Some(password)) if !email.is_empty() && !password.is_empty() => {
                Ok(ScreenSession {
                    email,
                    authenticated: true,
                    data_path: settings.stored_data_path(),
                })
            }
            _ => Err(SessionError::NotAuthenticated),
        }
    }
}
