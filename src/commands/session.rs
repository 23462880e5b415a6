//! Screen session IPC commands.
//!
//! `begin_screen_session` is the screen-entry gate: it builds the
//! explicit session context from stored credentials, or redirects the
//! user back to sign-in when there are none.

use std::sync::Arc;

use tauri::{AppHandle, State};

use crate::directory::{NavigationHost, TauriNavigationHost};
use crate::session::ScreenSession;
use crate::state::DirectoryState;

/// Route of the sign-in screen.
const LOGIN_ROUTE: &str = "/";

/// Enter the directory screen.
#[tauri::command]
pub async fn begin_screen_session(
    app: AppHandle,
    state: State<'_, Arc<DirectoryState>>,
) -> Result<ScreenSession, String> {
    match ScreenSession::begin(&state.settings) {
        Ok(session) => {
            state
                .set_session(session.clone())
                .map_err(|e| e.to_string())?;
            tracing::info!(email = %session.email, "Screen session started");
            Ok(session)
        }
        Err(e) => {
            let host = TauriNavigationHost::new(app);
            if let Err(nav) = host.navigate_to(LOGIN_ROUTE).await {
                tracing::warn!(error = %nav, "Redirect to sign-in failed");
            }
            Err(e.to_string())
        }
    }
}

/// Leave the directory screen: tears down the session and its collection.
#[tauri::command]
pub fn end_screen_session(state: State<'_, Arc<DirectoryState>>) -> Result<(), String> {
    state.clear_session().map_err(|e| e.to_string())
}
