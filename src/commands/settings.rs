//! Path configuration IPC commands.

use std::sync::Arc;

use tauri::{AppHandle, State};
use tauri_plugin_dialog::DialogExt;

use crate::config;
use crate::state::DirectoryState;

/// The persisted data path, if one was ever saved.
#[tauri::command]
pub fn get_stored_path(state: State<'_, Arc<DirectoryState>>) -> Option<String> {
    state.settings.stored_data_path()
}

/// Save the data path. Also updates the live session so the next load
/// picks it up without re-entering the screen.
#[tauri::command]
pub fn store_path(path: String, state: State<'_, Arc<DirectoryState>>) -> Result<(), String> {
    state
        .settings
        .store_data_path(&path)
        .map_err(|e| e.to_string())?;
    state.set_data_path(&path).map_err(|e| e.to_string())?;
    tracing::info!(path = %path, "Data path saved");
    Ok(())
}

/// The fixed fallback path. Storage is untouched — persisting the reset
/// requires an explicit save.
#[tauri::command]
pub fn reset_stored_path() -> String {
    config::default_data_path().display().to_string()
}

/// Open the OS directory picker. `None` when the user cancels.
#[tauri::command]
pub async fn pick_data_directory(
    app: AppHandle,
    initial: Option<String>,
) -> Result<Option<String>, String> {
    let mut dialog = app.dialog().file();
    if let Some(dir) = initial {
        dialog = dialog.set_directory(dir);
    }

    let (tx, rx) = tokio::sync::oneshot::channel();
    dialog.pick_folder(move |folder| {
        let _ = tx.send(folder);
    });

    let picked = rx.await.map_err(|e| e.to_string())?;
    picked
        .map(|folder| folder.into_path().map(|p| p.display().to_string()))
        .transpose()
        .map_err(|e| e.to_string())
}
