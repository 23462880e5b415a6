//! Patient directory IPC commands.
//!
//! Thin wrappers over `crate::directory`: the frontend owns the "when to
//! recompute" policy and calls down here for the values.

use std::sync::Arc;

use tauri::{AppHandle, State};

use crate::directory::{
    filter, loader, FilteredView, FsStoreReader, PatientCollection, TauriNavigationHost,
};
use crate::state::DirectoryState;

/// (Re)load the patient store for the active session.
///
/// Re-entrant triggers are not deduplicated: overlapping loads race and
/// the last successful one replaces the displayed collection. Failed
/// loads leave the prior collection untouched.
#[tauri::command]
pub async fn load_patients(
    state: State<'_, Arc<DirectoryState>>,
) -> Result<PatientCollection, String> {
    let path = state.data_path().map_err(|e| e.to_string())?;
    let collection = loader::load_patients(path.as_deref(), &FsStoreReader)
        .await
        .map_err(|e| e.to_string())?;

    state
        .replace_patients(collection.clone())
        .map_err(|e| e.to_string())?;
    Ok(collection)
}

/// Recompute the filtered view for the current query.
#[tauri::command]
pub async fn filter_patients(
    query: String,
    state: State<'_, Arc<DirectoryState>>,
) -> Result<FilteredView, String> {
    {
        let mut flow = state.flow.lock().await;
        flow.set_query(&query);
    }
    let patients = state.patients().map_err(|e| e.to_string())?;
    Ok(filter::filter_patients(&patients, &query))
}

/// Open the picker: clears any stale query and returns the current view.
#[tauri::command]
pub async fn open_patient_picker(
    state: State<'_, Arc<DirectoryState>>,
) -> Result<FilteredView, String> {
    let mut flow = state.flow.lock().await;
    flow.begin();
    let patients = state.patients().map_err(|e| e.to_string())?;
    Ok(filter::filter_patients(&patients, flow.query()))
}

/// Hand off the chosen patient to the detail screen. Returns whether the
/// hand-off succeeded; either way the picker is closed.
#[tauri::command]
pub async fn select_patient(
    patient_id: String,
    app: AppHandle,
    state: State<'_, Arc<DirectoryState>>,
) -> Result<bool, String> {
    let host = TauriNavigationHost::new(app);
    let mut flow = state.flow.lock().await;
    Ok(flow.select(&host, &patient_id).await)
}

/// Abandon selection; the picker closes with no side effects.
#[tauri::command]
pub async fn cancel_selection(state: State<'_, Arc<DirectoryState>>) -> Result<(), String> {
    state.flow.lock().await.cancel();
    Ok(())
}
