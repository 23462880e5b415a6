pub mod commands;
pub mod config;
pub mod directory; // Patient directory: load, filter, selection hand-off
pub mod models;
pub mod session; // Screen-entry context (auth gate + configured path)
pub mod settings; // Persistent key-value store
pub mod state;

use std::sync::Arc;
use tracing_subscriber::EnvFilter;

#[cfg_attr(mobile, tauri::mobile_entry_point)]
pub fn run() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new(config::default_log_filter())),
        )
        .init();

    tracing::info!("MediView starting v{}", config::APP_VERSION);

    tauri::Builder::default()
        .plugin(tauri_plugin_dialog::init())
        .manage(Arc::new(state::DirectoryState::new()))
        .invoke_handler(tauri::generate_handler![
            commands::health_check,
            commands::session::begin_screen_session,
            commands::session::end_screen_session,
            commands::settings::get_stored_path,
            commands::settings::store_path,
            commands::settings::reset_stored_path,
            commands::settings::pick_data_directory,
            commands::directory::load_patients,
            commands::directory::filter_patients,
            commands::directory::open_patient_picker,
            commands::directory::select_patient,
            commands::directory::cancel_selection,
        ])
        .run(tauri::generate_context!())
        .expect("error while running MediView");
}
