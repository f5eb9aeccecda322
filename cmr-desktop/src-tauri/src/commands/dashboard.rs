use tauri::State;

use cmr_core::clients::ClientRecord;
use cmr_core::dashboard::{self, StatCard};
use cmr_core::files::FileRecord;

use crate::app::AppState;

/// How many rows the recent-files card shows.
const RECENT_FILES_LIMIT: usize = 4;

#[tauri::command]
pub async fn dashboard_stats(state: State<'_, AppState>) -> Result<Vec<StatCard>, String> {
    let clients = state.clients_view.lock().await;
    let files = state.files_screen.lock().await;
    Ok(dashboard::stats(clients.records(), files.records()))
}

#[tauri::command]
pub async fn dashboard_recent_files(
    state: State<'_, AppState>,
) -> Result<Vec<FileRecord>, String> {
    let files = state.files_screen.lock().await;
    Ok(dashboard::recent_files(files.records(), RECENT_FILES_LIMIT))
}

#[tauri::command]
pub async fn dashboard_active_clients(
    state: State<'_, AppState>,
) -> Result<Vec<ClientRecord>, String> {
    let clients = state.clients_view.lock().await;
    Ok(dashboard::active_clients(clients.records()))
}
