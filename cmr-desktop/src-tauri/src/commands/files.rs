use serde::Serialize;
use tauri::State;

use cmr_core::CmrError;
use cmr_core::files::{FileFilter, FileListItem};
use cmr_core::listing::{SortDirection, SortKey};

use crate::app::AppState;

/// The files screen as one payload: rows plus the view state that the
/// header controls reflect.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FilesPayload {
    pub items: Vec<FileListItem>,
    pub sort_key: Option<SortKey>,
    pub direction: SortDirection,
    pub filter: FileFilter,
}

async fn payload(state: &State<'_, AppState>) -> FilesPayload {
    let screen = state.files_screen.lock().await;
    FilesPayload {
        items: screen.visible(),
        sort_key: screen.sort_key(),
        direction: screen.direction(),
        filter: screen.filter(),
    }
}

#[tauri::command]
pub async fn list_files(state: State<'_, AppState>) -> Result<FilesPayload, String> {
    Ok(payload(&state).await)
}

/// Applies a sort selection; re-picking the current key flips direction.
#[tauri::command]
pub async fn set_files_sort(
    key: SortKey,
    state: State<'_, AppState>,
) -> Result<FilesPayload, String> {
    state.files_screen.lock().await.set_sort(key);
    Ok(payload(&state).await)
}

#[tauri::command]
pub async fn set_files_filter(
    filter: FileFilter,
    state: State<'_, AppState>,
) -> Result<FilesPayload, String> {
    state.files_screen.lock().await.set_filter(filter);
    Ok(payload(&state).await)
}

/// Flips the star on one file and returns its new effective value.
#[tauri::command]
pub async fn toggle_file_star(name: String, state: State<'_, AppState>) -> Result<bool, String> {
    state
        .files_screen
        .lock()
        .await
        .toggle_star(&name)
        .ok_or_else(|| CmrError::not_found("file", name).to_string())
}
