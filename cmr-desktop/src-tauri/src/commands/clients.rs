use serde::Serialize;
use tauri::State;

use cmr_core::clients::{ClientFilter, ClientRecord};
use cmr_core::listing::{SortDirection, SortKey};

use crate::app::AppState;

#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClientsPayload {
    pub items: Vec<ClientRecord>,
    /// `None` until the user picks a sort; rows stay in book order.
    pub sort_key: Option<SortKey>,
    pub direction: SortDirection,
    pub filter: ClientFilter,
}

async fn payload(state: &State<'_, AppState>) -> ClientsPayload {
    let view = state.clients_view.lock().await;
    ClientsPayload {
        items: view.visible().into_iter().cloned().collect(),
        sort_key: view.sort_key(),
        direction: view.direction(),
        filter: view.filter(),
    }
}

#[tauri::command]
pub async fn list_clients(state: State<'_, AppState>) -> Result<ClientsPayload, String> {
    Ok(payload(&state).await)
}

#[tauri::command]
pub async fn set_clients_sort(
    key: SortKey,
    state: State<'_, AppState>,
) -> Result<ClientsPayload, String> {
    state.clients_view.lock().await.set_sort(key);
    Ok(payload(&state).await)
}

/// Switches the status tab (All / Active / Pending / Completed).
#[tauri::command]
pub async fn set_clients_filter(
    filter: ClientFilter,
    state: State<'_, AppState>,
) -> Result<ClientsPayload, String> {
    state.clients_view.lock().await.set_filter(filter);
    Ok(payload(&state).await)
}
