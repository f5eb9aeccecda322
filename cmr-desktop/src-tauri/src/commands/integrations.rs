use tauri::State;

use cmr_core::CmrError;
use cmr_core::integrations::{CONNECT_DELAY, Integration};

use crate::app::AppState;

#[tauri::command]
pub async fn list_integrations(state: State<'_, AppState>) -> Result<Vec<Integration>, String> {
    Ok(state.integrations.lock().await.clone())
}

/// Connects or disconnects an integration by name.
///
/// Connecting simulates the handshake delay before flipping the flag;
/// disconnecting is immediate. Nothing external is contacted.
#[tauri::command]
pub async fn toggle_integration(
    name: String,
    state: State<'_, AppState>,
) -> Result<Integration, String> {
    let connecting = {
        let integrations = state.integrations.lock().await;
        let integration = integrations
            .iter()
            .find(|i| i.name == name)
            .ok_or_else(|| CmrError::not_found("integration", name.clone()).to_string())?;
        !integration.connected
    };

    if connecting {
        // The handshake delay runs outside the lock.
        tokio::time::sleep(CONNECT_DELAY).await;
    }

    let mut integrations = state.integrations.lock().await;
    let integration = integrations
        .iter_mut()
        .find(|i| i.name == name)
        .ok_or_else(|| CmrError::not_found("integration", name.clone()).to_string())?;

    integration.connected = connecting;
    integration.last_sync = connecting.then(|| "Just now".to_string());

    Ok(integration.clone())
}
