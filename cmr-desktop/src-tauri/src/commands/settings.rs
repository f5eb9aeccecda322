use tauri::State;

use cmr_core::CmrError;
use cmr_core::settings::{NotificationSettings, Preferences, UserSettings, validate_password_change};

use crate::app::AppState;

fn form_error(e: CmrError) -> String {
    // Validation messages are shown verbatim in the form toast.
    match e {
        CmrError::Validation(message) => message,
        other => other.to_string(),
    }
}

#[tauri::command]
pub async fn get_settings(state: State<'_, AppState>) -> Result<UserSettings, String> {
    Ok(state.settings_repository.load_or_default())
}

#[tauri::command]
pub async fn update_preferences(
    preferences: Preferences,
    state: State<'_, AppState>,
) -> Result<UserSettings, String> {
    state
        .settings_repository
        .update_preferences(preferences)
        .map_err(|e| e.to_string())
}

#[tauri::command]
pub async fn update_notifications(
    notifications: NotificationSettings,
    state: State<'_, AppState>,
) -> Result<UserSettings, String> {
    state
        .settings_repository
        .update_notifications(notifications)
        .map_err(|e| e.to_string())
}

/// Validates the password form. No password is stored anywhere; this
/// only reproduces the form's error behavior.
#[tauri::command]
pub async fn change_password(
    current_password: String,
    new_password: String,
    confirm_password: String,
) -> Result<(), String> {
    validate_password_change(&current_password, &new_password, &confirm_password)
        .map_err(form_error)
}
