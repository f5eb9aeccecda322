use serde::Serialize;
use tauri::State;

use cmr_core::auth::{AuthSnapshot, LoginOutcome, Route, RouteDecision, guard};

use crate::app::AppState;

/// What the shell does after a completed session operation.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionResponse {
    pub snapshot: AuthSnapshot,
    pub redirect_to: Option<&'static str>,
}

/// Result of gating a navigation path against the session.
#[derive(Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RouteResolution {
    pub decision: RouteDecision,
    pub redirect_to: Option<&'static str>,
}

/// Validates credentials and adopts the session on success.
///
/// The error string doubles as the user-facing toast message.
#[tauri::command]
pub async fn login(
    email: String,
    password: String,
    state: State<'_, AppState>,
) -> Result<SessionResponse, String> {
    let outcome = state
        .auth_service
        .login(&email, &password)
        .await
        .map_err(|e| e.to_string())?;

    let redirect_to = match outcome {
        LoginOutcome::LoggedIn(_) => Some(Route::default_after_login().path()),
        // A logout raced the login and won; stay where logout left us.
        LoginOutcome::Superseded => None,
    };

    Ok(SessionResponse {
        snapshot: state.auth_service.snapshot().await,
        redirect_to,
    })
}

#[tauri::command]
pub async fn logout(state: State<'_, AppState>) -> Result<SessionResponse, String> {
    state.auth_service.logout().await;
    Ok(SessionResponse {
        snapshot: state.auth_service.snapshot().await,
        redirect_to: Some(Route::after_logout().path()),
    })
}

/// Current session snapshot, polled by the shell on focus changes.
#[tauri::command]
pub async fn auth_status(state: State<'_, AppState>) -> Result<AuthSnapshot, String> {
    Ok(state.auth_service.snapshot().await)
}

/// Gates a navigation request.
///
/// Unknown paths render (the shell shows its not-found view); known
/// protected paths go through the guard.
#[tauri::command]
pub async fn resolve_route(
    path: String,
    state: State<'_, AppState>,
) -> Result<RouteResolution, String> {
    let Some(route) = Route::from_path(&path) else {
        return Ok(RouteResolution {
            decision: RouteDecision::Render,
            redirect_to: None,
        });
    };

    let snapshot = state.auth_service.snapshot().await;
    let decision = guard::decide(route, &snapshot);
    let redirect_to = match decision {
        RouteDecision::RedirectToLogin => Some(Route::after_logout().path()),
        RouteDecision::Render | RouteDecision::Pending => None,
    };

    Ok(RouteResolution {
        decision,
        redirect_to,
    })
}
