use std::sync::Arc;

use anyhow::{Context, Result};
use cmr_core::assistant::Assistant;
use cmr_core::auth::{AuthService, SessionRepository};
use cmr_core::clients::{ClientRecord, default_clients};
use cmr_core::files::FilesScreen;
use cmr_core::integrations::default_integrations;
use cmr_core::listing::ListView;
use cmr_infrastructure::{FileSessionRepository, SettingsRepository};
use tokio::sync::Mutex;

use crate::app::AppState;

/// Composition root: wires the repositories into the services and
/// seeds the screen view-models with the demo fixtures.
///
/// The stored session is restored here, before any window exists, so
/// the first route resolution already sees `is_restored`.
pub async fn bootstrap() -> Result<AppState> {
    let session_repository: Arc<dyn SessionRepository> = Arc::new(
        FileSessionRepository::new().context("Failed to initialize session repository")?,
    );

    let auth_service = Arc::new(AuthService::new(session_repository));
    auth_service.restore().await;

    let settings_repository = Arc::new(
        SettingsRepository::new().context("Failed to initialize settings repository")?,
    );
    // Touch the settings file location once so the first save has a home.
    let _ = settings_repository.load_or_default();

    tracing::info!("[Bootstrap] Services initialized");

    Ok(AppState {
        auth_service,
        files_screen: Mutex::new(FilesScreen::new()),
        clients_view: Mutex::new(ListView::<ClientRecord>::new(default_clients())),
        assistant: Mutex::new(Assistant::new()),
        integrations: Mutex::new(default_integrations()),
        settings_repository,
    })
}
