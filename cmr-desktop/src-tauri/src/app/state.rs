use std::sync::Arc;

use cmr_core::assistant::Assistant;
use cmr_core::auth::AuthService;
use cmr_core::clients::ClientRecord;
use cmr_core::files::FilesScreen;
use cmr_core::integrations::Integration;
use cmr_core::listing::ListView;
use cmr_infrastructure::SettingsRepository;
use tokio::sync::Mutex;

/// Application state shared across Tauri commands.
///
/// The list view-models hold per-window UI state (sort, filter, star
/// overlay, transcript); the services own the durable parts.
pub struct AppState {
    pub auth_service: Arc<AuthService>,
    pub files_screen: Mutex<FilesScreen>,
    pub clients_view: Mutex<ListView<ClientRecord>>,
    pub assistant: Mutex<Assistant>,
    pub integrations: Mutex<Vec<Integration>>,
    pub settings_repository: Arc<SettingsRepository>,
}
