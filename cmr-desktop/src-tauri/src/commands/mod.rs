pub mod assistant;
pub mod auth;
pub mod clients;
pub mod dashboard;
pub mod files;
pub mod integrations;
pub mod settings;

pub use assistant::*;
pub use auth::*;
pub use clients::*;
pub use dashboard::*;
pub use files::*;
pub use integrations::*;
pub use settings::*;

pub fn handlers() -> impl Fn(tauri::ipc::Invoke<tauri::Wry>) -> bool + Send + Sync + 'static {
    tauri::generate_handler![
        auth::login,
        auth::logout,
        auth::auth_status,
        auth::resolve_route,
        files::list_files,
        files::set_files_sort,
        files::set_files_filter,
        files::toggle_file_star,
        clients::list_clients,
        clients::set_clients_sort,
        clients::set_clients_filter,
        dashboard::dashboard_stats,
        dashboard::dashboard_recent_files,
        dashboard::dashboard_active_clients,
        assistant::list_chat_messages,
        assistant::send_chat_message,
        assistant::clear_chat,
        assistant::quick_prompts,
        integrations::list_integrations,
        integrations::toggle_integration,
        settings::get_settings,
        settings::update_preferences,
        settings::update_notifications,
        settings::change_password,
    ]
}
