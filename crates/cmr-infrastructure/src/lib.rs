pub mod paths;
pub mod session_repository;
pub mod settings_repository;
pub mod storage;

pub use paths::CmrPaths;
pub use session_repository::FileSessionRepository;
pub use settings_repository::SettingsRepository;
