//! File-backed settings persistence.

use std::path::PathBuf;

use tracing::warn;

use cmr_core::error::Result;
use cmr_core::settings::{NotificationSettings, Preferences, UserSettings};

use crate::paths::CmrPaths;
use crate::storage::{AtomicFile, Toml};

/// Stores user settings as a TOML document.
///
/// Missing or unreadable settings fall back to defaults so the
/// settings screen always has something to show.
pub struct SettingsRepository {
    file: AtomicFile<UserSettings, Toml>,
}

impl SettingsRepository {
    /// Creates a repository at the default per-user location.
    pub fn new() -> Result<Self> {
        let path = CmrPaths::default()
            .settings_file()
            .map_err(|e| cmr_core::CmrError::io(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates a repository backed by an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::new(path),
        }
    }

    /// Loads the stored settings, or defaults when nothing usable is
    /// on disk.
    pub fn load_or_default(&self) -> UserSettings {
        match self.file.load() {
            Ok(Some(settings)) => settings,
            Ok(None) => UserSettings::default(),
            Err(e) => {
                warn!(path = %self.file.path().display(), error = %e, "Falling back to default settings");
                UserSettings::default()
            }
        }
    }

    /// Persists the full settings document.
    pub fn save(&self, settings: &UserSettings) -> Result<()> {
        self.file.save(settings)
    }

    /// Replaces only the preferences section, keeping notifications.
    pub fn update_preferences(&self, preferences: Preferences) -> Result<UserSettings> {
        self.apply(|settings| settings.preferences = preferences.clone())
    }

    /// Replaces only the notifications section, keeping preferences.
    pub fn update_notifications(&self, notifications: NotificationSettings) -> Result<UserSettings> {
        self.apply(|settings| settings.notifications = notifications.clone())
    }

    /// Read-modify-write of the stored document, under the file lock.
    ///
    /// An unreadable document is replaced by defaults plus the change,
    /// the same degradation `load_or_default` applies on reads.
    fn apply(&self, f: impl Fn(&mut UserSettings)) -> Result<UserSettings> {
        let mut applied = UserSettings::default();
        let outcome = self.file.update(UserSettings::default(), |settings| {
            f(settings);
            applied = settings.clone();
            Ok(())
        });

        match outcome {
            Ok(()) => Ok(applied),
            Err(e) if e.is_serialization() => {
                warn!(path = %self.file.path().display(), error = %e, "Replacing unreadable settings document");
                let mut settings = UserSettings::default();
                f(&mut settings);
                self.file.save(&settings)?;
                Ok(settings)
            }
            Err(e) => Err(e),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn repository(temp_dir: &TempDir) -> SettingsRepository {
        SettingsRepository::with_path(temp_dir.path().join("settings.toml"))
    }

    #[test]
    fn test_defaults_when_file_missing() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        assert_eq!(repo.load_or_default(), UserSettings::default());
    }

    #[test]
    fn test_save_then_load_round_trip() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        let mut settings = UserSettings::default();
        settings.preferences.dark_mode = false;
        settings.notifications.tax_deadlines = false;
        repo.save(&settings).unwrap();

        assert_eq!(repo.load_or_default(), settings);
    }

    #[test]
    fn test_update_preferences_keeps_notifications() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        let mut notifications = NotificationSettings::default();
        notifications.client_activity = false;
        repo.update_notifications(notifications.clone()).unwrap();

        let mut preferences = Preferences::default();
        preferences.compact_view = true;
        let settings = repo.update_preferences(preferences.clone()).unwrap();

        assert_eq!(settings.preferences, preferences);
        assert_eq!(settings.notifications, notifications);
    }

    #[test]
    fn test_update_on_unreadable_file_replaces_with_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");
        std::fs::write(&path, "preferences = \"oops\"").unwrap();

        let repo = SettingsRepository::with_path(path);
        let mut preferences = Preferences::default();
        preferences.compact_view = true;
        let settings = repo.update_preferences(preferences.clone()).unwrap();

        assert_eq!(settings.preferences, preferences);
        assert_eq!(settings.notifications, NotificationSettings::default());
        assert_eq!(repo.load_or_default(), settings);
    }

    #[test]
    fn test_update_releases_lock_and_temp_files() {
        let temp_dir = TempDir::new().unwrap();
        let repo = repository(&temp_dir);

        repo.update_preferences(Preferences::default()).unwrap();

        assert!(temp_dir.path().join("settings.toml").exists());
        assert!(!temp_dir.path().join("settings.lock").exists());
        assert!(!temp_dir.path().join(".settings.toml.tmp").exists());
    }

    #[test]
    fn test_unreadable_file_falls_back_to_defaults() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("settings.toml");
        std::fs::write(&path, "preferences = \"oops\"").unwrap();

        let repo = SettingsRepository::with_path(path);
        assert_eq!(repo.load_or_default(), UserSettings::default());
    }
}
