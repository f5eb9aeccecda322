//! Account settings model.
//!
//! Preferences and notification toggles persist across restarts; the
//! profile and password forms are cosmetic validations only.

use serde::{Deserialize, Serialize};

use crate::error::{CmrError, Result};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Preferences {
    pub dark_mode: bool,
    pub compact_view: bool,
    pub auto_save: bool,
}

impl Default for Preferences {
    fn default() -> Self {
        Self {
            dark_mode: true,
            compact_view: false,
            auto_save: true,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct NotificationSettings {
    pub client_activity: bool,
    pub tax_deadlines: bool,
    pub document_updates: bool,
    pub system_notifications: bool,
}

impl Default for NotificationSettings {
    fn default() -> Self {
        Self {
            client_activity: true,
            tax_deadlines: true,
            document_updates: true,
            system_notifications: true,
        }
    }
}

/// Everything the settings screen persists, stored as one document.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct UserSettings {
    #[serde(default)]
    pub preferences: Preferences,
    #[serde(default)]
    pub notifications: NotificationSettings,
}

/// Validates the password-change form. No password is actually stored;
/// the checks mirror the user-visible form errors.
pub fn validate_password_change(current: &str, new: &str, confirm: &str) -> Result<()> {
    if new != confirm {
        return Err(CmrError::validation("New passwords do not match"));
    }
    if current.is_empty() {
        return Err(CmrError::validation("Current password is required"));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preference_defaults() {
        let preferences = Preferences::default();
        assert!(preferences.dark_mode);
        assert!(!preferences.compact_view);
        assert!(preferences.auto_save);
    }

    #[test]
    fn test_notification_defaults_all_on() {
        let notifications = NotificationSettings::default();
        assert!(notifications.client_activity);
        assert!(notifications.tax_deadlines);
        assert!(notifications.document_updates);
        assert!(notifications.system_notifications);
    }

    #[test]
    fn test_password_mismatch_rejected() {
        let err = validate_password_change("old", "a", "b").unwrap_err();
        assert!(matches!(err, CmrError::Validation(_)));
    }

    #[test]
    fn test_missing_current_password_rejected() {
        let err = validate_password_change("", "a", "a").unwrap_err();
        assert!(matches!(err, CmrError::Validation(_)));
    }

    #[test]
    fn test_valid_change_accepted() {
        assert!(validate_password_change("old", "a", "a").is_ok());
    }

    #[test]
    fn test_settings_toml_round_trip() {
        let settings = UserSettings {
            preferences: Preferences {
                dark_mode: false,
                ..Preferences::default()
            },
            ..UserSettings::default()
        };

        let toml = toml::to_string_pretty(&settings).unwrap();
        let restored: UserSettings = toml::from_str(&toml).unwrap();
        assert_eq!(restored, settings);
    }
}
