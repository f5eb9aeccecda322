//! Unified path management for CMR application files.
//!
//! All durable state lives under one per-user config directory so that
//! every repository agrees on locations.
//!
//! # Directory Structure
//!
//! ```text
//! ~/.config/cmr/               # Config directory (platform-dependent)
//! ├── cmr_user.json            # Persisted session identity (the single durable key)
//! ├── settings.toml            # Preferences and notification toggles
//! └── logs/                    # Application logs
//!     └── cmr-desktop.log.YYYY-MM-DD
//! ```

use std::path::PathBuf;

/// Errors that can occur during path resolution.
#[derive(Debug)]
pub enum PathError {
    /// Home directory could not be determined.
    HomeDirNotFound,
}

impl std::fmt::Display for PathError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            PathError::HomeDirNotFound => write!(f, "Cannot find home directory"),
        }
    }
}

impl std::error::Error for PathError {}

/// Unified path management for CMR.
///
/// Constructed with an optional root override so tests and repository
/// constructors can point everything at a temp directory.
pub struct CmrPaths {
    root_override: Option<PathBuf>,
}

impl CmrPaths {
    pub fn new(root_override: Option<PathBuf>) -> Self {
        Self { root_override }
    }

    /// Returns the CMR configuration directory.
    pub fn config_dir(&self) -> Result<PathBuf, PathError> {
        if let Some(ref root) = self.root_override {
            return Ok(root.clone());
        }
        dirs::config_dir()
            .map(|dir| dir.join("cmr"))
            .ok_or(PathError::HomeDirNotFound)
    }

    /// Returns the path to the persisted session identity blob, the
    /// single durable key of the session store.
    pub fn session_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("cmr_user.json"))
    }

    /// Returns the path to the persisted settings document.
    pub fn settings_file(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("settings.toml"))
    }

    /// Returns the path to the logs directory.
    pub fn logs_dir(&self) -> Result<PathBuf, PathError> {
        Ok(self.config_dir()?.join("logs"))
    }
}

impl Default for CmrPaths {
    fn default() -> Self {
        Self::new(None)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_dir() {
        let config_dir = CmrPaths::default().config_dir().unwrap();
        assert!(config_dir.ends_with("cmr"));
    }

    #[test]
    fn test_session_file_under_config_dir() {
        let paths = CmrPaths::default();
        let session_file = paths.session_file().unwrap();
        assert!(session_file.ends_with("cmr_user.json"));
        assert!(session_file.starts_with(paths.config_dir().unwrap()));
    }

    #[test]
    fn test_settings_file_under_config_dir() {
        let paths = CmrPaths::default();
        let settings_file = paths.settings_file().unwrap();
        assert!(settings_file.ends_with("settings.toml"));
    }

    #[test]
    fn test_root_override() {
        let paths = CmrPaths::new(Some(PathBuf::from("/tmp/cmr-test")));
        assert_eq!(
            paths.session_file().unwrap(),
            PathBuf::from("/tmp/cmr-test/cmr_user.json")
        );
    }
}
