//! File-backed session persistence.

use std::path::PathBuf;

use async_trait::async_trait;
use tracing::warn;

use cmr_core::auth::{SessionRepository, User};
use cmr_core::error::Result;

use crate::paths::CmrPaths;
use crate::storage::{AtomicFile, Json};

/// Stores the session identity as a single JSON blob on disk.
///
/// The blob is trusted as-is on load; credentials are never stored. A
/// blob that fails to decode reads as no session, so a corrupt file
/// degrades to logged-out instead of wedging startup.
pub struct FileSessionRepository {
    file: AtomicFile<User, Json>,
}

impl FileSessionRepository {
    /// Creates a repository at the default per-user location.
    pub fn new() -> Result<Self> {
        let path = CmrPaths::default()
            .session_file()
            .map_err(|e| cmr_core::CmrError::io(e.to_string()))?;
        Ok(Self::with_path(path))
    }

    /// Creates a repository backed by an explicit file path.
    pub fn with_path(path: PathBuf) -> Self {
        Self {
            file: AtomicFile::new(path),
        }
    }
}

#[async_trait]
impl SessionRepository for FileSessionRepository {
    async fn load(&self) -> Result<Option<User>> {
        match self.file.load() {
            Ok(user) => Ok(user),
            Err(e) if e.is_serialization() => {
                warn!(path = %self.file.path().display(), error = %e, "Discarding malformed session blob");
                Ok(None)
            }
            Err(e) => Err(e),
        }
    }

    async fn save(&self, user: &User) -> Result<()> {
        self.file.save(user)
    }

    async fn clear(&self) -> Result<()> {
        self.file.remove()
    }
}
