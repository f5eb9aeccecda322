//! Atomic single-document file storage.
//!
//! Every durable CMR artifact is one small document (a session blob, a
//! settings file), so persistence reduces to a safe whole-file
//! replace: serialize, write to a temp file, fsync, rename. A file
//! lock serializes read-modify-write cycles between processes.

use std::fs::{self, File, OpenOptions};
use std::io::Write as IoWrite;
use std::marker::PhantomData;
use std::path::{Path, PathBuf};

use serde::{Serialize, de::DeserializeOwned};

use cmr_core::error::{CmrError, Result};

/// Serialization format for a stored document.
pub trait DocumentFormat {
    /// Human-readable format name used in error messages.
    const NAME: &'static str;

    fn encode<T: Serialize>(value: &T) -> Result<String>;
    fn decode<T: DeserializeOwned>(content: &str) -> Result<T>;
}

/// JSON documents, used for the session identity blob.
pub struct Json;

impl DocumentFormat for Json {
    const NAME: &'static str = "JSON";

    fn encode<T: Serialize>(value: &T) -> Result<String> {
        Ok(serde_json::to_string_pretty(value)?)
    }

    fn decode<T: DeserializeOwned>(content: &str) -> Result<T> {
        Ok(serde_json::from_str(content)?)
    }
}

/// TOML documents, used for settings.
pub struct Toml;

impl DocumentFormat for Toml {
    const NAME: &'static str = "TOML";

    fn encode<T: Serialize>(value: &T) -> Result<String> {
        Ok(toml::to_string_pretty(value)?)
    }

    fn decode<T: DeserializeOwned>(content: &str) -> Result<T> {
        Ok(toml::from_str(content)?)
    }
}

/// A handle to a single document stored atomically on disk.
///
/// - **Atomicity**: updates go through a temp file plus rename
/// - **Durability**: explicit fsync before the rename
/// - **Isolation**: an advisory lock file guards `update`
pub struct AtomicFile<T, F> {
    path: PathBuf,
    _phantom: PhantomData<(T, F)>,
}

impl<T, F> AtomicFile<T, F>
where
    T: Serialize + DeserializeOwned,
    F: DocumentFormat,
{
    pub fn new(path: PathBuf) -> Self {
        Self {
            path,
            _phantom: PhantomData,
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Loads and decodes the document.
    ///
    /// A missing or empty file is `Ok(None)`; a file that exists but
    /// fails to decode is an error, left to the caller to interpret.
    pub fn load(&self) -> Result<Option<T>> {
        if !self.path.exists() {
            return Ok(None);
        }

        let content = fs::read_to_string(&self.path)?;
        if content.trim().is_empty() {
            return Ok(None);
        }

        Ok(Some(F::decode(&content)?))
    }

    /// Replaces the document atomically.
    pub fn save(&self, value: &T) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let encoded = F::encode(value)?;

        let tmp_path = self.temp_path()?;
        let mut tmp_file = File::create(&tmp_path)?;
        tmp_file.write_all(encoded.as_bytes())?;
        tmp_file.sync_all()?;
        drop(tmp_file);

        fs::rename(&tmp_path, &self.path)?;

        Ok(())
    }

    /// Removes the document. A no-op when the file does not exist.
    pub fn remove(&self) -> Result<()> {
        match fs::remove_file(&self.path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }

    /// Read-modify-write under an exclusive lock.
    ///
    /// Loads the current document (or `default_value` when absent),
    /// applies `f`, and writes the result back atomically.
    pub fn update<U>(&self, default_value: T, f: U) -> Result<()>
    where
        U: FnOnce(&mut T) -> Result<()>,
    {
        let _lock = FileLock::acquire(&self.path)?;

        let mut value = self.load()?.unwrap_or(default_value);
        f(&mut value)?;
        self.save(&value)
    }

    fn temp_path(&self) -> Result<PathBuf> {
        let parent = self
            .path
            .parent()
            .ok_or_else(|| CmrError::io("Path has no parent directory"))?;
        let file_name = self
            .path
            .file_name()
            .ok_or_else(|| CmrError::io("Path has no file name"))?;

        Ok(parent.join(format!(".{}.tmp", file_name.to_string_lossy())))
    }
}

/// Guard for an advisory lock file, released on drop.
struct FileLock {
    #[allow(dead_code)]
    file: File,
    lock_path: PathBuf,
}

impl FileLock {
    fn acquire(path: &Path) -> Result<Self> {
        let lock_path = path.with_extension("lock");

        if let Some(parent) = lock_path.parent()
            && !parent.exists()
        {
            fs::create_dir_all(parent)?;
        }

        let file = OpenOptions::new()
            .write(true)
            .create(true)
            .truncate(false)
            .open(&lock_path)?;

        #[cfg(unix)]
        {
            use fs2::FileExt;
            file.lock_exclusive()
                .map_err(|e| CmrError::data_access(format!("Failed to acquire lock: {}", e)))?;
        }

        Ok(FileLock { file, lock_path })
    }
}

impl Drop for FileLock {
    fn drop(&mut self) {
        // Unlock happens when the handle closes; removing the lock
        // file is best effort.
        let _ = fs::remove_file(&self.lock_path);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde::{Deserialize, Serialize};
    use tempfile::TempDir;

    #[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
    struct Doc {
        name: String,
        count: u32,
    }

    #[test]
    fn test_json_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicFile::<Doc, Json>::new(temp_dir.path().join("doc.json"));

        let doc = Doc {
            name: "test".to_string(),
            count: 42,
        };
        file.save(&doc).unwrap();

        assert_eq!(file.load().unwrap(), Some(doc));
    }

    #[test]
    fn test_toml_save_and_load() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicFile::<Doc, Toml>::new(temp_dir.path().join("doc.toml"));

        let doc = Doc {
            name: "test".to_string(),
            count: 7,
        };
        file.save(&doc).unwrap();

        assert_eq!(file.load().unwrap(), Some(doc));
    }

    #[test]
    fn test_load_missing_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicFile::<Doc, Json>::new(temp_dir.path().join("absent.json"));
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_load_empty_file_is_none() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("empty.json");
        fs::write(&path, "   \n").unwrap();

        let file = AtomicFile::<Doc, Json>::new(path);
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_load_malformed_file_is_error() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("broken.json");
        fs::write(&path, "{not json").unwrap();

        let file = AtomicFile::<Doc, Json>::new(path);
        let err = file.load().unwrap_err();
        assert!(err.is_serialization());
    }

    #[test]
    fn test_remove_is_idempotent() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicFile::<Doc, Json>::new(temp_dir.path().join("doc.json"));

        file.save(&Doc {
            name: "x".to_string(),
            count: 0,
        })
        .unwrap();

        file.remove().unwrap();
        file.remove().unwrap();
        assert!(file.load().unwrap().is_none());
    }

    #[test]
    fn test_update_accumulates() {
        let temp_dir = TempDir::new().unwrap();
        let file = AtomicFile::<Doc, Toml>::new(temp_dir.path().join("doc.toml"));
        let default = Doc {
            name: "default".to_string(),
            count: 0,
        };

        file.update(default.clone(), |doc| {
            doc.count += 10;
            Ok(())
        })
        .unwrap();
        file.update(default, |doc| {
            doc.count += 5;
            Ok(())
        })
        .unwrap();

        assert_eq!(file.load().unwrap().unwrap().count, 15);
    }

    #[test]
    fn test_no_temp_file_left_behind() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("doc.json");
        let file = AtomicFile::<Doc, Json>::new(path.clone());

        file.save(&Doc {
            name: "test".to_string(),
            count: 1,
        })
        .unwrap();

        assert!(!temp_dir.path().join(".doc.json.tmp").exists());
        assert!(path.exists());
    }
}
