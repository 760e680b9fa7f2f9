//! Persists the last searched location between runs.

use serde::{Deserialize, Serialize};
use std::fs;
use std::io::ErrorKind;
use std::path::PathBuf;

use crate::error::StorageError;

/// On-disk shape: a single string under the fixed key `location`.
#[derive(Debug, Default, Serialize, Deserialize)]
struct SavedSession {
    #[serde(default)]
    location: String,
}

/// File-backed store for the last location query.
#[derive(Debug, Clone)]
pub struct SessionStore {
    path: PathBuf,
}

impl SessionStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Read the saved location. A missing file yields an empty string.
    pub fn load_location(&self) -> Result<String, StorageError> {
        let json = match fs::read_to_string(&self.path) {
            Ok(json) => json,
            Err(e) if e.kind() == ErrorKind::NotFound => {
                tracing::debug!("No saved session at {}", self.path.display());
                return Ok(String::new());
            }
            Err(e) => {
                return Err(StorageError::ReadFailed {
                    path: self.path.display().to_string(),
                    message: e.to_string(),
                })
            }
        };

        let saved: SavedSession =
            serde_json::from_str(&json).map_err(|e| StorageError::Corrupt {
                path: self.path.display().to_string(),
                message: e.to_string(),
            })?;

        tracing::debug!("Restored saved location: '{}'", saved.location);
        Ok(saved.location)
    }

    /// Overwrite the saved location.
    pub fn save_location(&self, location: &str) -> Result<(), StorageError> {
        let write_failed = |message: String| StorageError::WriteFailed {
            path: self.path.display().to_string(),
            message,
        };

        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent).map_err(|e| write_failed(e.to_string()))?;
        }

        let json = serde_json::to_string(&SavedSession {
            location: location.to_string(),
        })
        .map_err(|e| write_failed(e.to_string()))?;

        fs::write(&self.path, json).map_err(|e| write_failed(e.to_string()))?;

        tracing::trace!("Saved location '{}' to {}", location, self.path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_file_defaults_to_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));
        assert_eq!(store.load_location().unwrap(), "");
    }

    #[test]
    fn test_save_then_load() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("session.json"));

        store.save_location("lisbon").unwrap();
        assert_eq!(store.load_location().unwrap(), "lisbon");

        store.save_location("porto").unwrap();
        assert_eq!(store.load_location().unwrap(), "porto");
    }

    #[test]
    fn test_file_uses_location_key() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        let store = SessionStore::new(&path);

        store.save_location("São Paulo").unwrap();

        let raw: serde_json::Value =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(raw["location"], "São Paulo");
    }

    #[test]
    fn test_creates_parent_directory() {
        let dir = tempfile::tempdir().unwrap();
        let store = SessionStore::new(dir.path().join("a").join("b").join("session.json"));
        store.save_location("oslo").unwrap();
        assert_eq!(store.load_location().unwrap(), "oslo");
    }

    #[test]
    fn test_corrupt_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{not json").unwrap();

        let store = SessionStore::new(&path);
        assert!(matches!(
            store.load_location(),
            Err(StorageError::Corrupt { .. })
        ));
    }
}
