//! Preference store abstraction
//!
//! The session reads and writes a handful of boolean flags ("has the opening
//! screen been seen") through [`PreferenceStore`]. Hosts inject the backing:
//! [`MemoryStore`] for tests and ephemeral sessions, [`FileStore`] for a JSON
//! file on disk.

use std::collections::{BTreeMap, HashMap};
use std::fmt::Debug;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;
use tracing::debug;

/// Set once the opening turntable has completed.
pub const OPENING_SEEN_KEY: &str = "opening_seen";

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("failed to access preference file {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to encode or decode preferences: {0}")]
    Json(#[from] serde_json::Error),
}

/// Boolean key-value flags that outlive a session.
pub trait PreferenceStore: Debug {
    /// Unset keys read as `false`.
    fn flag(&self, key: &str) -> bool;

    fn set_flag(&mut self, key: &str, value: bool) -> Result<(), StoreError>;
}

#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    flags: HashMap<String, bool>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_flag(mut self, key: &str, value: bool) -> Self {
        self.flags.insert(key.to_owned(), value);
        self
    }
}

impl PreferenceStore for MemoryStore {
    fn flag(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    fn set_flag(&mut self, key: &str, value: bool) -> Result<(), StoreError> {
        self.flags.insert(key.to_owned(), value);
        Ok(())
    }
}

/// Flags persisted as a JSON object. Every write rewrites the whole file.
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
    flags: BTreeMap<String, bool>,
}

impl FileStore {
    /// Open `path`, starting empty when the file does not exist yet.
    pub fn open(path: impl AsRef<Path>) -> Result<Self, StoreError> {
        let path = path.as_ref().to_path_buf();
        let flags = match fs::read_to_string(&path) {
            Ok(raw) if raw.trim().is_empty() => BTreeMap::new(),
            Ok(raw) => serde_json::from_str(&raw)?,
            Err(err) if err.kind() == io::ErrorKind::NotFound => BTreeMap::new(),
            Err(source) => return Err(StoreError::Io { path, source }),
        };
        debug!(path = %path.display(), flags = flags.len(), "opened preference file");
        Ok(Self { path, flags })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn persist(&self) -> Result<(), StoreError> {
        let io_err = |source| StoreError::Io {
            path: self.path.clone(),
            source,
        };
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(io_err)?;
        }
        let body = serde_json::to_string_pretty(&self.flags)?;
        fs::write(&self.path, body).map_err(io_err)
    }
}

impl PreferenceStore for FileStore {
    fn flag(&self, key: &str) -> bool {
        self.flags.get(key).copied().unwrap_or(false)
    }

    fn set_flag(&mut self, key: &str, value: bool) -> Result<(), StoreError> {
        let previous = self.flags.insert(key.to_owned(), value);
        if let Err(err) = self.persist() {
            match previous {
                Some(v) => self.flags.insert(key.to_owned(), v),
                None => self.flags.remove(key),
            };
            return Err(err);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn memory_store_defaults_to_false() {
        let mut store = MemoryStore::new();
        assert!(!store.flag(OPENING_SEEN_KEY));
        store.set_flag(OPENING_SEEN_KEY, true).unwrap();
        assert!(store.flag(OPENING_SEEN_KEY));
        assert!(MemoryStore::new().with_flag("x", true).flag("x"));
    }

    #[test]
    fn file_store_round_trips_through_disk() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested/prefs.json");

        let mut store = FileStore::open(&path).unwrap();
        assert!(!store.flag(OPENING_SEEN_KEY));
        store.set_flag(OPENING_SEEN_KEY, true).unwrap();

        let reopened = FileStore::open(&path).unwrap();
        assert!(reopened.flag(OPENING_SEEN_KEY));
        let raw = fs::read_to_string(&path).unwrap();
        assert!(raw.contains("\"opening_seen\": true"));
    }

    #[test]
    fn corrupt_file_is_an_error() {
        let file = tempfile::NamedTempFile::new().unwrap();
        fs::write(file.path(), "{not json").unwrap();
        assert!(matches!(
            FileStore::open(file.path()),
            Err(StoreError::Json(_))
        ));
    }

    #[test]
    fn failed_write_leaves_flags_unchanged() {
        let dir = tempfile::tempdir().unwrap();
        // A directory where the file should be makes the write fail.
        let path = dir.path().join("prefs.json");
        fs::create_dir(&path).unwrap();

        let mut store = FileStore {
            path,
            flags: BTreeMap::new(),
        };
        assert!(matches!(
            store.set_flag(OPENING_SEEN_KEY, true),
            Err(StoreError::Io { .. })
        ));
        assert!(!store.flag(OPENING_SEEN_KEY));
    }
}
