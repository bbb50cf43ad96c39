//! Token storage backends.
//!
//! The store is the only place a credential is persisted. It does not look
//! inside the credential.

use hourly_core::{SessionConfig, StorageKind};
use serde_json::{Map, Value};
use std::fs;
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use crate::credential::Credential;
use crate::error::StoreError;

/// Single-slot credential storage.
///
/// Each operation is atomic on its own; callers do not need extra locking.
pub trait TokenStore: Send + Sync {
    /// Read the credential. No side effects.
    fn get(&self) -> Result<Option<Credential>, StoreError>;

    /// Store a credential, replacing any existing one.
    fn set(&self, credential: Credential) -> Result<(), StoreError>;

    /// Remove the credential. Clearing an empty store succeeds.
    fn clear(&self) -> Result<(), StoreError>;
}

/// Create a store based on configuration.
pub fn create_store(config: &SessionConfig) -> Arc<dyn TokenStore> {
    match config.storage {
        StorageKind::Session => Arc::new(MemoryTokenStore::new()),
        StorageKind::Durable => Arc::new(FileTokenStore::new(&config.file, &config.key)),
    }
}

/// Process-lifetime storage.
#[derive(Debug, Default)]
pub struct MemoryTokenStore {
    slot: RwLock<Option<Credential>>,
}

impl MemoryTokenStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// A store that already holds `credential`.
    pub fn with_credential(credential: Credential) -> Self {
        Self {
            slot: RwLock::new(Some(credential)),
        }
    }
}

impl TokenStore for MemoryTokenStore {
    fn get(&self) -> Result<Option<Credential>, StoreError> {
        let slot = self.slot.read().map_err(|_| StoreError::Poisoned)?;
        Ok(slot.clone())
    }

    fn set(&self, credential: Credential) -> Result<(), StoreError> {
        *self.slot.write().map_err(|_| StoreError::Poisoned)? = Some(credential);
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        self.slot.write().map_err(|_| StoreError::Poisoned)?.take();
        Ok(())
    }
}

/// Durable storage in a JSON key/value file.
///
/// The file is shared the way browser `localStorage` is: the credential
/// lives under one key and any other keys are left alone. The file is
/// re-read on every call and replaced atomically on every write.
#[derive(Debug, Clone)]
pub struct FileTokenStore {
    path: PathBuf,
    key: String,
}

impl FileTokenStore {
    pub fn new(path: impl Into<PathBuf>, key: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            key: key.into(),
        }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn read_entries(&self) -> Result<Map<String, Value>, StoreError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(Map::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Map::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Entries to rewrite on `set` or `clear`.
    ///
    /// A corrupt file is treated as empty so the next write replaces it.
    /// The flag is `true` when that happened.
    fn entries_for_write(&self) -> Result<(Map<String, Value>, bool), StoreError> {
        match self.read_entries() {
            Ok(entries) => Ok((entries, false)),
            Err(StoreError::Corrupt(e)) => {
                tracing::warn!(
                    path = %self.path.display(),
                    error = %e,
                    "Token store file is corrupt, replacing it"
                );
                Ok((Map::new(), true))
            }
            Err(e) => Err(e),
        }
    }

    fn write_entries(&self, entries: &Map<String, Value>) -> Result<(), StoreError> {
        let dir = match self.path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };
        fs::create_dir_all(dir)?;

        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, entries)?;
        tmp.write_all(b"\n")?;
        tmp.persist(&self.path).map_err(|e| StoreError::Io(e.error))?;
        Ok(())
    }
}

impl TokenStore for FileTokenStore {
    fn get(&self) -> Result<Option<Credential>, StoreError> {
        let entries = self.read_entries()?;
        Ok(entries
            .get(&self.key)
            .and_then(Value::as_str)
            .and_then(Credential::from_stored))
    }

    fn set(&self, credential: Credential) -> Result<(), StoreError> {
        let (mut entries, _) = self.entries_for_write()?;
        entries.insert(self.key.clone(), Value::String(credential.into_inner()));
        self.write_entries(&entries)?;
        tracing::debug!(path = %self.path.display(), key = %self.key, "Stored credential");
        Ok(())
    }

    fn clear(&self) -> Result<(), StoreError> {
        let (mut entries, corrupt) = self.entries_for_write()?;
        if entries.remove(&self.key).is_some() || corrupt {
            self.write_entries(&entries)?;
            tracing::debug!(path = %self.path.display(), key = %self.key, "Cleared credential");
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_store_set_get_clear() {
        let store = MemoryTokenStore::new();
        assert!(store.get().unwrap().is_none());

        store.set(Credential::new("a")).unwrap();
        store.set(Credential::new("b")).unwrap();
        assert_eq!(store.get().unwrap().unwrap().as_str(), "b");

        store.clear().unwrap();
        assert!(store.get().unwrap().is_none());
        store.clear().unwrap();
        assert!(store.get().unwrap().is_none());
    }

    #[test]
    fn test_file_store_missing_file_is_empty() {
        let dir = tempfile::tempdir().unwrap();
        let store = FileTokenStore::new(dir.path().join("session.json"), "authToken");
        assert!(store.get().unwrap().is_none());
        store.clear().unwrap();
        assert!(!store.path().exists());
    }

    #[test]
    fn test_file_store_round_trip_and_persistence() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("session.json");

        FileTokenStore::new(&path, "authToken")
            .set(Credential::new("h.p.s"))
            .unwrap();

        let reopened = FileTokenStore::new(&path, "authToken");
        assert_eq!(reopened.get().unwrap().unwrap().as_str(), "h.p.s");

        reopened.clear().unwrap();
        assert!(reopened.get().unwrap().is_none());
        reopened.clear().unwrap();
    }

    #[test]
    fn test_file_store_preserves_other_keys() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"{"darkMode": "true", "authToken": "old"}"#).unwrap();

        let store = FileTokenStore::new(&path, "authToken");
        store.set(Credential::new("new")).unwrap();
        store.clear().unwrap();

        let entries: Map<String, Value> =
            serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
        assert_eq!(entries.get("darkMode"), Some(&Value::String("true".into())));
        assert!(!entries.contains_key("authToken"));
    }

    #[test]
    fn test_file_store_blank_value_is_absent() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, r#"{"authToken": ""}"#).unwrap();

        let store = FileTokenStore::new(&path, "authToken");
        assert!(store.get().unwrap().is_none());
    }

    #[test]
    fn test_file_store_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("storage.json");
        fs::write(&path, "not json").unwrap();

        let store = FileTokenStore::new(&path, "authToken");
        assert!(matches!(store.get(), Err(StoreError::Corrupt(_))));
    }

    #[test]
    fn test_file_store_clear_replaces_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{truncated").unwrap();

        let store = FileTokenStore::new(&path, "authToken");
        store.clear().unwrap();
        assert!(store.get().unwrap().is_none());
        store.clear().unwrap();
    }

    #[test]
    fn test_file_store_set_replaces_corrupt_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("session.json");
        fs::write(&path, "{truncated").unwrap();

        let store = FileTokenStore::new(&path, "authToken");
        store.set(Credential::new("fresh")).unwrap();
        assert_eq!(store.get().unwrap().unwrap().as_str(), "fresh");
    }

    #[test]
    fn test_create_store_from_config() {
        let dir = tempfile::tempdir().unwrap();
        let config = SessionConfig {
            storage: StorageKind::Durable,
            key: "tok".into(),
            file: dir.path().join("s.json"),
        };
        let store = create_store(&config);
        store.set(Credential::new("x")).unwrap();
        assert!(dir.path().join("s.json").exists());

        let session = create_store(&SessionConfig {
            storage: StorageKind::Session,
            ..config
        });
        assert!(session.get().unwrap().is_none());
    }
}
