//! Save slot backends

use crate::error::{GreatPeopleError, Result};
use ahash::AHashMap;
use parking_lot::Mutex;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

/// Key/value storage for serialized saves
pub trait SaveStore: Send + Sync {
    fn write(&self, key: &str, payload: &str) -> Result<()>;

    /// `Ok(None)` when nothing was saved under `key` yet
    fn read(&self, key: &str) -> Result<Option<String>>;

    fn clear(&self, key: &str) -> Result<()>;
}

/// Process-local store, mostly for tests and headless runs
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: Mutex<AHashMap<String, String>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl SaveStore for MemoryStore {
    fn write(&self, key: &str, payload: &str) -> Result<()> {
        self.slots.lock().insert(key.to_string(), payload.to_string());
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Option<String>> {
        Ok(self.slots.lock().get(key).cloned())
    }

    fn clear(&self, key: &str) -> Result<()> {
        self.slots.lock().remove(key);
        Ok(())
    }
}

/// One JSON file per key inside a directory.
///
/// Keys must be plain file names; anything that could leave `dir` is rejected.
#[derive(Debug, Clone)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str, extension: &str) -> Result<PathBuf> {
        let plain = !key.is_empty()
            && key != "."
            && key != ".."
            && !key.contains(['/', '\\', '\0']);
        if !plain {
            return Err(GreatPeopleError::Persistence(format!(
                "invalid save key {:?}",
                key
            )));
        }
        Ok(self.dir.join(format!("{}.{}", key, extension)))
    }
}

impl SaveStore for FileStore {
    fn write(&self, key: &str, payload: &str) -> Result<()> {
        let path = self.path_for(key, "json")?;
        let tmp = self.path_for(key, "json.tmp")?;
        fs::create_dir_all(&self.dir)?;
        // Write then rename so a crash never leaves a half-written save
        fs::write(&tmp, payload)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }

    fn read(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.path_for(key, "json")?) {
            Ok(payload) => Ok(Some(payload)),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn clear(&self, key: &str) -> Result<()> {
        match fs::remove_file(self.path_for(key, "json")?) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_memory_store() {
        let store = MemoryStore::new();
        assert_eq!(store.read("slot").unwrap(), None);
        store.write("slot", "{}").unwrap();
        assert_eq!(store.read("slot").unwrap().as_deref(), Some("{}"));
        store.clear("slot").unwrap();
        assert_eq!(store.read("slot").unwrap(), None);
    }

    #[test]
    fn test_file_store() {
        let dir = tempdir().unwrap();
        let store = FileStore::new(dir.path());

        assert_eq!(store.read("CivIdle").unwrap(), None);
        store.write("CivIdle", "{\"a\":1}").unwrap();
        store.write("CivIdle", "{\"a\":2}").unwrap();
        assert_eq!(store.read("CivIdle").unwrap().as_deref(), Some("{\"a\":2}"));

        store.clear("CivIdle").unwrap();
        store.clear("CivIdle").unwrap();
        assert_eq!(store.read("CivIdle").unwrap(), None);
    }

    #[test]
    fn test_file_store_rejects_escaping_keys() {
        let root = tempdir().unwrap();
        let store = FileStore::new(root.path().join("saves"));

        for key in ["../x", "a/b", "a\\b", "..", "."] {
            let err = store.write(key, "{}").unwrap_err();
            assert!(matches!(err, GreatPeopleError::Persistence(_)), "{key}");
            assert!(store.read(key).is_err());
            assert!(store.clear(key).is_err());
        }
        assert!(!root.path().join("x.json").exists());
        assert!(!root.path().join("saves").exists());
    }
}
