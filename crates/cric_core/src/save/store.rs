use std::collections::HashMap;
use std::fs::{remove_file, rename, File};
use std::io::{ErrorKind, Read, Write};
use std::path::{Path, PathBuf};

use tracing::debug;

use super::error::SaveError;

/// Key-value store holding encoded match snapshots.
///
/// The scorer only ever uses a single key (the active match slot); the
/// store itself never interprets the bytes.
pub trait SnapshotStore {
    /// Read the snapshot stored under `key`.
    ///
    /// Returns `Ok(None)` if nothing is stored there.
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, SaveError>;

    /// Replace the snapshot stored under `key`.
    fn save(&mut self, key: &str, data: &[u8]) -> Result<(), SaveError>;

    /// Erase the snapshot under `key`. Returns `true` if one existed.
    fn remove(&mut self, key: &str) -> Result<bool, SaveError>;

    /// Check whether a snapshot exists under `key`.
    fn contains(&self, key: &str) -> Result<bool, SaveError> {
        Ok(self.load(key)?.is_some())
    }
}

/// HashMap-backed store for tests and embedding.
#[derive(Debug, Default, Clone)]
pub struct InMemorySnapshotStore {
    entries: HashMap<String, Vec<u8>>,
}

impl InMemorySnapshotStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl SnapshotStore for InMemorySnapshotStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, SaveError> {
        Ok(self.entries.get(key).cloned())
    }

    fn save(&mut self, key: &str, data: &[u8]) -> Result<(), SaveError> {
        self.entries.insert(key.to_string(), data.to_vec());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool, SaveError> {
        Ok(self.entries.remove(key).is_some())
    }
}

/// One file per key under a save directory.
#[derive(Debug, Clone)]
pub struct FileSnapshotStore {
    dir: PathBuf,
}

impl FileSnapshotStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, SaveError> {
        let valid = !key.is_empty()
            && key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');
        if !valid {
            return Err(SaveError::InvalidKey { key: key.to_string() });
        }
        Ok(self.dir.join(format!("{key}.snapshot")))
    }
}

impl SnapshotStore for FileSnapshotStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, SaveError> {
        let path = self.path_for(key)?;

        let mut file = match File::open(&path) {
            Ok(file) => file,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(None),
            Err(e) => return Err(e.into()),
        };
        let mut data = Vec::new();
        file.read_to_end(&mut data)?;

        debug!("Loaded {} bytes from {:?}", data.len(), path);
        Ok(Some(data))
    }

    fn save(&mut self, key: &str, data: &[u8]) -> Result<(), SaveError> {
        let path = self.path_for(key)?;
        std::fs::create_dir_all(&self.dir)?;

        // Atomic save: write to temp file, then rename
        let temp_path = path.with_extension("tmp");

        {
            let mut file = File::create(&temp_path)?;
            file.write_all(data)?;
            file.flush()?;
            file.sync_all()?;
        }

        rename(&temp_path, &path)?;

        debug!("Saved {} bytes to {:?}", data.len(), path);
        Ok(())
    }

    fn remove(&mut self, key: &str) -> Result<bool, SaveError> {
        let path = self.path_for(key)?;
        match remove_file(&path) {
            Ok(()) => {
                debug!("Removed snapshot {:?}", path);
                Ok(true)
            }
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(e.into()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_in_memory_store() {
        let mut store = InMemorySnapshotStore::new();
        assert_eq!(store.load("cricketMatch").unwrap(), None);

        store.save("cricketMatch", b"one").unwrap();
        store.save("cricketMatch", b"two").unwrap();
        assert_eq!(store.len(), 1);
        assert_eq!(store.load("cricketMatch").unwrap().as_deref(), Some(&b"two"[..]));

        assert!(store.remove("cricketMatch").unwrap());
        assert!(!store.remove("cricketMatch").unwrap());
        assert!(store.is_empty());
    }

    #[test]
    fn test_file_store_roundtrip() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileSnapshotStore::new(temp_dir.path().join("saves"));

        assert!(!store.contains("cricketMatch").unwrap());
        store.save("cricketMatch", b"{\"innings\":1}").unwrap();
        assert!(store.contains("cricketMatch").unwrap());
        assert_eq!(
            store.load("cricketMatch").unwrap().as_deref(),
            Some(&b"{\"innings\":1}"[..])
        );

        // Temp file should not exist
        let temp_path = store.dir().join("cricketMatch.tmp");
        assert!(!temp_path.exists());

        assert!(store.remove("cricketMatch").unwrap());
        assert!(!store.remove("cricketMatch").unwrap());
        assert_eq!(store.load("cricketMatch").unwrap(), None);
    }

    #[test]
    fn test_file_store_rejects_path_keys() {
        let temp_dir = TempDir::new().unwrap();
        let mut store = FileSnapshotStore::new(temp_dir.path());

        for key in ["", "../escape", "a/b", "with space"] {
            assert!(matches!(store.save(key, b"x"), Err(SaveError::InvalidKey { .. })));
        }
    }
}
