/// Key-value storage backends
///
/// The store persists everything through a tiny key-value contract, so the
/// actual engine can be swapped out (on disk for the CLI, in memory for
/// tests) without touching any CRUD logic.

use crate::error::{PantryError, Result};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::Mutex;

/// The opaque key-value store the recipe collection lives in.
///
/// `get` returns `None` for a key that was never written. `set`
/// unconditionally overwrites any prior value.
pub trait KvBackend: Send + Sync {
    fn get(&self, key: &str) -> Result<Option<String>>;
    fn set(&self, key: &str, value: &str) -> Result<()>;
}

/// File-backed storage: one file per key under a data directory.
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    /// Create a backend rooted at `dir`, creating the directory if needed.
    ///
    /// # Arguments
    /// * `dir` - Directory that will hold one `<key>.json` file per key
    ///
    /// # Returns
    /// * `Ok(FileBackend)` - Ready-to-use backend
    /// * `Err(PantryError)` - If the directory cannot be created
    pub fn new<P: AsRef<Path>>(dir: P) -> Result<Self> {
        let dir = dir.as_ref().to_path_buf();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    /// Open the default per-user backend at `~/.recipe-pantry/`.
    pub fn open_default() -> Result<Self> {
        let home = dirs::home_dir()
            .ok_or_else(|| PantryError::Config("could not find home directory".to_string()))?;
        Self::new(home.join(".recipe-pantry"))
    }

    /// Get the data directory path
    pub fn path(&self) -> &Path {
        &self.dir
    }

    fn file_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl KvBackend for FileBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        match fs::read_to_string(self.file_for(key)) {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        fs::write(self.file_for(key), value)?;
        Ok(())
    }
}

/// In-memory storage, used by tests and embedders.
#[derive(Default)]
pub struct MemoryBackend {
    map: Mutex<HashMap<String, String>>,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }
}

impl KvBackend for MemoryBackend {
    fn get(&self, key: &str) -> Result<Option<String>> {
        let map = self
            .map
            .lock()
            .map_err(|_| PantryError::Generic("storage lock poisoned".to_string()))?;
        Ok(map.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> Result<()> {
        let mut map = self
            .map
            .lock()
            .map_err(|_| PantryError::Generic("storage lock poisoned".to_string()))?;
        map.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_memory_backend_roundtrip() {
        let backend = MemoryBackend::new();

        assert!(backend.get("recipes").unwrap().is_none());
        backend.set("recipes", "[]").unwrap();
        assert_eq!(backend.get("recipes").unwrap().unwrap(), "[]");
    }

    #[test]
    fn test_memory_backend_overwrites() {
        let backend = MemoryBackend::new();

        backend.set("recipes", "first").unwrap();
        backend.set("recipes", "second").unwrap();
        assert_eq!(backend.get("recipes").unwrap().unwrap(), "second");
    }

    #[test]
    fn test_file_backend_roundtrip() {
        let tmp = TempDir::new().unwrap();
        let backend = FileBackend::new(tmp.path().join("pantry")).unwrap();

        assert!(backend.get("recipes").unwrap().is_none());
        backend.set("recipes", r#"[{"name":"Tea"}]"#).unwrap();
        assert_eq!(
            backend.get("recipes").unwrap().unwrap(),
            r#"[{"name":"Tea"}]"#
        );
    }

    #[test]
    fn test_file_backend_creates_directory() {
        let tmp = TempDir::new().unwrap();
        let dir = tmp.path().join("nested").join("pantry");

        let backend = FileBackend::new(&dir).unwrap();
        assert!(backend.path().exists());
    }

    #[test]
    fn test_file_backend_persists_across_instances() {
        let tmp = TempDir::new().unwrap();

        {
            let backend = FileBackend::new(tmp.path()).unwrap();
            backend.set("recipes", "saved").unwrap();
        }

        let backend = FileBackend::new(tmp.path()).unwrap();
        assert_eq!(backend.get("recipes").unwrap().unwrap(), "saved");
    }
}
