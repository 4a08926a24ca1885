//! File-backed store.
//!
//! Each key becomes one file inside a root directory. Writes go through a
//! sibling temporary file and a rename so a crash never leaves a torn value.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{StorageError, StorageResult};
use crate::service::KeyValueStore;

/// Extension appended to every value file.
const VALUE_EXT: &str = "json";

/// Directory-backed key-value store.
#[derive(Clone, Debug)]
pub struct FileStore {
    root: PathBuf,
}

impl FileStore {
    /// Open a store rooted at `root`, creating the directory if needed.
    pub fn open(root: impl Into<PathBuf>) -> StorageResult<Self> {
        let root = root.into();
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    /// Root directory of the store.
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Map a key onto a file path inside the root.
    ///
    /// Characters outside `[A-Za-z0-9._-]` become `_`, so namespaced keys
    /// like `spm:panel` land in `spm_panel.json`.
    pub fn path_for(&self, key: &str) -> StorageResult<PathBuf> {
        if key.is_empty() || key.chars().all(|c| c == '.') {
            return Err(StorageError::invalid_key(key));
        }
        let name: String = key
            .chars()
            .map(|c| {
                if c.is_ascii_alphanumeric() || c == '.' || c == '-' || c == '_' {
                    c
                } else {
                    '_'
                }
            })
            .collect();
        Ok(self.root.join(format!("{}.{}", name, VALUE_EXT)))
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read(&path) {
            Ok(bytes) => Ok(Some(String::from_utf8(bytes)?)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        let tmp = path.with_extension("tmp");
        fs::write(&tmp, value.as_bytes())?;
        fs::rename(&tmp, &path)?;
        trace!(path = %path.display(), bytes = value.len(), "stored value");
        Ok(())
    }

    fn remove(&self, key: &str) -> StorageResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}
