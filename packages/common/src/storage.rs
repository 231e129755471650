//! Key-value storage used to persist the page between sessions.
//!
//! Mirrors the browser's local storage contract: string keys, string
//! values, synchronous access. Two backends are provided:
//! - [`FileStorage`]: one `<key>.json` file per key inside a directory
//! - [`MemoryStorage`]: a `HashMap`, for tests and throwaway sessions

use crate::{CommonError, CommonResult};
use std::collections::HashMap;
use std::fs;
use std::path::{Path, PathBuf};

/// Synchronous string key-value store
pub trait Storage {
    /// Read a value, `None` if the key was never written
    fn get_item(&self, key: &str) -> CommonResult<Option<String>>;

    /// Write a value, replacing any previous one
    fn set_item(&mut self, key: &str, value: &str) -> CommonResult<()>;

    /// Delete a value; deleting a missing key is not an error
    fn remove_item(&mut self, key: &str) -> CommonResult<()>;
}

/// Directory-backed storage
#[derive(Debug, Clone)]
pub struct FileStorage {
    dir: PathBuf,
}

impl FileStorage {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn path_for(&self, key: &str) -> CommonResult<PathBuf> {
        validate_key(key)?;
        Ok(self.dir.join(format!("{}.json", key)))
    }
}

impl Storage for FileStorage {
    fn get_item(&self, key: &str) -> CommonResult<Option<String>> {
        let path = self.path_for(key)?;
        match fs::read_to_string(&path) {
            Ok(content) => Ok(Some(content)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    fn set_item(&mut self, key: &str, value: &str) -> CommonResult<()> {
        let path = self.path_for(key)?;
        fs::create_dir_all(&self.dir)?;

        // Write-then-rename so a crash never leaves a half-written value
        let tmp = path.with_extension("json.tmp");
        fs::write(&tmp, value)?;
        if let Err(e) = fs::rename(&tmp, &path) {
            let _ = fs::remove_file(&tmp);
            return Err(e.into());
        }

        tracing::debug!(key, bytes = value.len(), "stored item");
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> CommonResult<()> {
        let path = self.path_for(key)?;
        match fs::remove_file(&path) {
            Ok(()) => Ok(()),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(()),
            Err(e) => Err(e.into()),
        }
    }
}

/// In-memory storage
#[derive(Debug, Clone, Default)]
pub struct MemoryStorage {
    items: HashMap<String, String>,
}

impl MemoryStorage {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}

impl Storage for MemoryStorage {
    fn get_item(&self, key: &str) -> CommonResult<Option<String>> {
        Ok(self.items.get(key).cloned())
    }

    fn set_item(&mut self, key: &str, value: &str) -> CommonResult<()> {
        self.items.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove_item(&mut self, key: &str) -> CommonResult<()> {
        self.items.remove(key);
        Ok(())
    }
}

/// Keys become file names, so only a conservative alphabet is allowed
fn validate_key(key: &str) -> CommonResult<()> {
    let valid = !key.is_empty()
        && key
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-');

    if valid {
        Ok(())
    } else {
        Err(CommonError::InvalidKey(key.to_string()))
    }
}
