//! File-based storage backend
//!
//! Stores each slot as a JSON file in a data directory.

use std::fs;
use std::path::PathBuf;

use super::backend::StorageBackend;
use crate::Result;

/// Storage backend keeping each slot at `<data_dir>/<key>.json`
pub struct FileBackend {
    data_dir: PathBuf,
}

impl FileBackend {
    /// Create a new FileBackend rooted at the given directory
    ///
    /// The directory is created on first write if it does not exist.
    pub fn new(data_dir: impl Into<PathBuf>) -> Self {
        Self {
            data_dir: data_dir.into(),
        }
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.data_dir.join(format!("{}.json", key))
    }
}

impl StorageBackend for FileBackend {
    fn read(&self, key: &str) -> Result<Option<String>> {
        let path = self.slot_path(key);
        if !path.exists() {
            return Ok(None);
        }
        Ok(Some(fs::read_to_string(&path)?))
    }

    fn write(&self, key: &str, value: &str) -> Result<()> {
        fs::create_dir_all(&self.data_dir)?;
        fs::write(self.slot_path(key), value)?;
        Ok(())
    }
}
