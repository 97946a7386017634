//! Implements a store that keeps each slot in its own file.

use std::{
    fs,
    io::ErrorKind,
    path::{Path, PathBuf},
};

use crate::stores::{KeyValueStore, StoreError};

/// Keeps the slot `key` in the file `<directory>/<key>.json`.
///
/// The directory is created on the first save. Writes go to a temporary file
/// that is then renamed over the slot, so a crash mid-write leaves the
/// previous contents intact.
#[derive(Debug, Clone)]
pub struct FileStore {
    directory: PathBuf,
}

impl FileStore {
    /// Create a store rooted at `directory`.
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// The directory the slot files are written to.
    pub fn directory(&self) -> &Path {
        &self.directory
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.directory.join(format!("{key}.json"))
    }
}

impl KeyValueStore for FileStore {
    fn load(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        match fs::read(self.slot_path(key)) {
            Ok(bytes) => Ok(Some(bytes)),
            Err(error) if error.kind() == ErrorKind::NotFound => Ok(None),
            Err(error) => Err(error.into()),
        }
    }

    fn save(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        fs::create_dir_all(&self.directory)?;

        let path = self.slot_path(key);
        let temp_path = path.with_extension("json.tmp");
        fs::write(&temp_path, value)?;
        fs::rename(&temp_path, &path)?;

        tracing::debug!("wrote {} bytes to {}", value.len(), path.display());

        Ok(())
    }
}
