use std::io::Write;
use std::path::{Path, PathBuf};

use async_trait::async_trait;

use crate::storage::{KeyValueStore, StorageError};

/// One `{key}.json` file per key under `dir`. Writes go to a temp file in the
/// same directory and are renamed over the target, so a reader never sees a
/// half-written value.
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    fn path_for(&self, key: &str) -> Result<PathBuf, StorageError> {
        let valid = !key.is_empty()
            && key
                .chars()
                .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_' || c == '.')
            && !key.starts_with('.');
        if !valid {
            return Err(StorageError::InvalidKey(key.to_string()));
        }
        Ok(self.dir.join(format!("{key}.json")))
    }
}

fn write_atomic(dir: &Path, target: &Path, value: &str) -> Result<(), StorageError> {
    std::fs::create_dir_all(dir)?;
    let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
    tmp.write_all(value.as_bytes())?;
    tmp.as_file().sync_all()?;
    tmp.persist(target).map_err(|e| StorageError::Io(e.error))?;
    Ok(())
}

#[async_trait]
impl KeyValueStore for FileStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let path = self.path_for(key)?;
        match tokio::fs::read_to_string(&path).await {
            Ok(value) => Ok(Some(value)),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e.into()),
        }
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let target = self.path_for(key)?;
        let dir = self.dir.clone();
        let value = value.to_string();
        tokio::task::spawn_blocking(move || write_atomic(&dir, &target, &value))
            .await
            .map_err(|e| StorageError::Task(e.to_string()))?
    }

    fn backend(&self) -> &'static str {
        "file"
    }
}
