use std::collections::HashMap;
use std::sync::atomic::{AtomicBool, Ordering};

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::storage::{KeyValueStore, StorageError};

/// In-process store for tests and ephemeral runs. `fail_writes` makes every
/// `set` return an error, for exercising the persist-failure path.
#[derive(Default)]
pub struct MemoryStore {
    values: RwLock<HashMap<String, String>>,
    fail_writes: AtomicBool,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_value(key: &str, value: &str) -> Self {
        Self {
            values: RwLock::new(HashMap::from([(key.to_string(), value.to_string())])),
            fail_writes: AtomicBool::new(false),
        }
    }

    pub fn fail_writes(&self, fail: bool) {
        self.fail_writes.store(fail, Ordering::SeqCst);
    }
}

#[async_trait]
impl KeyValueStore for MemoryStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        Ok(self.values.read().await.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        if self.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Io(std::io::Error::other("writes disabled")));
        }
        self.values
            .write()
            .await
            .insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}
