//! Durable key-value persistence for the one résumé record.
//!
//! `ResumeStore` owns the in-memory record and writes every replacement through
//! a `KeyValueStore` backend. Backends are swapped at startup via
//! `STORAGE_BACKEND`; `AppState` carries the store, which carries an
//! `Arc<dyn KeyValueStore>`.

pub mod file;
pub mod memory;
pub mod redis;
pub mod store;

use async_trait::async_trait;
use thiserror::Error;

pub use file::FileStore;
pub use memory::MemoryStore;
pub use redis::RedisStore;
pub use store::ResumeStore;

#[derive(Debug, Error)]
pub enum StorageError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Redis error: {0}")]
    Redis(#[from] ::redis::RedisError),

    #[error("invalid storage key: {0}")]
    InvalidKey(String),

    #[error("storage task failed: {0}")]
    Task(String),
}

// ────────────────────────────────────────────────────────────────────────────
// Trait definition
// ────────────────────────────────────────────────────────────────────────────

/// A string-valued store addressed by key. `get` on an absent key is `Ok(None)`.
#[async_trait]
pub trait KeyValueStore: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Short backend name for logs.
    fn backend(&self) -> &'static str;
}
