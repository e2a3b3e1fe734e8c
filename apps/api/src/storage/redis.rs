use async_trait::async_trait;
use redis::AsyncCommands;

use crate::storage::{KeyValueStore, StorageError};

/// Plain `GET`/`SET` on the key. Each call opens a multiplexed connection
/// from the shared client.
pub struct RedisStore {
    client: redis::Client,
}

impl RedisStore {
    pub fn new(client: redis::Client) -> Self {
        Self { client }
    }

    pub fn open(url: &str) -> Result<Self, StorageError> {
        Ok(Self::new(redis::Client::open(url)?))
    }
}

#[async_trait]
impl KeyValueStore for RedisStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        let value: Option<String> = conn.get(key).await?;
        Ok(value)
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut conn = self.client.get_multiplexed_async_connection().await?;
        conn.set::<_, _, ()>(key, value).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
