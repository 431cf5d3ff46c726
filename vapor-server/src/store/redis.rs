//! Redis store backend
//!
//! One [`ConnectionManager`] for the whole process; it multiplexes requests
//! and owns reconnection, so every call just clones the handle. Matches the
//! single-shared-connection model the rest of the system assumes.

use async_trait::async_trait;
use redis::AsyncCommands;
use redis::aio::ConnectionManager;
use std::collections::HashMap;

use super::{KvStore, StoreError, StoreResult};

fn map_err(err: redis::RedisError) -> StoreError {
    if err.is_io_error() || err.is_timeout() || err.is_connection_refusal() {
        StoreError::Connection(err.to_string())
    } else {
        StoreError::Operation(err.to_string())
    }
}

/// Redis-backed [`KvStore`]
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connect to the store at `url` (e.g. `redis://127.0.0.1:6379`).
    pub async fn connect(url: &str) -> StoreResult<Self> {
        let client = redis::Client::open(url).map_err(map_err)?;
        let conn = ConnectionManager::new(client).await.map_err(map_err)?;
        tracing::info!("Redis connection established");
        Ok(Self { conn })
    }
}

#[async_trait]
impl KvStore for RedisStore {
    async fn increment(&self, key: &str) -> StoreResult<i64> {
        let mut conn = self.conn.clone();
        conn.incr(key, 1i64).await.map_err(map_err)
    }

    async fn increment_field(&self, key: &str, field: &str) -> StoreResult<i64> {
        let mut conn = self.conn.clone();
        conn.hincr(key, field, 1i64).await.map_err(map_err)
    }

    async fn set_fields(&self, key: &str, fields: &[(String, String)]) -> StoreResult<()> {
        let mut conn = self.conn.clone();
        conn.hset_multiple(key, fields).await.map_err(map_err)
    }

    async fn get_fields(&self, key: &str) -> StoreResult<HashMap<String, String>> {
        let mut conn = self.conn.clone();
        conn.hgetall(key).await.map_err(map_err)
    }

    async fn delete_key(&self, key: &str) -> StoreResult<bool> {
        let mut conn = self.conn.clone();
        let removed: i64 = conn.del(key).await.map_err(map_err)?;
        Ok(removed > 0)
    }

    async fn keys_with_prefix(&self, prefix: &str) -> StoreResult<Vec<String>> {
        // KEYS is O(N) over the keyspace; fine at shop scale, SCAN would be
        // the replacement if the catalog ever grows beyond it.
        let mut conn = self.conn.clone();
        conn.keys(format!("{prefix}*")).await.map_err(map_err)
    }

    async fn exists(&self, key: &str) -> StoreResult<bool> {
        let mut conn = self.conn.clone();
        conn.exists(key).await.map_err(map_err)
    }
}
