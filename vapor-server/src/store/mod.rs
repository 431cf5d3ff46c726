//! Key-Value Store Client
//!
//! The persistence collaborator: a network-addressable key-value store that
//! keeps every entity as a hash record (`"<entity>:<id>"`) next to plain
//! counter keys (`"<entity>:counter"`). The [`KvStore`] trait captures the
//! handful of primitives the repositories need; backends:
//!
//! - [`RedisStore`] - production backend over a shared async connection manager
//! - [`MemoryStore`] - in-process backend for tests and offline runs
//!
//! Individual primitives are atomic at the store; nothing in this layer
//! spans more than one round-trip, and there is no retry policy beyond what
//! the connection manager does on its own.

pub mod memory;
pub mod redis;

pub use memory::MemoryStore;
pub use redis::RedisStore;

use async_trait::async_trait;
use std::collections::HashMap;
use thiserror::Error;

/// Store error types
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Store unreachable: {0}")]
    Connection(String),

    #[error("Store operation failed: {0}")]
    Operation(String),
}

/// Result type for store operations
pub type StoreResult<T> = Result<T, StoreError>;

/// Key-value store primitives used by the repository layer
#[async_trait]
pub trait KvStore: Send + Sync {
    /// Atomically increment a plain counter key, returning the new value.
    /// A missing key counts from zero, so the first call returns 1.
    async fn increment(&self, key: &str) -> StoreResult<i64>;

    /// Atomically increment one integer field of a hash record,
    /// returning the new value.
    async fn increment_field(&self, key: &str, field: &str) -> StoreResult<i64>;

    /// Write the given fields of a hash record, creating it when absent.
    /// Only the supplied fields are touched.
    async fn set_fields(&self, key: &str, fields: &[(String, String)]) -> StoreResult<()>;

    /// Read all fields of a hash record; empty map when the key is absent.
    async fn get_fields(&self, key: &str) -> StoreResult<HashMap<String, String>>;

    /// Remove a key; returns whether it existed.
    async fn delete_key(&self, key: &str) -> StoreResult<bool>;

    /// Enumerate keys starting with `prefix` (counter keys included —
    /// callers filter).
    async fn keys_with_prefix(&self, prefix: &str) -> StoreResult<Vec<String>>;

    /// Whether a key exists.
    async fn exists(&self, key: &str) -> StoreResult<bool>;
}
