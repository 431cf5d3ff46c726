//! Repository Module
//!
//! Maps the domain entities onto store records. Every repository is a thin
//! struct over the shared store handle, built per request; no repository
//! operation spans more than one store round-trip atomically, except where
//! a single atomic increment is used directly (id allocation, promo
//! redemption counter).
//!
//! Key layout: `"<entity>:<id>"` hash records (`promo:<code>` for promos),
//! `"<entity>:counter"` allocator keys, `"stats"` singleton.

pub mod allocator;
pub mod order;
pub mod product;
pub mod promo;
pub mod stats;
pub mod user;

// Re-exports
pub use allocator::IdAllocator;
pub use order::OrderRepository;
pub use product::ProductRepository;
pub use promo::PromoRepository;
pub use stats::StatsRepository;
pub use user::UserRepository;

use std::fmt::Display;
use std::sync::Arc;
use thiserror::Error;

use crate::store::{KvStore, StoreError};

/// Repository error types
#[derive(Debug, Error)]
pub enum RepoError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Duplicate: {0}")]
    Duplicate(String),

    #[error("Limit reached: {0}")]
    LimitReached(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Store error: {0}")]
    Store(String),
}

impl From<StoreError> for RepoError {
    fn from(err: StoreError) -> Self {
        RepoError::Store(err.to_string())
    }
}

/// Result type for repository operations
pub type RepoResult<T> = Result<T, RepoError>;

/// Record key: `"<entity>:<id>"`
pub(crate) fn record_key(entity: &str, id: impl Display) -> String {
    format!("{entity}:{id}")
}

/// Allocator state key: `"<entity>:counter"`
pub(crate) fn counter_key(entity: &str) -> String {
    format!("{entity}:counter")
}

/// Base repository with the shared store handle
#[derive(Clone)]
pub struct BaseRepository {
    store: Arc<dyn KvStore>,
}

impl BaseRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &dyn KvStore {
        self.store.as_ref()
    }

    /// Clone of the handle, for building sibling repositories.
    pub fn share(&self) -> Arc<dyn KvStore> {
        self.store.clone()
    }
}
