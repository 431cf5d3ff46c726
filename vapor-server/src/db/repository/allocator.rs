//! Identifier Allocator
//!
//! Issues unique, strictly increasing integer ids per entity type off the
//! store's atomic counter increment. Ids start at 1 and are never reused,
//! even after the record they named is deleted. A crash between allocation
//! and the following save leaves a gap in the sequence; it can never
//! produce a duplicate.

use std::sync::Arc;

use super::{BaseRepository, RepoResult, counter_key};
use crate::store::KvStore;

#[derive(Clone)]
pub struct IdAllocator {
    base: BaseRepository,
}

impl IdAllocator {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Next id for `entity` ("product", "order", ...).
    pub async fn next(&self, entity: &str) -> RepoResult<i64> {
        Ok(self.base.store().increment(&counter_key(entity)).await?)
    }
}
