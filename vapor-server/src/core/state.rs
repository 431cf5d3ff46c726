//! Application state

use std::collections::HashSet;
use std::sync::Arc;

use crate::core::Config;
use crate::store::{KvStore, RedisStore};

/// Shared application state — everything behind `Arc`, cheap to clone into
/// each request handler.
///
/// | Field  | Meaning |
/// |--------|-----------------------------------------------|
/// | config | Immutable configuration                       |
/// | store  | Shared key-value store handle                 |
/// | admins | Admin allow-list, injected into the user repo |
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<Config>,
    pub store: Arc<dyn KvStore>,
    pub admins: Arc<HashSet<i64>>,
}

impl AppState {
    /// Connect to the configured store and build the state.
    pub async fn initialize(config: &Config) -> anyhow::Result<Self> {
        let store = RedisStore::connect(&config.redis_url).await?;
        Ok(Self::with_store(config.clone(), Arc::new(store)))
    }

    /// Build state over an existing store handle (tests, in-memory runs).
    pub fn with_store(config: Config, store: Arc<dyn KvStore>) -> Self {
        let admins = Arc::new(config.admin_set());
        Self {
            config: Arc::new(config),
            store,
            admins,
        }
    }
}
