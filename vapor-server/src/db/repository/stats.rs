//! Statistics Aggregator
//!
//! Pull-based materialized view: the singleton record is recomputed from
//! the full entity set on every order mutation and cached at a fixed key.
//! O(N) per recompute; incremental counters are the upgrade path if the
//! shop ever outgrows it.

use std::sync::Arc;

use super::user::USER_ENTITY;
use super::{BaseRepository, OrderRepository, ProductRepository, RepoResult};
use crate::db::models::{STATUS_COMPLETED, Stats};
use crate::store::KvStore;
use crate::utils::now_millis;

const STATS_KEY: &str = "stats";

#[derive(Clone)]
pub struct StatsRepository {
    base: BaseRepository,
}

impl StatsRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// Rescan everything and overwrite the singleton record.
    pub async fn recompute(&self) -> RepoResult<Stats> {
        let products = ProductRepository::new(self.base.share()).list().await?;
        let orders = OrderRepository::new(self.base.share()).list().await?;
        let total_users = self
            .base
            .store()
            .keys_with_prefix(&format!("{USER_ENTITY}:"))
            .await?
            .len() as i64;

        let total_revenue = orders
            .iter()
            .filter(|o| o.status == STATUS_COMPLETED)
            .map(|o| o.total)
            .sum();

        let stats = Stats {
            total_orders: orders.len() as i64,
            total_products: products.len() as i64,
            total_users,
            total_revenue,
            updated_at: now_millis(),
        };

        self.base
            .store()
            .set_fields(STATS_KEY, &stats.to_fields())
            .await?;
        Ok(stats)
    }

    /// Cached singleton; computed first when nothing has been cached yet.
    pub async fn get(&self) -> RepoResult<Stats> {
        let record = self.base.store().get_fields(STATS_KEY).await?;
        if record.is_empty() {
            return self.recompute().await;
        }
        Stats::from_fields(&record)
    }
}
