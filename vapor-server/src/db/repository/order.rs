//! Order Repository
//!
//! Orders are created once per checkout and never deleted; only their
//! status moves. Every mutation ends with a synchronous statistics
//! recompute — a full rescan, affordable at shop scale.

use futures::future;
use std::sync::Arc;

use super::{
    BaseRepository, IdAllocator, RepoResult, StatsRepository, counter_key, record_key,
};
use crate::db::models::{Order, OrderSave, STATUS_PENDING};
use crate::store::KvStore;
use crate::utils::now_millis;

pub(crate) const ORDER_ENTITY: &str = "order";

#[derive(Clone)]
pub struct OrderRepository {
    base: BaseRepository,
    allocator: IdAllocator,
}

impl OrderRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            allocator: IdAllocator::new(store.clone()),
            base: BaseRepository::new(store),
        }
    }

    /// All orders, sorted by id descending (most recent first).
    pub async fn list(&self) -> RepoResult<Vec<Order>> {
        let counter = counter_key(ORDER_ENTITY);
        let keys: Vec<String> = self
            .base
            .store()
            .keys_with_prefix(&format!("{ORDER_ENTITY}:"))
            .await?
            .into_iter()
            .filter(|key| *key != counter)
            .collect();

        let records =
            future::try_join_all(keys.iter().map(|key| self.base.store().get_fields(key)))
                .await?;

        let mut orders = records
            .iter()
            .filter(|record| !record.is_empty())
            .map(Order::from_fields)
            .collect::<RepoResult<Vec<_>>>()?;
        orders.sort_by_key(|o| std::cmp::Reverse(o.id));
        Ok(orders)
    }

    /// Orders of one user, filtered from the full list and preserving its
    /// descending order. No secondary index — O(total orders), which holds
    /// up only while per-user order counts stay small.
    pub async fn list_by_user(&self, user_id: i64) -> RepoResult<Vec<Order>> {
        let orders = self.list().await?;
        Ok(orders.into_iter().filter(|o| o.user_id == user_id).collect())
    }

    /// Persist a checkout. Allocates an id when absent, defaults `status`
    /// to "pending", keeps an existing record's `created_at` when an id is
    /// supplied. Recomputes statistics before returning.
    pub async fn save(&self, data: OrderSave) -> RepoResult<Order> {
        let now = now_millis();
        let (id, created_at) = match data.id {
            Some(id) => {
                let existing = self
                    .base
                    .store()
                    .get_fields(&record_key(ORDER_ENTITY, id))
                    .await?;
                let created = existing
                    .get("created_at")
                    .and_then(|raw| raw.parse().ok())
                    .unwrap_or(now);
                (id, created)
            }
            None => (self.allocator.next(ORDER_ENTITY).await?, now),
        };

        let order = Order {
            id,
            user_id: data.user_id,
            items: data.items,
            total: data.total,
            status: data.status.unwrap_or_else(|| STATUS_PENDING.to_string()),
            created_at,
            updated_at: now,
        };

        self.base
            .store()
            .set_fields(&record_key(ORDER_ENTITY, id), &order.to_fields()?)
            .await?;

        StatsRepository::new(self.base.share()).recompute().await?;
        Ok(order)
    }

    /// In-place status change, no full reload. Returns false when no such
    /// order exists. Recomputes statistics on success.
    pub async fn update_status(&self, id: i64, status: &str) -> RepoResult<bool> {
        let key = record_key(ORDER_ENTITY, id);
        if !self.base.store().exists(&key).await? {
            return Ok(false);
        }

        self.base
            .store()
            .set_fields(
                &key,
                &[
                    ("status".into(), status.to_string()),
                    ("updated_at".into(), now_millis().to_string()),
                ],
            )
            .await?;

        StatsRepository::new(self.base.share()).recompute().await?;
        Ok(true)
    }
}
