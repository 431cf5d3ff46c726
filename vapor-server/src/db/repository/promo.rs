//! Promo Repository
//!
//! The promo code doubles as the record key, so uniqueness is an existence
//! check at creation. Two known races are accepted as-is, the store offers
//! no cheap compare-and-set for them: concurrent creates of one code can
//! both pass the check (the later write clobbers), and concurrent
//! redemptions near the limit can push `used` past `uses` — the limit
//! check and the increment are separate round-trips.

use futures::future;
use std::sync::Arc;

use super::{BaseRepository, RepoError, RepoResult, record_key};
use crate::db::models::{Promo, PromoApplied, PromoCreate};
use crate::store::KvStore;
use crate::utils::now_millis;

pub(crate) const PROMO_ENTITY: &str = "promo";

#[derive(Clone)]
pub struct PromoRepository {
    base: BaseRepository,
}

impl PromoRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            base: BaseRepository::new(store),
        }
    }

    /// All promo codes, unordered.
    pub async fn list(&self) -> RepoResult<Vec<Promo>> {
        let keys = self
            .base
            .store()
            .keys_with_prefix(&format!("{PROMO_ENTITY}:"))
            .await?;

        let records =
            future::try_join_all(keys.iter().map(|key| self.base.store().get_fields(key)))
                .await?;

        records
            .iter()
            .filter(|record| !record.is_empty())
            .map(Promo::from_fields)
            .collect()
    }

    /// Create a promo code; Duplicate when the code is already taken.
    pub async fn create(&self, data: PromoCreate) -> RepoResult<Promo> {
        let key = record_key(PROMO_ENTITY, &data.code);
        if self.base.store().exists(&key).await? {
            return Err(RepoError::Duplicate(format!(
                "Promo code '{}' already exists",
                data.code
            )));
        }

        let now = now_millis();
        let promo = Promo {
            code: data.code,
            discount: data.discount,
            uses: data.uses,
            used: 0,
            created_at: now,
            updated_at: now,
        };

        self.base.store().set_fields(&key, &promo.to_fields()).await?;
        Ok(promo)
    }

    /// Redeem a code for `user_id`. NotFound for an unknown code,
    /// LimitReached once `used` has caught up with `uses`; otherwise the
    /// redemption counter is incremented atomically and the discount
    /// percentage returned.
    pub async fn apply(&self, code: &str, user_id: i64) -> RepoResult<PromoApplied> {
        let key = record_key(PROMO_ENTITY, code);
        let record = self.base.store().get_fields(&key).await?;
        if record.is_empty() {
            return Err(RepoError::NotFound(format!("Promo code '{code}'")));
        }

        let promo = Promo::from_fields(&record)?;
        if promo.used >= promo.uses {
            return Err(RepoError::LimitReached(format!(
                "Promo code '{code}' has no redemptions left"
            )));
        }

        let used = self.base.store().increment_field(&key, "used").await?;
        self.base
            .store()
            .set_fields(&key, &[("updated_at".into(), now_millis().to_string())])
            .await?;

        tracing::info!(code, user_id, used, "Promo code applied");
        Ok(PromoApplied {
            code: promo.code,
            discount: promo.discount,
            used,
        })
    }
}
