//! User Repository
//!
//! Constructed with the admin allow-list so `is_admin` derivation is
//! test-substitutable; the set is configuration, not data.

use std::collections::HashSet;
use std::sync::Arc;

use super::{BaseRepository, RepoResult, record_key};
use crate::db::models::{User, UserSave};
use crate::store::KvStore;
use crate::utils::now_millis;

pub(crate) const USER_ENTITY: &str = "user";

#[derive(Clone)]
pub struct UserRepository {
    base: BaseRepository,
    admins: Arc<HashSet<i64>>,
}

impl UserRepository {
    pub fn new(store: Arc<dyn KvStore>, admins: Arc<HashSet<i64>>) -> Self {
        Self {
            base: BaseRepository::new(store),
            admins,
        }
    }

    /// Load a profile; `None` when the id has never been saved.
    pub async fn get(&self, id: i64) -> RepoResult<Option<User>> {
        let record = self
            .base
            .store()
            .get_fields(&record_key(USER_ENTITY, id))
            .await?;
        if record.is_empty() {
            return Ok(None);
        }
        Ok(Some(User::from_fields(&record, &self.admins)?))
    }

    /// Full overwrite of the non-derived fields. `created_at` of an
    /// existing record is preserved; `updated_at` is always stamped.
    pub async fn save(&self, data: UserSave) -> RepoResult<User> {
        let now = now_millis();
        let key = record_key(USER_ENTITY, data.id);
        let existing = self.base.store().get_fields(&key).await?;
        let created_at = existing
            .get("created_at")
            .and_then(|raw| raw.parse().ok())
            .unwrap_or(now);

        let user = User {
            id: data.id,
            username: data.username,
            bonus: data.bonus,
            referrals: data.referrals,
            referral_code: data
                .referral_code
                .unwrap_or_else(|| User::default_referral_code(data.id)),
            is_admin: self.admins.contains(&data.id),
            created_at,
            updated_at: now,
        };

        self.base.store().set_fields(&key, &user.to_fields()?).await?;
        Ok(user)
    }

    /// Read-triggers-create: a miss synthesizes a fresh profile (zero
    /// bonus, no referrals, deterministic referral code), persists it and
    /// returns it. A later read sees the same record.
    pub async fn get_or_create(&self, id: i64, username: &str) -> RepoResult<User> {
        if let Some(user) = self.get(id).await? {
            return Ok(user);
        }

        tracing::info!(user_id = id, "Creating user profile on first contact");
        self.save(UserSave {
            id,
            username: username.to_string(),
            bonus: 0,
            referrals: Vec::new(),
            referral_code: None,
        })
        .await
    }

    /// Number of known users — key enumeration only, no record loads.
    pub async fn count(&self) -> RepoResult<usize> {
        Ok(self
            .base
            .store()
            .keys_with_prefix(&format!("{USER_ENTITY}:"))
            .await?
            .len())
    }
}
