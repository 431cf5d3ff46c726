//! Product Repository

use futures::future;
use std::sync::Arc;

use super::{BaseRepository, IdAllocator, RepoResult, counter_key, record_key};
use crate::db::models::{Product, ProductSave};
use crate::store::KvStore;
use crate::utils::now_millis;

pub(crate) const PRODUCT_ENTITY: &str = "product";

#[derive(Clone)]
pub struct ProductRepository {
    base: BaseRepository,
    allocator: IdAllocator,
}

impl ProductRepository {
    pub fn new(store: Arc<dyn KvStore>) -> Self {
        Self {
            allocator: IdAllocator::new(store.clone()),
            base: BaseRepository::new(store),
        }
    }

    /// All products, sorted by id ascending.
    pub async fn list(&self) -> RepoResult<Vec<Product>> {
        let counter = counter_key(PRODUCT_ENTITY);
        let keys: Vec<String> = self
            .base
            .store()
            .keys_with_prefix(&format!("{PRODUCT_ENTITY}:"))
            .await?
            .into_iter()
            .filter(|key| *key != counter)
            .collect();

        let records =
            future::try_join_all(keys.iter().map(|key| self.base.store().get_fields(key)))
                .await?;

        let mut products = records
            .iter()
            // a key can vanish between enumeration and load
            .filter(|record| !record.is_empty())
            .map(Product::from_fields)
            .collect::<RepoResult<Vec<_>>>()?;
        products.sort_by_key(|p| p.id);
        Ok(products)
    }

    /// Create or update. Without an id a fresh one is allocated; with an id
    /// the record at that key is overwritten in full, keeping its original
    /// `created_at`. `updated_at` is always stamped.
    pub async fn save(&self, data: ProductSave) -> RepoResult<Product> {
        let now = now_millis();
        let (id, created_at) = match data.id {
            Some(id) => {
                let existing = self
                    .base
                    .store()
                    .get_fields(&record_key(PRODUCT_ENTITY, id))
                    .await?;
                let created = existing
                    .get("created_at")
                    .and_then(|raw| raw.parse().ok())
                    .unwrap_or(now);
                (id, created)
            }
            None => (self.allocator.next(PRODUCT_ENTITY).await?, now),
        };

        let product = Product {
            id,
            name: data.name,
            category: data.category,
            price: data.price,
            stock: data.stock,
            description: data.description.unwrap_or_default(),
            emoji: data.emoji.unwrap_or_default(),
            created_at,
            updated_at: now,
        };

        self.base
            .store()
            .set_fields(&record_key(PRODUCT_ENTITY, id), &product.to_fields())
            .await?;
        Ok(product)
    }

    /// Remove a product; returns whether a record existed.
    pub async fn delete(&self, id: i64) -> RepoResult<bool> {
        Ok(self
            .base
            .store()
            .delete_key(&record_key(PRODUCT_ENTITY, id))
            .await?)
    }
}
