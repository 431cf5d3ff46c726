//! Sample catalog seeding
//!
//! A fresh store starts with a small demo catalog so the storefront is not
//! empty on first launch. Runs through the normal save path, so the
//! samples get allocator ids like any other product. No-op once the
//! catalog has anything in it.

use std::sync::Arc;

use crate::db::models::ProductSave;
use crate::db::repository::{ProductRepository, RepoResult};
use crate::store::KvStore;

fn sample(name: &str, category: &str, price: i64, stock: i64, description: &str, emoji: &str) -> ProductSave {
    ProductSave {
        id: None,
        name: name.into(),
        category: category.into(),
        price,
        stock,
        description: Some(description.into()),
        emoji: Some(emoji.into()),
    }
}

/// Seed the demo catalog when the store is empty.
pub async fn seed_catalog(store: Arc<dyn KvStore>) -> RepoResult<()> {
    let repo = ProductRepository::new(store);
    if !repo.list().await?.is_empty() {
        return Ok(());
    }

    let samples = [
        sample("Mango Liquid", "liquids", 450, 10, "Sweet mango flavour", "🥭"),
        sample("JUUL Cartridge", "cartridges", 300, 20, "Original JUUL cartridges", "💨"),
        sample("RELX Mint Pod", "pods", 280, 12, "Fresh mint flavour", "🔥"),
        sample("Vaporesso XROS 3", "devices", 2800, 5, "Compact pod system", "⚡"),
    ];

    let count = samples.len();
    for product in samples {
        repo.save(product).await?;
    }
    tracing::info!(count, "Seeded sample catalog");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[tokio::test]
    async fn seeding_is_idempotent() {
        let store: Arc<dyn KvStore> = Arc::new(MemoryStore::new());
        seed_catalog(store.clone()).await.unwrap();
        seed_catalog(store.clone()).await.unwrap();

        let products = ProductRepository::new(store).list().await.unwrap();
        assert_eq!(products.len(), 4);
        assert_eq!(products[0].id, 1);
        assert_eq!(products[0].name, "Mango Liquid");
    }
}
