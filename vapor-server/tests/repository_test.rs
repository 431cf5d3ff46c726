//! Repository integration tests over the in-memory store backend.

use std::collections::HashSet;
use std::sync::Arc;
use std::time::Duration;

use vapor_server::db::models::{
    OrderItem, OrderSave, ProductSave, PromoCreate, STATUS_COMPLETED, UserSave,
};
use vapor_server::db::repository::{
    OrderRepository, ProductRepository, PromoRepository, RepoError, StatsRepository,
    UserRepository,
};
use vapor_server::store::{KvStore, MemoryStore};

fn store() -> Arc<dyn KvStore> {
    Arc::new(MemoryStore::new())
}

fn product(name: &str, price: i64) -> ProductSave {
    ProductSave {
        id: None,
        name: name.into(),
        category: "liquids".into(),
        price,
        stock: 10,
        description: None,
        emoji: None,
    }
}

fn order(user_id: i64, total: i64) -> OrderSave {
    OrderSave {
        id: None,
        user_id,
        items: vec![OrderItem {
            product_id: 1,
            name: "Mango Liquid".into(),
            price: total,
            quantity: 1,
        }],
        total,
        status: None,
    }
}

fn users(store: &Arc<dyn KvStore>, admins: &[i64]) -> UserRepository {
    UserRepository::new(
        store.clone(),
        Arc::new(admins.iter().copied().collect::<HashSet<i64>>()),
    )
}

// ---------------------------------------------------------------------------
// Products
// ---------------------------------------------------------------------------

#[tokio::test]
async fn product_ids_are_sequential_and_list_sorted_ascending() {
    let store = store();
    let repo = ProductRepository::new(store.clone());

    for i in 0..5 {
        repo.save(product(&format!("Liquid {i}"), 100 + i)).await.unwrap();
    }

    let listed = repo.list().await.unwrap();
    let ids: Vec<i64> = listed.iter().map(|p| p.id).collect();
    assert_eq!(ids, vec![1, 2, 3, 4, 5]);
}

#[tokio::test]
async fn product_update_preserves_created_at_and_refreshes_updated_at() {
    let store = store();
    let repo = ProductRepository::new(store.clone());

    let created = repo.save(product("Mango Liquid", 450)).await.unwrap();
    tokio::time::sleep(Duration::from_millis(5)).await;

    let updated = repo
        .save(ProductSave {
            id: Some(created.id),
            price: 400,
            ..product("Mango Liquid", 450)
        })
        .await
        .unwrap();

    assert_eq!(updated.id, created.id);
    assert_eq!(updated.created_at, created.created_at);
    assert!(updated.updated_at >= created.updated_at);
    assert_eq!(updated.price, 400);

    // the overwrite is visible on the next list, under the same id
    let listed = repo.list().await.unwrap();
    assert_eq!(listed.len(), 1);
    assert_eq!(listed[0].price, 400);
}

#[tokio::test]
async fn product_delete_reports_existence() {
    let store = store();
    let repo = ProductRepository::new(store.clone());

    assert!(!repo.delete(42).await.unwrap());

    let saved = repo.save(product("Mango Liquid", 450)).await.unwrap();
    assert!(repo.delete(saved.id).await.unwrap());
    assert!(repo.list().await.unwrap().is_empty());
}

#[tokio::test]
async fn deleted_product_id_is_never_reissued() {
    let store = store();
    let repo = ProductRepository::new(store.clone());

    let first = repo.save(product("Mango Liquid", 450)).await.unwrap();
    repo.delete(first.id).await.unwrap();

    let second = repo.save(product("RELX Mint Pod", 280)).await.unwrap();
    assert_eq!(second.id, first.id + 1);
}

// ---------------------------------------------------------------------------
// Orders
// ---------------------------------------------------------------------------

#[tokio::test]
async fn orders_list_descending_and_filter_by_user() {
    let store = store();
    let repo = OrderRepository::new(store.clone());

    repo.save(order(42, 450)).await.unwrap();
    repo.save(order(7, 300)).await.unwrap();
    repo.save(order(42, 2800)).await.unwrap();

    let all = repo.list().await.unwrap();
    let ids: Vec<i64> = all.iter().map(|o| o.id).collect();
    assert_eq!(ids, vec![3, 2, 1]);

    let expected: Vec<i64> = all
        .iter()
        .filter(|o| o.user_id == 42)
        .map(|o| o.id)
        .collect();
    let mine = repo.list_by_user(42).await.unwrap();
    assert_eq!(mine.iter().map(|o| o.id).collect::<Vec<_>>(), expected);
    assert_eq!(expected, vec![3, 1]);
}

#[tokio::test]
async fn order_defaults_status_to_pending_and_round_trips_items() {
    let store = store();
    let repo = OrderRepository::new(store.clone());

    let saved = repo.save(order(42, 450)).await.unwrap();
    assert_eq!(saved.status, "pending");

    let listed = repo.list().await.unwrap();
    assert_eq!(listed[0].items, saved.items);
}

#[tokio::test]
async fn update_status_of_missing_order_returns_false() {
    let store = store();
    let repo = OrderRepository::new(store.clone());

    assert!(!repo.update_status(99, STATUS_COMPLETED).await.unwrap());

    let saved = repo.save(order(42, 450)).await.unwrap();
    assert!(repo.update_status(saved.id, STATUS_COMPLETED).await.unwrap());
    assert_eq!(repo.list().await.unwrap()[0].status, STATUS_COMPLETED);
}

// ---------------------------------------------------------------------------
// Statistics
// ---------------------------------------------------------------------------

#[tokio::test]
async fn revenue_tracks_completed_orders_only() {
    let store = store();
    let orders = OrderRepository::new(store.clone());
    let stats = StatsRepository::new(store.clone());

    let a = orders.save(order(42, 450)).await.unwrap();
    let b = orders.save(order(42, 300)).await.unwrap();
    orders.save(order(7, 2800)).await.unwrap();

    orders.update_status(a.id, STATUS_COMPLETED).await.unwrap();
    orders.update_status(b.id, STATUS_COMPLETED).await.unwrap();

    let current = stats.get().await.unwrap();
    assert_eq!(current.total_orders, 3);
    assert_eq!(current.total_revenue, 750);

    // cancelling a completed order pulls its total back out
    orders.update_status(b.id, "cancelled").await.unwrap();
    assert_eq!(stats.get().await.unwrap().total_revenue, 450);
}

#[tokio::test]
async fn stats_get_lazily_initializes_the_singleton() {
    let store = store();
    let products = ProductRepository::new(store.clone());
    products.save(product("Mango Liquid", 450)).await.unwrap();

    let stats = StatsRepository::new(store.clone());
    let current = stats.get().await.unwrap();
    assert_eq!(current.total_products, 1);
    assert_eq!(current.total_orders, 0);
    assert_eq!(current.total_revenue, 0);
}

#[tokio::test]
async fn stats_count_users() {
    let store = store();
    let users = users(&store, &[]);
    users.get_or_create(42, "amber").await.unwrap();
    users.get_or_create(43, "kit").await.unwrap();

    let stats = StatsRepository::new(store.clone());
    assert_eq!(stats.recompute().await.unwrap().total_users, 2);
}

// ---------------------------------------------------------------------------
// Users
// ---------------------------------------------------------------------------

#[tokio::test]
async fn get_or_create_synthesizes_and_persists_a_profile() {
    let store = store();
    let repo = users(&store, &[]);

    assert!(repo.get(42).await.unwrap().is_none());

    let fresh = repo.get_or_create(42, "amber").await.unwrap();
    assert_eq!(fresh.bonus, 0);
    assert!(fresh.referrals.is_empty());
    assert!(!fresh.is_admin);
    assert_eq!(fresh.referral_code, "ref_42");

    // second read returns the persisted record unchanged
    let again = repo.get_or_create(42, "someone-else").await.unwrap();
    assert_eq!(again, fresh);
}

#[tokio::test]
async fn admin_flag_follows_the_injected_allow_list() {
    let store = store();

    let as_member = users(&store, &[]).get_or_create(42, "amber").await.unwrap();
    assert!(!as_member.is_admin);

    // same record, different configuration
    let as_admin = users(&store, &[42]).get(42).await.unwrap().unwrap();
    assert!(as_admin.is_admin);
}

#[tokio::test]
async fn save_overwrites_profile_fields() {
    let store = store();
    let repo = users(&store, &[]);

    repo.get_or_create(42, "amber").await.unwrap();
    let updated = repo
        .save(UserSave {
            id: 42,
            username: "amber".into(),
            bonus: 150,
            referrals: vec![43, 44],
            referral_code: None,
        })
        .await
        .unwrap();

    assert_eq!(updated.bonus, 150);
    assert_eq!(updated.referrals, vec![43, 44]);

    let reloaded = repo.get(42).await.unwrap().unwrap();
    assert_eq!(reloaded, updated);
}

// ---------------------------------------------------------------------------
// Promos
// ---------------------------------------------------------------------------

#[tokio::test]
async fn promo_create_rejects_duplicate_codes() {
    let store = store();
    let repo = PromoRepository::new(store.clone());

    let data = PromoCreate {
        code: "SUMMER".into(),
        discount: 15,
        uses: 10,
    };
    let created = repo.create(data.clone()).await.unwrap();
    assert_eq!(created.used, 0);

    assert!(matches!(
        repo.create(data).await,
        Err(RepoError::Duplicate(_))
    ));
}

#[tokio::test]
async fn single_use_promo_is_exhausted_after_one_redemption() {
    let store = store();
    let repo = PromoRepository::new(store.clone());

    repo.create(PromoCreate {
        code: "ONCE".into(),
        discount: 20,
        uses: 1,
    })
    .await
    .unwrap();

    let applied = repo.apply("ONCE", 42).await.unwrap();
    assert_eq!(applied.discount, 20);
    assert_eq!(applied.used, 1);

    assert!(matches!(
        repo.apply("ONCE", 43).await,
        Err(RepoError::LimitReached(_))
    ));
}

#[tokio::test]
async fn applying_an_unknown_code_is_not_found() {
    let store = store();
    let repo = PromoRepository::new(store.clone());
    assert!(matches!(
        repo.apply("NOPE", 42).await,
        Err(RepoError::NotFound(_))
    ));
}
