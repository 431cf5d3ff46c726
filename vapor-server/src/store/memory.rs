//! In-memory store backend
//!
//! Same contract as the Redis backend, held in a process-local map. Used by
//! the test suites and for running the server without a store at hand.
//! Mirrors Redis semantics where they matter: counters and hashes are
//! distinct key types, HGETALL of a missing key is an empty map, and key
//! enumeration sees counter keys too.

use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::{BTreeMap, HashMap};

use super::{KvStore, StoreError, StoreResult};

#[derive(Debug, Clone)]
enum Entry {
    Counter(i64),
    Record(HashMap<String, String>),
}

fn wrong_type(key: &str) -> StoreError {
    StoreError::Operation(format!(
        "key '{key}' holds a value of the wrong type for this operation"
    ))
}

/// In-memory [`KvStore`]
#[derive(Default)]
pub struct MemoryStore {
    entries: Mutex<BTreeMap<String, Entry>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl KvStore for MemoryStore {
    async fn increment(&self, key: &str) -> StoreResult<i64> {
        let mut entries = self.entries.lock();
        match entries
            .entry(key.to_string())
            .or_insert(Entry::Counter(0))
        {
            Entry::Counter(value) => {
                *value += 1;
                Ok(*value)
            }
            Entry::Record(_) => Err(wrong_type(key)),
        }
    }

    async fn increment_field(&self, key: &str, field: &str) -> StoreResult<i64> {
        let mut entries = self.entries.lock();
        match entries
            .entry(key.to_string())
            .or_insert_with(|| Entry::Record(HashMap::new()))
        {
            Entry::Record(fields) => {
                let current: i64 = match fields.get(field) {
                    Some(raw) => raw.parse().map_err(|_| {
                        StoreError::Operation(format!(
                            "field '{field}' of '{key}' is not an integer"
                        ))
                    })?,
                    None => 0,
                };
                let next = current + 1;
                fields.insert(field.to_string(), next.to_string());
                Ok(next)
            }
            Entry::Counter(_) => Err(wrong_type(key)),
        }
    }

    async fn set_fields(&self, key: &str, fields: &[(String, String)]) -> StoreResult<()> {
        let mut entries = self.entries.lock();
        match entries
            .entry(key.to_string())
            .or_insert_with(|| Entry::Record(HashMap::new()))
        {
            Entry::Record(record) => {
                for (name, value) in fields {
                    record.insert(name.clone(), value.clone());
                }
                Ok(())
            }
            Entry::Counter(_) => Err(wrong_type(key)),
        }
    }

    async fn get_fields(&self, key: &str) -> StoreResult<HashMap<String, String>> {
        let entries = self.entries.lock();
        match entries.get(key) {
            Some(Entry::Record(fields)) => Ok(fields.clone()),
            Some(Entry::Counter(_)) => Err(wrong_type(key)),
            None => Ok(HashMap::new()),
        }
    }

    async fn delete_key(&self, key: &str) -> StoreResult<bool> {
        Ok(self.entries.lock().remove(key).is_some())
    }

    async fn keys_with_prefix(&self, prefix: &str) -> StoreResult<Vec<String>> {
        let entries = self.entries.lock();
        Ok(entries
            .keys()
            .filter(|k| k.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn exists(&self, key: &str) -> StoreResult<bool> {
        Ok(self.entries.lock().contains_key(key))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn increment_counts_from_one() {
        let store = MemoryStore::new();
        assert_eq!(store.increment("product:counter").await.unwrap(), 1);
        assert_eq!(store.increment("product:counter").await.unwrap(), 2);
        assert_eq!(store.increment("order:counter").await.unwrap(), 1);
    }

    #[tokio::test]
    async fn missing_record_reads_as_empty() {
        let store = MemoryStore::new();
        assert!(store.get_fields("product:99").await.unwrap().is_empty());
        assert!(!store.exists("product:99").await.unwrap());
    }

    #[tokio::test]
    async fn set_fields_merges_per_field() {
        let store = MemoryStore::new();
        store
            .set_fields("user:1", &[("username".into(), "amber".into())])
            .await
            .unwrap();
        store
            .set_fields("user:1", &[("bonus".into(), "50".into())])
            .await
            .unwrap();
        let fields = store.get_fields("user:1").await.unwrap();
        assert_eq!(fields.get("username").map(String::as_str), Some("amber"));
        assert_eq!(fields.get("bonus").map(String::as_str), Some("50"));
    }

    #[tokio::test]
    async fn prefix_enumeration_includes_counters() {
        let store = MemoryStore::new();
        store.increment("product:counter").await.unwrap();
        store
            .set_fields("product:1", &[("name".into(), "Mango".into())])
            .await
            .unwrap();
        let mut keys = store.keys_with_prefix("product:").await.unwrap();
        keys.sort();
        assert_eq!(keys, vec!["product:1", "product:counter"]);
    }

    #[tokio::test]
    async fn delete_reports_prior_existence() {
        let store = MemoryStore::new();
        store
            .set_fields("promo:SALE", &[("discount".into(), "10".into())])
            .await
            .unwrap();
        assert!(store.delete_key("promo:SALE").await.unwrap());
        assert!(!store.delete_key("promo:SALE").await.unwrap());
    }

    #[tokio::test]
    async fn increment_field_rejects_non_integer() {
        let store = MemoryStore::new();
        store
            .set_fields("promo:SALE", &[("used".into(), "oops".into())])
            .await
            .unwrap();
        assert!(store.increment_field("promo:SALE", "used").await.is_err());
        assert_eq!(
            store.increment_field("promo:FRESH", "used").await.unwrap(),
            1
        );
    }
}
