//! Memory Store Module
//!
//! In-process record store with the same observable semantics as the Redis
//! hash commands the service relies on.

use std::collections::HashMap;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{Result, ShopError};
use crate::store::{HashRecord, RecordStore};

// == Memory Store ==
/// Hash records held in a `HashMap` behind an async lock.
#[derive(Debug, Default)]
pub struct MemoryStore {
    /// Key to record storage
    records: RwLock<HashMap<String, HashRecord>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    // == Length ==
    /// Returns the number of keys currently stored.
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if no key is stored.
    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl RecordStore for MemoryStore {
    async fn write(&self, key: &str, fields: &[(String, String)]) -> Result<()> {
        if fields.is_empty() {
            return Ok(());
        }

        let mut records = self.records.write().await;
        let record = records.entry(key.to_string()).or_default();
        for (field, value) in fields {
            record.set(field.as_str(), value.as_str());
        }
        Ok(())
    }

    async fn read_all(&self, key: &str) -> Result<HashRecord> {
        let records = self.records.read().await;
        Ok(records.get(key).cloned().unwrap_or_default())
    }

    async fn read_field(&self, key: &str, field: &str) -> Result<Option<String>> {
        let records = self.records.read().await;
        Ok(records
            .get(key)
            .and_then(|record| record.get(field))
            .map(str::to_string))
    }

    async fn scan_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let records = self.records.read().await;
        Ok(records
            .keys()
            .filter(|key| key.starts_with(prefix))
            .cloned()
            .collect())
    }

    async fn increment_field(&self, key: &str, field: &str, delta: i64) -> Result<i64> {
        // Read and write happen under one write guard
        let mut records = self.records.write().await;
        let record = records.entry(key.to_string()).or_default();

        let current = match record.get(field) {
            Some(raw) => raw.parse::<i64>().map_err(|_| {
                ShopError::Internal(format!("hash value is not an integer: {}[{}]", key, field))
            })?,
            None => 0,
        };
        let updated = current
            .checked_add(delta)
            .ok_or_else(|| {
                ShopError::Internal("increment or decrement would overflow".into())
            })?;

        record.set(field, updated.to_string());
        Ok(updated)
    }

    async fn delete_field(&self, key: &str, field: &str) -> Result<()> {
        let mut records = self.records.write().await;
        let now_empty = match records.get_mut(key) {
            Some(record) => {
                record.remove(field);
                record.is_empty()
            }
            None => false,
        };
        if now_empty {
            records.remove(key);
        }
        Ok(())
    }

    async fn delete_key(&self, key: &str) -> Result<()> {
        self.records.write().await.remove(key);
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "memory"
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    fn fields(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(f, v)| (f.to_string(), v.to_string()))
            .collect()
    }

    #[tokio::test]
    async fn test_store_new() {
        let store = MemoryStore::new();
        assert_eq!(store.len().await, 0);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_write_and_read_all() {
        let store = MemoryStore::new();
        store
            .write("user:1", &fields(&[("name", "Ann"), ("email", "a@x")]))
            .await
            .unwrap();

        let record = store.read_all("user:1").await.unwrap();
        assert_eq!(record.get("name"), Some("Ann"));
        assert_eq!(record.get("email"), Some("a@x"));
    }

    #[tokio::test]
    async fn test_write_is_additive_per_field() {
        let store = MemoryStore::new();
        store
            .write("user:1", &fields(&[("name", "Ann"), ("email", "a@x")]))
            .await
            .unwrap();
        store
            .write("user:1", &fields(&[("name", "Bea")]))
            .await
            .unwrap();

        let record = store.read_all("user:1").await.unwrap();
        assert_eq!(record.get("name"), Some("Bea"));
        assert_eq!(record.get("email"), Some("a@x"));
    }

    #[tokio::test]
    async fn test_empty_write_creates_nothing() {
        let store = MemoryStore::new();
        store.write("user:1", &[]).await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_read_missing_key() {
        let store = MemoryStore::new();
        assert!(store.read_all("nope").await.unwrap().is_empty());
        assert_eq!(store.read_field("nope", "f").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_scan_prefix() {
        let store = MemoryStore::new();
        for key in ["user:1", "user:2", "product:1", "users"] {
            store.write(key, &fields(&[("f", "v")])).await.unwrap();
        }

        let mut keys = store.scan_prefix("user:").await.unwrap();
        keys.sort();
        assert_eq!(keys, vec!["user:1", "user:2"]);
    }

    #[tokio::test]
    async fn test_increment_creates_and_adds() {
        let store = MemoryStore::new();
        assert_eq!(store.increment_field("cart:1", "A1", 3).await.unwrap(), 3);
        assert_eq!(store.increment_field("cart:1", "A1", -5).await.unwrap(), -2);
        assert_eq!(
            store.read_field("cart:1", "A1").await.unwrap().as_deref(),
            Some("-2")
        );
    }

    #[tokio::test]
    async fn test_increment_non_integer_field() {
        let store = MemoryStore::new();
        store
            .write("product:A1", &fields(&[("price", "2.50")]))
            .await
            .unwrap();

        let result = store.increment_field("product:A1", "price", 1).await;
        assert!(matches!(result, Err(ShopError::Internal(_))));
    }

    #[tokio::test]
    async fn test_increment_overflow_is_internal() {
        let store = MemoryStore::new();
        store.increment_field("cart:1", "A1", i64::MAX).await.unwrap();

        let result = store.increment_field("cart:1", "A1", 1).await;
        assert!(matches!(result, Err(ShopError::Internal(_))));
        assert_eq!(
            store.read_field("cart:1", "A1").await.unwrap(),
            Some(i64::MAX.to_string())
        );
    }

    #[tokio::test]
    async fn test_delete_last_field_removes_key() {
        let store = MemoryStore::new();
        store.increment_field("cart:1", "A1", 1).await.unwrap();
        store.increment_field("cart:1", "B2", 1).await.unwrap();

        store.delete_field("cart:1", "A1").await.unwrap();
        assert_eq!(store.len().await, 1);

        store.delete_field("cart:1", "B2").await.unwrap();
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_delete_key_is_idempotent() {
        let store = MemoryStore::new();
        store.increment_field("cart:1", "A1", 1).await.unwrap();

        store.delete_key("cart:1").await.unwrap();
        store.delete_key("cart:1").await.unwrap();
        assert!(store.is_empty().await);
    }
}
