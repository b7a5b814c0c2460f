//! Record Store Module
//!
//! Maps string keys to flat field maps ("hash records") in an external
//! associative store. Every call goes straight to the backend; nothing is
//! cached locally.

mod memory;
mod record;
mod redis_store;

#[cfg(test)]
mod property_tests;

use std::sync::Arc;

use async_trait::async_trait;

use crate::error::Result;

// Re-export public types
pub use memory::MemoryStore;
pub use record::HashRecord;
pub use redis_store::{RedisSettings, RedisStore};

/// Store handle shared by the catalog and cart services.
pub type SharedStore = Arc<dyn RecordStore>;

// == Record Store Trait ==
/// Operations the shop needs from a key-value store holding hash records.
///
/// Implementations must make `increment_field` atomic. No other call is
/// required to be atomic with respect to another.
#[async_trait]
pub trait RecordStore: Send + Sync {
    /// Upserts every given field; fields not listed keep their old value.
    async fn write(&self, key: &str, fields: &[(String, String)]) -> Result<()>;

    /// Reads all fields of a record. A missing key yields an empty record.
    async fn read_all(&self, key: &str) -> Result<HashRecord>;

    /// Reads one field of a record.
    async fn read_field(&self, key: &str, field: &str) -> Result<Option<String>>;

    /// Returns the keys starting with `prefix`, in no particular order.
    ///
    /// The result is a snapshot: keys written or removed during the scan may
    /// or may not appear.
    async fn scan_prefix(&self, prefix: &str) -> Result<Vec<String>>;

    /// Atomically adds `delta` to an integer field, creating it at 0.
    async fn increment_field(&self, key: &str, field: &str, delta: i64) -> Result<i64>;

    /// Removes one field. Removing the last field removes the key.
    async fn delete_field(&self, key: &str, field: &str) -> Result<()>;

    /// Removes a whole record. Missing keys are not an error.
    async fn delete_key(&self, key: &str) -> Result<()>;

    /// Checks that the backend is reachable.
    async fn ping(&self) -> Result<()>;

    /// Short backend name for logs and health output.
    fn backend(&self) -> &'static str;
}
