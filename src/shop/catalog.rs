//! Catalog Module
//!
//! Upserts and listings over `user` and `product` records.

use tracing::{debug, info};

use crate::error::Result;
use crate::models::{Product, User};
use crate::shop::keys::{id_from_key, product_key, user_key, PRODUCT_PREFIX, USER_PREFIX};
use crate::store::{HashRecord, SharedStore};

// == Catalog ==
/// User and product records.
#[derive(Clone)]
pub struct Catalog {
    store: SharedStore,
}

impl Catalog {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    // == Create User ==
    /// Upserts every field of `user` at `user:<user_id>`.
    ///
    /// Re-creating an existing user overwrites all fields, so a blank name or
    /// email in `user` blanks the stored one.
    pub async fn create_user(&self, user: &User) -> Result<()> {
        self.store
            .write(&user_key(&user.user_id), &user.to_fields())
            .await?;
        info!(user_id = %user.user_id, "User upserted");
        Ok(())
    }

    // == Create Product ==
    /// Upserts every field of `product` at `product:<sku>`.
    pub async fn create_product(&self, product: &Product) -> Result<()> {
        self.store
            .write(&product_key(&product.sku), &product.to_fields())
            .await?;
        info!(sku = %product.sku, price = %product.price, "Product upserted");
        Ok(())
    }

    // == List Users ==
    /// All users, in store scan order.
    pub async fn list_users(&self) -> Result<Vec<User>> {
        let users: Vec<User> = self
            .scan_records(USER_PREFIX)
            .await?
            .into_iter()
            .map(|(id, record)| User::from_record(id, &record))
            .collect();
        debug!(count = users.len(), "Listed users");
        Ok(users)
    }

    // == List Products ==
    /// All products, in store scan order.
    pub async fn list_products(&self) -> Result<Vec<Product>> {
        let products: Vec<Product> = self
            .scan_records(PRODUCT_PREFIX)
            .await?
            .into_iter()
            .map(|(sku, record)| Product::from_record(sku, &record))
            .collect();
        debug!(count = products.len(), "Listed products");
        Ok(products)
    }

    /// Reads every record under `prefix`, skipping keys that vanished or
    /// hold no fields by the time they are read.
    async fn scan_records(&self, prefix: &str) -> Result<Vec<(String, HashRecord)>> {
        let mut records = Vec::new();
        for key in self.store.scan_prefix(prefix).await? {
            let Some(id) = id_from_key(&key, prefix) else {
                continue;
            };
            let record = self.store.read_all(&key).await?;
            if record.is_empty() {
                continue;
            }
            records.push((id.to_string(), record));
        }
        Ok(records)
    }
}
