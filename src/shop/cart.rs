//! Cart Module
//!
//! Quantity mutation over per-user cart records (`cart:<user_id>`, one field
//! per SKU holding an integer count).
//!
//! Slot lifecycle for one (user, sku):
//! - absent -> add k -> k
//! - n -> add k -> n + k
//! - n -> remove k (k < n) -> n - k
//! - n -> remove k (k >= n) -> absent
//! - absent -> remove k -> not found, nothing written

use tracing::info;

use crate::error::{Result, ShopError};
use crate::shop::keys::cart_key;
use crate::shop::summary::{self, CartSummary};
use crate::store::SharedStore;

/// Result of a successful add.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AddOutcome {
    /// Amount applied
    pub delta: i64,
    /// Slot value after the increment
    pub new_quantity: i64,
}

/// Result of a successful remove.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RemoveOutcome {
    /// Slot still holds `remaining` (> 0)
    Reduced { remaining: i64 },
    /// Slot was dropped from the cart
    Removed,
}

// == Cart Service ==
/// Cart mutations and summaries.
#[derive(Clone)]
pub struct CartService {
    store: SharedStore,
}

impl CartService {
    pub fn new(store: SharedStore) -> Self {
        Self { store }
    }

    // == Add ==
    /// Adds `quantity` to the slot with a single atomic store increment.
    ///
    /// Negative quantities are applied as-is.
    pub async fn add(&self, user_id: &str, sku: &str, quantity: i64) -> Result<AddOutcome> {
        let new_quantity = self
            .store
            .increment_field(&cart_key(user_id), sku, quantity)
            .await?;
        info!(user_id, sku, quantity, new_quantity, "Added to cart");
        Ok(AddOutcome {
            delta: quantity,
            new_quantity,
        })
    }

    // == Remove ==
    /// Takes `quantity` off the slot, dropping it once it reaches 0 or less.
    ///
    /// The read and the following write are separate store calls. Two
    /// concurrent removes on the same slot can both read the same value, and
    /// the later write wins.
    pub async fn remove(&self, user_id: &str, sku: &str, quantity: i64) -> Result<RemoveOutcome> {
        let key = cart_key(user_id);
        let Some(raw) = self.store.read_field(&key, sku).await? else {
            return Err(ShopError::NotFound(format!(
                "{} not found in cart for user {}.",
                sku, user_id
            )));
        };

        let current = raw.trim().parse::<i64>().map_err(|_| {
            ShopError::Internal(format!("cart entry {}[{}] is not an integer", key, sku))
        })?;
        let remaining = current
            .checked_sub(quantity)
            .ok_or_else(|| ShopError::Validation("quantity is out of range".into()))?;

        if remaining > 0 {
            self.store
                .write(&key, &[(sku.to_string(), remaining.to_string())])
                .await?;
            info!(user_id, sku, quantity, remaining, "Reduced cart item");
            Ok(RemoveOutcome::Reduced { remaining })
        } else {
            self.store.delete_field(&key, sku).await?;
            info!(user_id, sku, "Removed cart item");
            Ok(RemoveOutcome::Removed)
        }
    }

    // == Clear ==
    /// Deletes the whole cart. Clearing a missing cart succeeds.
    pub async fn clear(&self, user_id: &str) -> Result<()> {
        self.store.delete_key(&cart_key(user_id)).await?;
        info!(user_id, "Cleared cart");
        Ok(())
    }

    /// Current count for one slot, if present.
    #[cfg(test)]
    pub(crate) async fn quantity(&self, user_id: &str, sku: &str) -> Result<Option<i64>> {
        let raw = self.store.read_field(&cart_key(user_id), sku).await?;
        Ok(raw.and_then(|value| value.trim().parse().ok()))
    }

    // == Summarize ==
    /// Priced line items and total for the user's cart.
    pub async fn summarize(&self, user_id: &str) -> Result<CartSummary> {
        summary::summarize(self.store.as_ref(), user_id).await
    }
}
