//! Cart Summarization
//!
//! Joins a cart's quantities with current catalog prices. Nothing is cached:
//! every summary reads the live product records, so price changes apply to
//! existing carts.

use serde::Serialize;
use tracing::{debug, warn};

use crate::error::Result;
use crate::shop::keys::{cart_key, product_key};
use crate::store::RecordStore;

/// One priced line of a cart summary.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartLine {
    pub sku: String,
    /// Empty if the product is unknown
    pub name: String,
    /// Quantity exactly as stored
    pub quantity: String,
    /// 0 if the product is unknown
    pub price: f64,
    pub subtotal: f64,
}

/// Priced contents of one user's cart.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CartSummary {
    pub user_id: String,
    pub items: Vec<CartLine>,
    pub total: f64,
}

fn parse_price(sku: &str, raw: Option<&str>) -> f64 {
    let Some(raw) = raw else {
        return 0.0;
    };
    match raw.trim().parse::<f64>() {
        Ok(price) => price,
        Err(_) => {
            warn!(sku, price = raw, "Unparseable product price, using 0");
            0.0
        }
    }
}

fn parse_quantity(sku: &str, raw: &str) -> i64 {
    match raw.trim().parse::<i64>() {
        Ok(quantity) => quantity,
        Err(_) => {
            warn!(sku, quantity = raw, "Unparseable cart quantity, using 0");
            0
        }
    }
}

/// Builds the summary for `user_id`.
///
/// Lines follow the order the store returns cart fields in, and the total is
/// accumulated in that same order. A missing cart gives no lines and total 0.
/// Cart and product records are both read from `store`.
pub async fn summarize(store: &dyn RecordStore, user_id: &str) -> Result<CartSummary> {
    let cart = store.read_all(&cart_key(user_id)).await?;

    let mut items = Vec::with_capacity(cart.len());
    let mut total = 0.0_f64;

    for (sku, quantity) in cart {
        let product = store.read_all(&product_key(&sku)).await?;
        let price = parse_price(&sku, product.get("price"));
        let subtotal = price * parse_quantity(&sku, &quantity) as f64;
        total += subtotal;

        items.push(CartLine {
            name: product.get("name").unwrap_or_default().to_string(),
            sku,
            quantity,
            price,
            subtotal,
        });
    }

    debug!(user_id, lines = items.len(), total, "Summarized cart");
    Ok(CartSummary {
        user_id: user_id.to_string(),
        items,
        total,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::MemoryStore;

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price("A1", Some("2.50")), 2.5);
        assert_eq!(parse_price("A1", Some(" 3 ")), 3.0);
        assert_eq!(parse_price("A1", Some("cheap")), 0.0);
        assert_eq!(parse_price("A1", None), 0.0);
    }

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("A1", "3"), 3);
        assert_eq!(parse_quantity("A1", "-1"), -1);
        assert_eq!(parse_quantity("A1", "x"), 0);
    }

    #[tokio::test]
    async fn test_summarize_reads_products_from_same_store() {
        let store = MemoryStore::new();
        store
            .write(
                "product:A1",
                &[
                    ("name".to_string(), "Apple".to_string()),
                    ("price".to_string(), "1.50".to_string()),
                ],
            )
            .await
            .unwrap();
        store.increment_field("cart:bob", "A1", 2).await.unwrap();

        let summary = summarize(&store, "bob").await.unwrap();
        assert_eq!(summary.items.len(), 1);
        assert_eq!(summary.items[0].name, "Apple");
        assert_eq!(summary.items[0].subtotal, 3.0);
        assert_eq!(summary.total, 3.0);
    }

    #[test]
    fn test_summary_serializes_quantity_as_text() {
        let summary = CartSummary {
            user_id: "bob".to_string(),
            items: vec![CartLine {
                sku: "A1".to_string(),
                name: String::new(),
                quantity: "3".to_string(),
                price: 2.5,
                subtotal: 7.5,
            }],
            total: 7.5,
        };
        let json = serde_json::to_value(&summary).unwrap();
        assert_eq!(json["items"][0]["quantity"], "3");
        assert_eq!(json["items"][0]["subtotal"], 7.5);
        assert_eq!(json["total"], 7.5);
    }
}
