//! Property-Based Tests for the Record Store
//!
//! Checks `MemoryStore` against a nested `HashMap` model.

use proptest::prelude::*;
use std::collections::HashMap;

use crate::store::{MemoryStore, RecordStore};

// == Strategies ==
fn key_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("cart:1".to_string()),
        Just("cart:2".to_string()),
        Just("user:1".to_string()),
    ]
}

fn field_strategy() -> impl Strategy<Value = String> {
    "[a-c]".prop_map(|s| s)
}

#[derive(Debug, Clone)]
enum StoreOp {
    Increment { key: String, field: String, delta: i64 },
    DeleteField { key: String, field: String },
    DeleteKey { key: String },
}

fn store_op_strategy() -> impl Strategy<Value = StoreOp> {
    prop_oneof![
        (key_strategy(), field_strategy(), -50..50_i64)
            .prop_map(|(key, field, delta)| StoreOp::Increment { key, field, delta }),
        (key_strategy(), field_strategy())
            .prop_map(|(key, field)| StoreOp::DeleteField { key, field }),
        key_strategy().prop_map(|key| StoreOp::DeleteKey { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Every sequence of increments and deletes leaves the store equal to the
    // model, and no key survives without fields.
    #[test]
    fn prop_store_matches_model(ops in prop::collection::vec(store_op_strategy(), 1..80)) {
        tokio_test::block_on(async {
            let store = MemoryStore::new();
            let mut model: HashMap<String, HashMap<String, i64>> = HashMap::new();

            for op in ops {
                match op {
                    StoreOp::Increment { key, field, delta } => {
                        let value = store.increment_field(&key, &field, delta).await.unwrap();
                        let slot = model.entry(key).or_default().entry(field).or_insert(0);
                        *slot += delta;
                        prop_assert_eq!(value, *slot);
                    }
                    StoreOp::DeleteField { key, field } => {
                        store.delete_field(&key, &field).await.unwrap();
                        if let Some(fields) = model.get_mut(&key) {
                            fields.remove(&field);
                            if fields.is_empty() {
                                model.remove(&key);
                            }
                        }
                    }
                    StoreOp::DeleteKey { key } => {
                        store.delete_key(&key).await.unwrap();
                        model.remove(&key);
                    }
                }
            }

            prop_assert_eq!(store.len().await, model.len());
            for (key, fields) in &model {
                let record = store.read_all(key).await.unwrap();
                prop_assert_eq!(record.len(), fields.len());
                for (field, value) in fields {
                    let expected = value.to_string();
                    prop_assert_eq!(record.get(field), Some(expected.as_str()));
                }
            }

            let mut carts = store.scan_prefix("cart:").await.unwrap();
            carts.sort();
            let mut expected: Vec<String> = model
                .keys()
                .filter(|key| key.starts_with("cart:"))
                .cloned()
                .collect();
            expected.sort();
            prop_assert_eq!(carts, expected);
            Ok(())
        })?;
    }
}
