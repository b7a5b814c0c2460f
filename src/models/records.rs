//! Catalog record types
//!
//! Typed views of the `user:<id>` and `product:<sku>` hash records. Every
//! field is written on each upsert, so omitted values overwrite stored ones
//! with their defaults.

use serde::Serialize;

use crate::store::HashRecord;

/// Reads `field` from `record`, defaulting to `default` when absent.
fn field_or(record: &HashRecord, field: &str, default: &str) -> String {
    record.get(field).unwrap_or(default).to_string()
}

// == User ==
/// A shop user stored at `user:<user_id>`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct User {
    pub user_id: String,
    pub name: String,
    pub email: String,
}

impl User {
    /// Creates a user with empty name and email.
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            name: String::new(),
            email: String::new(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_email(mut self, email: impl Into<String>) -> Self {
        self.email = email.into();
        self
    }

    /// Full field set written on upsert.
    pub fn to_fields(&self) -> Vec<(String, String)> {
        vec![
            ("user_id".to_string(), self.user_id.clone()),
            ("name".to_string(), self.name.clone()),
            ("email".to_string(), self.email.clone()),
        ]
    }

    /// Rebuilds a user from its record; the identifier comes from the key.
    pub fn from_record(user_id: impl Into<String>, record: &HashRecord) -> Self {
        Self {
            user_id: user_id.into(),
            name: field_or(record, "name", ""),
            email: field_or(record, "email", ""),
        }
    }
}

// == Product ==
/// A catalog product stored at `product:<sku>`.
///
/// Numeric fields are kept as the text they were submitted with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Product {
    pub sku: String,
    pub name: String,
    pub description: String,
    pub qty: String,
    pub rating: String,
    pub price: String,
}

impl Product {
    pub const DEFAULT_QTY: &'static str = "0";
    pub const DEFAULT_RATING: &'static str = "0";
    pub const DEFAULT_PRICE: &'static str = "0.0";

    /// Creates a product with every optional field at its default.
    pub fn new(sku: impl Into<String>) -> Self {
        Self {
            sku: sku.into(),
            name: String::new(),
            description: String::new(),
            qty: Self::DEFAULT_QTY.to_string(),
            rating: Self::DEFAULT_RATING.to_string(),
            price: Self::DEFAULT_PRICE.to_string(),
        }
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    pub fn with_qty(mut self, qty: impl Into<String>) -> Self {
        self.qty = qty.into();
        self
    }

    pub fn with_rating(mut self, rating: impl Into<String>) -> Self {
        self.rating = rating.into();
        self
    }

    pub fn with_price(mut self, price: impl Into<String>) -> Self {
        self.price = price.into();
        self
    }

    /// Full field set written on upsert.
    pub fn to_fields(&self) -> Vec<(String, String)> {
        vec![
            ("sku".to_string(), self.sku.clone()),
            ("name".to_string(), self.name.clone()),
            ("description".to_string(), self.description.clone()),
            ("qty".to_string(), self.qty.clone()),
            ("rating".to_string(), self.rating.clone()),
            ("price".to_string(), self.price.clone()),
        ]
    }

    /// Rebuilds a product from its record; the SKU comes from the key.
    pub fn from_record(sku: impl Into<String>, record: &HashRecord) -> Self {
        Self {
            sku: sku.into(),
            name: field_or(record, "name", ""),
            description: field_or(record, "description", ""),
            qty: field_or(record, "qty", Self::DEFAULT_QTY),
            rating: field_or(record, "rating", Self::DEFAULT_RATING),
            price: field_or(record, "price", Self::DEFAULT_PRICE),
        }
    }
}
