//! Key naming scheme
//!
//! `user:<id>`, `product:<sku>` and `cart:<user_id>`.

pub const USER_PREFIX: &str = "user:";
pub const PRODUCT_PREFIX: &str = "product:";
pub const CART_PREFIX: &str = "cart:";

pub fn user_key(user_id: &str) -> String {
    format!("{}{}", USER_PREFIX, user_id)
}

pub fn product_key(sku: &str) -> String {
    format!("{}{}", PRODUCT_PREFIX, sku)
}

pub fn cart_key(user_id: &str) -> String {
    format!("{}{}", CART_PREFIX, user_id)
}

/// Identifier part of `key`: everything after `prefix`, colons included.
pub fn id_from_key<'a>(key: &'a str, prefix: &str) -> Option<&'a str> {
    key.strip_prefix(prefix)
}
