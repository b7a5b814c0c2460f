//! Request DTOs for the cart service API
//!
//! Defines the structure of incoming HTTP request bodies and the defaulting
//! rules applied at the boundary.

use serde::Deserialize;

use crate::error::{Result, ShopError};
use crate::models::{Product, User};

/// A JSON string or number; numbers are kept as their JSON text.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum Scalar {
    Text(String),
    Number(serde_json::Number),
}

impl Scalar {
    /// Text form as it will be stored.
    pub fn into_text(self) -> String {
        match self {
            Scalar::Text(text) => text,
            Scalar::Number(number) => number.to_string(),
        }
    }

    /// Integer value; floats truncate toward zero, strings are trimmed.
    pub fn to_quantity(&self) -> Result<i64> {
        let invalid = || ShopError::Validation(format!("quantity must be an integer, got {}", self));
        match self {
            Scalar::Text(text) => text.trim().parse::<i64>().map_err(|_| invalid()),
            Scalar::Number(number) => {
                if let Some(value) = number.as_i64() {
                    return Ok(value);
                }
                match number.as_f64() {
                    Some(value)
                        if value.is_finite()
                            && value >= i64::MIN as f64
                            && value < i64::MAX as f64 =>
                    {
                        Ok(value.trunc() as i64)
                    }
                    _ => Err(invalid()),
                }
            }
        }
    }
}

impl std::fmt::Display for Scalar {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Scalar::Text(text) => write!(f, "{:?}", text),
            Scalar::Number(number) => write!(f, "{}", number),
        }
    }
}

/// Resolves a required identifier; missing or empty values are rejected.
fn require_id(name: &str, value: Option<Scalar>) -> Result<String> {
    match value.map(Scalar::into_text) {
        Some(id) if !id.is_empty() => Ok(id),
        _ => Err(ShopError::Validation(format!("{} is required", name))),
    }
}

fn text_or(value: Option<Scalar>, default: &str) -> String {
    value
        .map(Scalar::into_text)
        .unwrap_or_else(|| default.to_string())
}

fn quantity_or_one(value: Option<&Scalar>) -> Result<i64> {
    value.map_or(Ok(1), Scalar::to_quantity)
}

/// Request body for POST /user
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateUserRequest {
    #[serde(default)]
    pub user_id: Option<Scalar>,
    #[serde(default)]
    pub name: Option<Scalar>,
    #[serde(default)]
    pub email: Option<Scalar>,
}

impl CreateUserRequest {
    /// Validates the request and applies field defaults.
    pub fn into_user(self) -> Result<User> {
        let user_id = require_id("user_id", self.user_id)?;
        Ok(User::new(user_id)
            .with_name(text_or(self.name, ""))
            .with_email(text_or(self.email, "")))
    }
}

/// Request body for POST /product
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CreateProductRequest {
    #[serde(default)]
    pub sku: Option<Scalar>,
    #[serde(default)]
    pub name: Option<Scalar>,
    #[serde(default)]
    pub description: Option<Scalar>,
    #[serde(default)]
    pub qty: Option<Scalar>,
    #[serde(default)]
    pub rating: Option<Scalar>,
    #[serde(default)]
    pub price: Option<Scalar>,
}

impl CreateProductRequest {
    /// Validates the request and applies field defaults.
    pub fn into_product(self) -> Result<Product> {
        let sku = require_id("sku", self.sku)?;
        Ok(Product::new(sku)
            .with_name(text_or(self.name, ""))
            .with_description(text_or(self.description, ""))
            .with_qty(text_or(self.qty, Product::DEFAULT_QTY))
            .with_rating(text_or(self.rating, Product::DEFAULT_RATING))
            .with_price(text_or(self.price, Product::DEFAULT_PRICE)))
    }
}

/// Validated cart mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CartItem {
    pub user_id: String,
    pub sku: String,
    pub quantity: i64,
}

/// Request body for POST /cart/add and POST /cart/remove
#[derive(Debug, Clone, Default, Deserialize)]
pub struct CartItemRequest {
    #[serde(default)]
    pub user_id: Option<Scalar>,
    #[serde(default)]
    pub sku: Option<Scalar>,
    #[serde(default)]
    pub quantity: Option<Scalar>,
}

impl CartItemRequest {
    /// Validates identifiers and parses `quantity` (default 1).
    pub fn into_item(self) -> Result<CartItem> {
        let user_id = require_id("user_id", self.user_id)?;
        let sku = require_id("sku", self.sku)?;
        let quantity = quantity_or_one(self.quantity.as_ref())?;
        Ok(CartItem {
            user_id,
            sku,
            quantity,
        })
    }
}

/// Request body for POST /cart/clear
#[derive(Debug, Clone, Default, Deserialize)]
pub struct ClearCartRequest {
    #[serde(default)]
    pub user_id: Option<Scalar>,
}

impl ClearCartRequest {
    pub fn into_user_id(self) -> Result<String> {
        require_id("user_id", self.user_id)
    }
}
