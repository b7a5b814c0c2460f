//! Redis Cart - users, products and shopping carts as key-value hash records
//!
//! Catalog upserts, idempotent cart mutations and priced cart summaries over
//! a pluggable record store (Redis or in-process memory).

pub mod api;
pub mod config;
pub mod error;
pub mod models;
pub mod shop;
pub mod store;

pub use api::AppState;
pub use config::Config;
pub use error::{Result, ShopError};
