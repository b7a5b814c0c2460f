//! Shop Module
//!
//! Catalog records, per-user carts and cart summaries, all persisted through
//! a [`RecordStore`](crate::store::RecordStore).

mod cart;
mod catalog;
pub mod keys;
mod summary;


// Re-export public types
pub use cart::{AddOutcome, CartService, RemoveOutcome};
pub use catalog::Catalog;
pub use summary::{summarize, CartLine, CartSummary};
