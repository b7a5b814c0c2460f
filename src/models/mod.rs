//! Request, response and record models for the cart service
//!
//! This module defines the DTOs (Data Transfer Objects) used for
//! serializing/deserializing HTTP bodies, plus the typed catalog records.

pub mod records;
pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use records::{Product, User};
pub use requests::{
    CartItem, CartItemRequest, ClearCartRequest, CreateProductRequest, CreateUserRequest, Scalar,
};
pub use responses::{HealthResponse, MessageResponse};
