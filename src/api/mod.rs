//! API Module
//!
//! HTTP handlers and routing for the cart service.
//!
//! # Endpoints
//! - `GET /` - HTML listing of users and products
//! - `POST /user` - Upsert a user
//! - `POST /product` - Upsert a product
//! - `GET /api/users` - List users
//! - `GET /api/products` - List products
//! - `POST /cart/add` - Add to a cart slot
//! - `POST /cart/remove` - Take from a cart slot
//! - `POST /cart/clear` - Empty a cart
//! - `GET /cart/summary/:user_id` - Priced cart summary
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod pages;
pub mod routes;

pub use handlers::*;
pub use pages::index_handler;
pub use routes::create_router;
