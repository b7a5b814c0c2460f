//! API Routes
//!
//! Configures the Axum router with all cart service endpoints.

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    add_to_cart_handler, cart_summary_handler, clear_cart_handler, create_product_handler,
    create_user_handler, health_handler, list_products_handler, list_users_handler,
    remove_from_cart_handler, AppState,
};
use super::pages::index_handler;

/// Creates the main router with all endpoints configured.
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/", get(index_handler))
        .route("/user", post(create_user_handler))
        .route("/product", post(create_product_handler))
        .route("/api/users", get(list_users_handler))
        .route("/api/products", get(list_products_handler))
        .route("/cart/add", post(add_to_cart_handler))
        .route("/cart/remove", post(remove_from_cart_handler))
        .route("/cart/clear", post(clear_cart_handler))
        .route("/cart/summary/:user_id", get(cart_summary_handler))
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
