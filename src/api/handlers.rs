//! API Handlers
//!
//! HTTP request handlers for each cart service endpoint.

use std::sync::Arc;

use axum::{
    extract::{Path, State},
    Json,
};

use crate::config::{Config, StoreBackend};
use crate::error::Result;
use crate::models::{
    CartItemRequest, ClearCartRequest, CreateProductRequest, CreateUserRequest, HealthResponse,
    MessageResponse, Product, User,
};
use crate::shop::{CartService, CartSummary, Catalog, RemoveOutcome};
use crate::store::{MemoryStore, RedisStore, SharedStore};

/// Application state shared across all handlers.
///
/// Holds the one store handle of the process and the services built on it.
#[derive(Clone)]
pub struct AppState {
    /// Backing record store
    pub store: SharedStore,
    pub catalog: Catalog,
    pub carts: CartService,
}

impl AppState {
    /// Creates a new AppState over the given store.
    pub fn new(store: SharedStore) -> Self {
        let catalog = Catalog::new(store.clone());
        let carts = CartService::new(store.clone());
        Self {
            store,
            catalog,
            carts,
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Connects to the configured backend and fails if it is unreachable.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let store: SharedStore = match config.backend {
            StoreBackend::Redis => Arc::new(RedisStore::connect(&config.redis).await?),
            StoreBackend::Memory => Arc::new(MemoryStore::new()),
        };
        store.ping().await?;
        Ok(Self::new(store))
    }
}

/// Handler for POST /user
pub async fn create_user_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateUserRequest>,
) -> Result<Json<MessageResponse>> {
    let user = req.into_user()?;
    state.catalog.create_user(&user).await?;

    Ok(Json(MessageResponse::user_created(&user.user_id)))
}

/// Handler for POST /product
pub async fn create_product_handler(
    State(state): State<AppState>,
    Json(req): Json<CreateProductRequest>,
) -> Result<Json<MessageResponse>> {
    let product = req.into_product()?;
    state.catalog.create_product(&product).await?;

    Ok(Json(MessageResponse::product_created(&product.sku)))
}

/// Handler for GET /api/users
pub async fn list_users_handler(State(state): State<AppState>) -> Result<Json<Vec<User>>> {
    Ok(Json(state.catalog.list_users().await?))
}

/// Handler for GET /api/products
pub async fn list_products_handler(State(state): State<AppState>) -> Result<Json<Vec<Product>>> {
    Ok(Json(state.catalog.list_products().await?))
}

/// Handler for POST /cart/add
pub async fn add_to_cart_handler(
    State(state): State<AppState>,
    Json(req): Json<CartItemRequest>,
) -> Result<Json<MessageResponse>> {
    let item = req.into_item()?;
    let outcome = state
        .carts
        .add(&item.user_id, &item.sku, item.quantity)
        .await?;

    Ok(Json(MessageResponse::added(
        &item.user_id,
        &item.sku,
        outcome.delta,
    )))
}

/// Handler for POST /cart/remove
///
/// Responds 404 when the SKU is not in the cart.
pub async fn remove_from_cart_handler(
    State(state): State<AppState>,
    Json(req): Json<CartItemRequest>,
) -> Result<Json<MessageResponse>> {
    let item = req.into_item()?;
    let outcome = state
        .carts
        .remove(&item.user_id, &item.sku, item.quantity)
        .await?;

    let response = match outcome {
        RemoveOutcome::Reduced { remaining } => {
            MessageResponse::reduced(&item.user_id, &item.sku, item.quantity, remaining)
        }
        RemoveOutcome::Removed => MessageResponse::removed(&item.user_id, &item.sku),
    };
    Ok(Json(response))
}

/// Handler for POST /cart/clear
pub async fn clear_cart_handler(
    State(state): State<AppState>,
    Json(req): Json<ClearCartRequest>,
) -> Result<Json<MessageResponse>> {
    let user_id = req.into_user_id()?;
    state.carts.clear(&user_id).await?;

    Ok(Json(MessageResponse::cleared(&user_id)))
}

/// Handler for GET /cart/summary/:user_id
pub async fn cart_summary_handler(
    State(state): State<AppState>,
    Path(user_id): Path<String>,
) -> Result<Json<CartSummary>> {
    Ok(Json(state.carts.summarize(&user_id).await?))
}

/// Handler for GET /health
///
/// Pings the store; an unreachable store yields 503.
pub async fn health_handler(State(state): State<AppState>) -> Result<Json<HealthResponse>> {
    state.store.ping().await?;
    Ok(Json(HealthResponse::healthy(state.store.backend())))
}
