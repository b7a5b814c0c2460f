//! Response DTOs for the cart service API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;

/// Confirmation body shared by every mutating endpoint.
#[derive(Debug, Clone, Serialize)]
pub struct MessageResponse {
    pub message: String,
}

impl MessageResponse {
    /// Creates a new MessageResponse
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }

    pub fn user_created(user_id: &str) -> Self {
        Self::new(format!("User {} created.", user_id))
    }

    pub fn product_created(sku: &str) -> Self {
        Self::new(format!("Product {} created.", sku))
    }

    pub fn added(user_id: &str, sku: &str, quantity: i64) -> Self {
        Self::new(format!(
            "Added {} of {} to cart for user {}.",
            quantity, sku, user_id
        ))
    }

    pub fn reduced(user_id: &str, sku: &str, quantity: i64, remaining: i64) -> Self {
        Self::new(format!(
            "Reduced {} by {} for user {}. New quantity: {}.",
            sku, quantity, user_id, remaining
        ))
    }

    pub fn removed(user_id: &str, sku: &str) -> Self {
        Self::new(format!("Removed {} from cart for user {}.", sku, user_id))
    }

    pub fn cleared(user_id: &str) -> Self {
        Self::new(format!("Cleared cart for user {}.", user_id))
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Store backend serving requests
    pub backend: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy(backend: impl Into<String>) -> Self {
        Self {
            status: "healthy".to_string(),
            backend: backend.into(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_cart_messages() {
        assert_eq!(
            MessageResponse::added("bob", "A1", 3).message,
            "Added 3 of A1 to cart for user bob."
        );
        assert_eq!(
            MessageResponse::reduced("bob", "A1", 1, 2).message,
            "Reduced A1 by 1 for user bob. New quantity: 2."
        );
        assert_eq!(
            MessageResponse::removed("bob", "A1").message,
            "Removed A1 from cart for user bob."
        );
        assert_eq!(
            MessageResponse::cleared("bob").message,
            "Cleared cart for user bob."
        );
    }

    #[test]
    fn test_health_response_serialize() {
        let resp = HealthResponse::healthy("memory");
        let json = serde_json::to_string(&resp).unwrap();
        assert!(json.contains("healthy"));
        assert!(json.contains("memory"));
        assert!(json.contains("timestamp"));
    }
}
