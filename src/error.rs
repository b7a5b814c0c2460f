//! Error types for the cart service
//!
//! Provides unified error handling using thiserror.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;
use tracing::error;

// == Shop Error Enum ==
/// Unified error type for the cart service.
#[derive(Error, Debug)]
pub enum ShopError {
    /// A required field is missing or a value cannot be parsed
    #[error("Invalid request: {0}")]
    Validation(String),

    /// The addressed cart slot does not exist
    #[error("{0}")]
    NotFound(String),

    /// The backing store is unreachable
    #[error("Store error: {0}")]
    Store(String),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl From<redis::RedisError> for ShopError {
    /// Connectivity failures are `Store`; anything the server answered with
    /// (wrong type, non-integer hash value, overflow) is `Internal`.
    fn from(err: redis::RedisError) -> Self {
        if err.is_io_error()
            || err.is_connection_refusal()
            || err.is_timeout()
            || err.is_connection_dropped()
        {
            ShopError::Store(err.to_string())
        } else {
            ShopError::Internal(err.to_string())
        }
    }
}

impl From<askama::Error> for ShopError {
    fn from(err: askama::Error) -> Self {
        ShopError::Internal(format!("template rendering failed: {}", err))
    }
}

// == IntoResponse Implementation ==
impl IntoResponse for ShopError {
    fn into_response(self) -> Response {
        let (status, message) = match &self {
            ShopError::Validation(msg) => (StatusCode::BAD_REQUEST, msg.clone()),
            ShopError::NotFound(msg) => (StatusCode::NOT_FOUND, msg.clone()),
            ShopError::Store(msg) => (StatusCode::SERVICE_UNAVAILABLE, msg.clone()),
            ShopError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, msg.clone()),
        };

        if status.is_server_error() {
            error!(status = %status, "{}", self);
        }

        let body = Json(json!({
            "message": message
        }));

        (status, body).into_response()
    }
}

// == Result Type Alias ==
/// Convenience Result type for the cart service.
pub type Result<T> = std::result::Result<T, ShopError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_mapping() {
        let cases = [
            (ShopError::Validation("x".into()), StatusCode::BAD_REQUEST),
            (ShopError::NotFound("x".into()), StatusCode::NOT_FOUND),
            (ShopError::Store("x".into()), StatusCode::SERVICE_UNAVAILABLE),
            (ShopError::Internal("x".into()), StatusCode::INTERNAL_SERVER_ERROR),
        ];

        for (err, expected) in cases {
            assert_eq!(err.into_response().status(), expected);
        }
    }

    #[test]
    fn test_redis_connection_errors_are_store_errors() {
        let refused = std::io::Error::new(std::io::ErrorKind::ConnectionRefused, "refused");
        let err = ShopError::from(redis::RedisError::from(refused));
        assert!(matches!(err, ShopError::Store(_)));
        assert_eq!(err.into_response().status(), StatusCode::SERVICE_UNAVAILABLE);
    }

    #[test]
    fn test_redis_reply_errors_are_internal() {
        let reply = redis::RedisError::from((
            redis::ErrorKind::ResponseError,
            "hash value is not an integer",
        ));
        let err = ShopError::from(reply);
        assert!(matches!(err, ShopError::Internal(_)));
        assert_eq!(err.into_response().status(), StatusCode::INTERNAL_SERVER_ERROR);

        let wrong_type = redis::RedisError::from((redis::ErrorKind::TypeError, "bad reply"));
        assert!(matches!(ShopError::from(wrong_type), ShopError::Internal(_)));
    }

    #[test]
    fn test_not_found_displays_bare_message() {
        let err = ShopError::NotFound("A1 not found in cart for user bob.".into());
        assert_eq!(err.to_string(), "A1 not found in cart for user bob.");
    }
}
