//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;

use crate::store::RedisSettings;

/// Which record store implementation backs the service.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StoreBackend {
    /// Remote Redis server
    Redis,
    /// In-process hash records, lost on shutdown
    Memory,
}

impl StoreBackend {
    fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "redis" => Some(StoreBackend::Redis),
            "memory" => Some(StoreBackend::Memory),
            _ => None,
        }
    }
}

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection parameters for the Redis backend
    pub redis: RedisSettings,
    /// Selected store backend
    pub backend: StoreBackend,
    /// HTTP server port
    pub server_port: u16,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REDIS_HOST` - Store host (default: localhost)
    /// - `REDIS_PORT` - Store port (default: 10001)
    /// - `REDIS_PASSWORD` - Store password (default: empty)
    /// - `REDIS_USE_SSL` - `true` enables TLS (default: false)
    /// - `STORE_BACKEND` - `redis` or `memory` (default: redis)
    /// - `SERVER_PORT` - HTTP server port (default: 5001)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            redis: RedisSettings::from_env_prefixed("REDIS", defaults.redis),
            backend: env::var("STORE_BACKEND")
                .ok()
                .and_then(|v| StoreBackend::parse(&v))
                .unwrap_or(defaults.backend),
            server_port: env::var("SERVER_PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.server_port),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            redis: RedisSettings::default(),
            backend: StoreBackend::Redis,
            server_port: 5001,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.redis.host, "localhost");
        assert_eq!(config.redis.port, 10001);
        assert_eq!(config.redis.password, "");
        assert!(!config.redis.use_tls);
        assert_eq!(config.backend, StoreBackend::Redis);
        assert_eq!(config.server_port, 5001);
    }

    #[test]
    fn test_config_from_env() {
        // Single test touches the env so parallel tests do not race on it
        env::remove_var("REDIS_HOST");
        env::remove_var("REDIS_PORT");
        env::remove_var("REDIS_PASSWORD");
        env::remove_var("REDIS_USE_SSL");
        env::remove_var("STORE_BACKEND");
        env::remove_var("SERVER_PORT");

        let config = Config::from_env();
        assert_eq!(config.redis.host, "localhost");
        assert_eq!(config.redis.port, 10001);
        assert!(!config.redis.use_tls);
        assert_eq!(config.backend, StoreBackend::Redis);
        assert_eq!(config.server_port, 5001);

        env::set_var("REDIS_PORT", "not-a-port");
        env::set_var("REDIS_USE_SSL", "TRUE");
        env::set_var("STORE_BACKEND", "Memory");
        let config = Config::from_env();
        assert_eq!(config.redis.port, 10001);
        assert!(config.redis.use_tls);
        assert_eq!(config.backend, StoreBackend::Memory);

        env::remove_var("REDIS_PORT");
        env::remove_var("REDIS_USE_SSL");
        env::remove_var("STORE_BACKEND");
    }

    #[test]
    fn test_backend_parse() {
        assert_eq!(StoreBackend::parse(" redis "), Some(StoreBackend::Redis));
        assert_eq!(StoreBackend::parse("MEMORY"), Some(StoreBackend::Memory));
        assert_eq!(StoreBackend::parse("sqlite"), None);
    }
}
