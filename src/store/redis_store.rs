//! Redis Store Module
//!
//! Record store backed by Redis hashes over a multiplexed, auto-reconnecting
//! connection.

use std::collections::HashSet;
use std::env;

use async_trait::async_trait;
use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use tracing::{debug, info};
use url::Url;

use crate::error::{Result, ShopError};
use crate::store::{HashRecord, RecordStore};

/// Keys requested per SCAN round trip
const SCAN_BATCH: usize = 100;

// == Redis Settings ==
/// Connection parameters for one Redis endpoint.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RedisSettings {
    pub host: String,
    pub port: u16,
    /// Empty means no AUTH
    pub password: String,
    pub use_tls: bool,
}

impl Default for RedisSettings {
    fn default() -> Self {
        Self {
            host: "localhost".to_string(),
            port: 10001,
            password: String::new(),
            use_tls: false,
        }
    }
}

impl RedisSettings {
    /// Reads `<PREFIX>_HOST`, `<PREFIX>_PORT`, `<PREFIX>_PASSWORD` and
    /// `<PREFIX>_USE_SSL`, falling back to `defaults` for anything unset or
    /// unparseable.
    pub fn from_env_prefixed(prefix: &str, defaults: RedisSettings) -> Self {
        let var = |name: &str| env::var(format!("{}_{}", prefix, name)).ok();
        Self {
            host: var("HOST").unwrap_or(defaults.host),
            port: var("PORT")
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.port),
            password: var("PASSWORD").unwrap_or(defaults.password),
            use_tls: var("USE_SSL")
                .map(|v| v.trim().eq_ignore_ascii_case("true"))
                .unwrap_or(defaults.use_tls),
        }
    }

    /// Builds the `redis://` or `rediss://` URL, percent-encoding the password.
    pub fn connection_url(&self) -> Result<Url> {
        let scheme = if self.use_tls { "rediss" } else { "redis" };
        let mut url = Url::parse(&format!("{}://{}:{}/", scheme, self.host, self.port))
            .map_err(|e| ShopError::Store(format!("invalid store address: {}", e)))?;

        if !self.password.is_empty() {
            url.set_password(Some(&self.password))
                .map_err(|_| ShopError::Store("store address cannot carry a password".into()))?;
        }
        Ok(url)
    }

    /// Opens a client for these settings without connecting yet.
    pub fn client(&self) -> Result<Client> {
        Ok(Client::open(self.connection_url()?.as_str())?)
    }

    /// `host:port` for log lines; never includes the password.
    pub fn display_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// Escapes glob metacharacters so `prefix` matches literally in SCAN MATCH.
fn escape_glob(prefix: &str) -> String {
    let mut escaped = String::with_capacity(prefix.len());
    for ch in prefix.chars() {
        if matches!(ch, '*' | '?' | '[' | ']' | '\\') {
            escaped.push('\\');
        }
        escaped.push(ch);
    }
    escaped
}

// == Redis Store ==
/// Record store talking to a Redis server.
#[derive(Clone)]
pub struct RedisStore {
    conn: ConnectionManager,
}

impl RedisStore {
    /// Connects to the server described by `settings`.
    ///
    /// Fails with `ShopError::Store` if the server cannot be reached.
    pub async fn connect(settings: &RedisSettings) -> Result<Self> {
        let client = settings.client()?;
        let conn = ConnectionManager::new(client).await?;
        info!(
            addr = %settings.display_addr(),
            tls = settings.use_tls,
            "Connected to Redis"
        );
        Ok(Self { conn })
    }
}

#[async_trait]
impl RecordStore for RedisStore {
    async fn write(&self, key: &str, fields: &[(String, String)]) -> Result<()> {
        if fields.is_empty() {
            return Ok(());
        }
        let mut conn = self.conn.clone();
        let _: () = conn.hset_multiple(key, fields).await?;
        Ok(())
    }

    async fn read_all(&self, key: &str) -> Result<HashRecord> {
        let mut conn = self.conn.clone();
        let pairs: Vec<(String, String)> = conn.hgetall(key).await?;
        Ok(HashRecord::from(pairs))
    }

    async fn read_field(&self, key: &str, field: &str) -> Result<Option<String>> {
        let mut conn = self.conn.clone();
        let value: Option<String> = conn.hget(key, field).await?;
        Ok(value)
    }

    async fn scan_prefix(&self, prefix: &str) -> Result<Vec<String>> {
        let pattern = format!("{}*", escape_glob(prefix));
        let mut conn = self.conn.clone();
        let mut seen = HashSet::new();
        let mut keys = Vec::new();
        let mut cursor: u64 = 0;

        loop {
            let (next, batch): (u64, Vec<String>) = redis::cmd("SCAN")
                .arg(cursor)
                .arg("MATCH")
                .arg(&pattern)
                .arg("COUNT")
                .arg(SCAN_BATCH)
                .query_async(&mut conn)
                .await?;

            // SCAN may repeat a key across batches
            for key in batch {
                if seen.insert(key.clone()) {
                    keys.push(key);
                }
            }

            if next == 0 {
                break;
            }
            cursor = next;
        }

        debug!(prefix, count = keys.len(), "Scanned keys");
        Ok(keys)
    }

    async fn increment_field(&self, key: &str, field: &str, delta: i64) -> Result<i64> {
        let mut conn = self.conn.clone();
        let value: i64 = conn.hincr(key, field, delta).await?;
        Ok(value)
    }

    async fn delete_field(&self, key: &str, field: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.hdel(key, field).await?;
        Ok(())
    }

    async fn delete_key(&self, key: &str) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: () = conn.del(key).await?;
        Ok(())
    }

    async fn ping(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let _: String = redis::cmd("PING").query_async(&mut conn).await?;
        Ok(())
    }

    fn backend(&self) -> &'static str {
        "redis"
    }
}
