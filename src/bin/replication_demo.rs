//! Replication demo
//!
//! Writes two lists into a primary Redis endpoint and reads them back from a
//! replica, printing both so replication can be checked by eye.
//!
//! # Environment Variables
//! - `PRIMARY_REDIS_HOST` / `PRIMARY_REDIS_PORT` (default: localhost:10001)
//! - `REPLICA_REDIS_HOST` / `REPLICA_REDIS_PORT` (default: localhost:12000)
//! - `*_REDIS_PASSWORD`, `*_REDIS_USE_SSL` per endpoint

use anyhow::Context;
use rand::Rng;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use tracing::{error, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use redis_cart::store::RedisSettings;

const NUM_LIST: &str = "lab:num_list";
const RAND_LIST: &str = "lab:rand_list";
const LIST_LEN: i64 = 100;
const RAND_MAX: i64 = 1000;

/// 1..=LIST_LEN in push order.
fn sequence() -> Vec<i64> {
    (1..=LIST_LEN).collect()
}

/// LIST_LEN values drawn from 1..=RAND_MAX.
fn random_values(rng: &mut impl Rng) -> Vec<i64> {
    (0..LIST_LEN).map(|_| rng.gen_range(1..=RAND_MAX)).collect()
}

/// Connects and pings one endpoint, logging its client id.
async fn connect(label: &str, settings: &RedisSettings) -> anyhow::Result<MultiplexedConnection> {
    let addr = settings.display_addr();
    let client = settings.client()?;
    let mut conn = client
        .get_multiplexed_async_connection()
        .await
        .with_context(|| format!("failed to connect to {} at {}", label, addr))?;

    let _: String = redis::cmd("PING")
        .query_async(&mut conn)
        .await
        .with_context(|| format!("{} at {} did not answer PING", label, addr))?;
    let client_id: i64 = redis::cmd("CLIENT")
        .arg("ID")
        .query_async(&mut conn)
        .await
        .with_context(|| format!("{} at {} rejected CLIENT ID", label, addr))?;

    info!("{}: connected to {} (client id {})", label, addr, client_id);
    Ok(conn)
}

async fn run() -> anyhow::Result<()> {
    let primary_settings = RedisSettings::from_env_prefixed("PRIMARY_REDIS", RedisSettings::default());
    let replica_settings = RedisSettings::from_env_prefixed(
        "REPLICA_REDIS",
        RedisSettings {
            port: 12000,
            ..RedisSettings::default()
        },
    );

    let mut primary = connect("primary", &primary_settings).await?;
    let mut replica = connect("replica", &replica_settings).await?;

    let _: () = primary.del(vec![NUM_LIST, RAND_LIST]).await?;
    info!("Cleared existing keys: {}, {}", NUM_LIST, RAND_LIST);

    let numbers = sequence();
    let _: () = primary.lpush(NUM_LIST, &numbers).await?;
    info!("Inserted integers 1-{} into primary key {}", LIST_LEN, NUM_LIST);

    let randoms = random_values(&mut rand::thread_rng());
    let _: () = primary.lpush(RAND_LIST, &randoms).await?;
    info!(
        "Inserted {} random values (1-{}) into primary key {}",
        LIST_LEN, RAND_MAX, RAND_LIST
    );

    // Most recently pushed first
    let last = (LIST_LEN - 1) as isize;
    let numbers_back: Vec<i64> = replica.lrange(NUM_LIST, 0, last).await?;
    let randoms_back: Vec<i64> = replica.lrange(RAND_LIST, 0, last).await?;

    println!("Reversed integers read from replica: {:?}", numbers_back);
    println!("Reversed randoms read from replica: {:?}", randoms_back);

    info!("Insert on primary and read-back from replica completed");
    Ok(())
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let _ = dotenvy::dotenv();

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "replication_demo=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    if let Err(err) = run().await {
        error!("Replication demo aborted: {:#}", err);
        return Err(err);
    }
    Ok(())
}
