//! Redcache - A call-counting cache facade over Redis
//!
//! Connects to the configured Redis server, stores one value of each
//! supported kind, reads them back and reports the recorded call count.

mod cache;
mod config;
mod error;
mod store;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use cache::{decode_float, Cache, Operation};
use config::Config;

/// Main entry point for the Redcache demo.
///
/// # Startup Sequence
/// 1. Initialize tracing subscriber for logging
/// 2. Load configuration from environment variables
/// 3. Connect to the Redis store (clearing it on arrival)
/// 4. Store one value of each supported kind and read each back
/// 5. Report the recorded call count for the store operation
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing subscriber with env filter
    // Defaults to "info" level, can be overridden with RUST_LOG env var
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "redcache=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Redcache");

    // Load configuration from environment variables
    let config = Config::from_env();
    info!(
        "Configuration loaded: store_url={}, op_timeout={}ms",
        config.store_url, config.op_timeout_ms
    );

    let cache = Cache::from_config(&config)
        .await
        .context("failed to connect to the store")?;

    // Store one value of each supported kind
    let text_key = cache.store("tomato").await?;
    let int_key = cache.store(42).await?;
    let float_key = cache.store(2.718).await?;
    let bytes_key = cache.store(&b"\x00\xffraw"[..]).await?;

    // Read each back through the matching accessor
    let text = cache.get_str(&text_key).await?;
    let int = cache.get_int(&int_key).await?;
    let float = cache.get_with(&float_key, decode_float).await?;
    let bytes = cache.get(&bytes_key).await?;

    info!("Text round-trip: {:?}", text);
    info!("Int round-trip: {:?}", int);
    info!("Float round-trip: {:?}", float);
    info!("Bytes round-trip: {} bytes", bytes.map_or(0, |b| b.len()));

    let stores = cache.call_count(Operation::Store).await?;
    info!("Store was called {} times", stores);

    Ok(())
}
