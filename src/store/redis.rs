//! Redis Store Module
//!
//! Networked [`Store`] backend over a multiplexed Redis connection.

use std::future::Future;
use std::time::Duration;

use async_trait::async_trait;
use redis::aio::MultiplexedConnection;
use redis::AsyncCommands;
use tokio::time::timeout;
use tracing::{debug, warn};

use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::store::Store;

// == Redis Store ==
/// [`Store`] backed by a Redis server.
///
/// Every command is a single round-trip bounded by the configured timeout;
/// an expired timeout or a connection failure surfaces as
/// [`CacheError::StoreUnavailable`]. The multiplexed connection is cheap to
/// clone and safe for concurrent callers, and Redis itself provides the
/// atomic `INCR` and last-writer-wins `SET` semantics the facade relies on.
#[derive(Clone)]
pub struct RedisStore {
    conn: MultiplexedConnection,
    op_timeout: Duration,
}

impl RedisStore {
    // == Constructor ==
    /// Connects to the Redis server named by `config`.
    ///
    /// The connection is established eagerly, so an unreachable server fails
    /// here rather than on first use.
    pub async fn connect(config: &Config) -> Result<Self> {
        let client = redis::Client::open(config.store_url.as_str())?;

        let conn = match timeout(
            config.op_timeout(),
            client.get_multiplexed_async_connection(),
        )
        .await
        {
            Ok(conn) => conn?,
            Err(_) => {
                return Err(CacheError::StoreUnavailable(format!(
                    "no connection to {} within {}ms",
                    config.store_url, config.op_timeout_ms
                )))
            }
        };
        debug!(url = %config.store_url, "connected to store");

        Ok(Self {
            conn,
            op_timeout: config.op_timeout(),
        })
    }

    // == Bounded Round-Trip ==
    /// Drives one command to completion within the operation timeout.
    async fn run<T>(
        &self,
        command: impl Future<Output = redis::RedisResult<T>> + Send,
    ) -> Result<T> {
        match timeout(self.op_timeout, command).await {
            Ok(reply) => Ok(reply?),
            Err(_) => {
                let timeout_ms = self.op_timeout.as_millis() as u64;
                warn!(timeout_ms, "store round-trip timed out");
                Err(CacheError::StoreUnavailable(format!(
                    "store did not respond within {}ms",
                    timeout_ms
                )))
            }
        }
    }
}

#[async_trait]
impl Store for RedisStore {
    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        let mut conn = self.conn.clone();
        self.run(conn.set(key, value)).await
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        let mut conn = self.conn.clone();
        self.run(conn.get(key)).await
    }

    async fn incr(&self, key: &str) -> Result<i64> {
        let mut conn = self.conn.clone();
        self.run(conn.incr(key, 1i64)).await
    }

    async fn clear(&self) -> Result<()> {
        let mut conn = self.conn.clone();
        let flush = redis::cmd("FLUSHDB");
        self.run(flush.query_async(&mut conn)).await
    }
}
