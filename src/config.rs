//! Configuration Module
//!
//! Handles loading and managing store connection settings from environment variables.

use std::env;
use std::time::Duration;

/// Default connection URL for the backing store.
pub const DEFAULT_STORE_URL: &str = "redis://127.0.0.1:6379/";

/// Cache facade configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Connection URL for the backing store (host, port and credentials ride here)
    pub store_url: String,
    /// Upper bound in milliseconds for a single store round-trip
    pub op_timeout_ms: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `REDIS_URL` - Store connection URL (default: `redis://127.0.0.1:6379/`)
    /// - `STORE_TIMEOUT_MS` - Per-operation timeout in milliseconds (default: 2000)
    pub fn from_env() -> Self {
        Self {
            store_url: env::var("REDIS_URL").unwrap_or_else(|_| DEFAULT_STORE_URL.to_string()),
            op_timeout_ms: env::var("STORE_TIMEOUT_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(2000),
        }
    }

    /// Returns the per-operation timeout as a [`Duration`].
    pub fn op_timeout(&self) -> Duration {
        Duration::from_millis(self.op_timeout_ms)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            store_url: DEFAULT_STORE_URL.to_string(),
            op_timeout_ms: 2000,
        }
    }
}
