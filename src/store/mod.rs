//! Store Client Module
//!
//! The facade's view of the external key-value store, plus the built-in
//! backends: a networked Redis client and an in-process map for tests and
//! embedded use.

mod memory;
mod redis;

// Re-export public types
pub use memory::MemoryStore;
pub use redis::RedisStore;

use async_trait::async_trait;

use crate::error::Result;

// == Store Trait ==
/// Backend seam for the cache facade.
///
/// Implementations persist raw bytes under string keys and provide exactly
/// the four capabilities the facade consumes. Every operation is a single
/// bounded round-trip; an unreachable or unresponsive store surfaces as
/// [`CacheError::StoreUnavailable`](crate::error::CacheError::StoreUnavailable).
#[async_trait]
pub trait Store: Send + Sync {
    /// Persists `value` under `key`, overwriting any existing value
    /// (last writer wins).
    async fn set(&self, key: &str, value: &[u8]) -> Result<()>;

    /// Returns the raw stored bytes, or `None` if the key does not exist.
    ///
    /// A missing key is never an error.
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>>;

    /// Atomically increments the integer counter at `key` by 1, creating it
    /// at 1 if absent, and returns the new value.
    ///
    /// Atomicity under concurrent callers is part of the contract; the
    /// facade's call counting relies on it.
    async fn incr(&self, key: &str) -> Result<i64>;

    /// Removes every key-value pair in the store's current namespace.
    async fn clear(&self) -> Result<()>;
}
