//! Redcache - A call-counting cache facade over Redis
//!
//! Stores scalar values under generated UUID keys, reads them back raw or
//! through typed decoders, and tracks how often each instrumented operation
//! has been invoked, with the counters living in the store itself.
//!
//! ```ignore
//! use redcache::{Cache, Config, Operation};
//!
//! let config = Config::from_env();
//! let cache = Cache::from_config(&config).await?;
//!
//! let key = cache.store("tomato").await?;
//! assert_eq!(cache.get_str(&key).await?.as_deref(), Some("tomato"));
//! assert_eq!(cache.call_count(Operation::Store).await?, 1);
//! ```

pub mod cache;
pub mod config;
pub mod error;
pub mod store;

pub use cache::{
    decode_float, decode_int, decode_str, Cache, CallCounter, KeyGenerator, Operation, Value,
};
pub use config::Config;
pub use error::{CacheError, Result};
pub use store::{MemoryStore, RedisStore, Store};
