//! Cache Facade Module
//!
//! The public API: store scalar values under generated keys, read them back
//! raw or through a decode function, and expose per-operation call counts.

use std::sync::Arc;

use tracing::{debug, info};

use crate::cache::{decode_int, decode_str, CallCounter, KeyGenerator, Operation, Value};
use crate::config::Config;
use crate::error::Result;
use crate::store::{RedisStore, Store};

// == Cache ==
/// Call-counted cache facade over a key-value store.
///
/// The facade exclusively owns its store handle; the data itself lives in
/// the external store and is shared with any other client of that store.
/// Creating an instance clears the store, so every instance starts with a
/// fresh namespace.
///
/// All methods take `&self`; wrap the cache in an [`Arc`] to share it
/// between concurrent callers.
#[derive(Debug)]
pub struct Cache<S> {
    /// Store connection handle, shared with the call counter
    store: Arc<S>,
    /// Random key source for new entries
    keys: KeyGenerator,
    /// Invocation counting for instrumented operations
    counter: CallCounter<S>,
}

impl<S: Store> Cache<S> {
    // == Constructor ==
    /// Creates a Cache over `store`, clearing it first.
    ///
    /// The clear completes before the instance is returned, so no caller can
    /// observe entries or counters from a previous lifetime.
    pub async fn new(store: S) -> Result<Self> {
        let store = Arc::new(store);
        store.clear().await?;
        info!("store flushed, cache ready");

        Ok(Self {
            counter: CallCounter::new(Arc::clone(&store)),
            keys: KeyGenerator::new(),
            store,
        })
    }

    // == Store ==
    /// Stores a scalar value under a freshly generated key and returns the key.
    ///
    /// The invocation is counted before the write; if counting cannot reach
    /// the store the whole call fails and nothing is written.
    ///
    /// # Arguments
    /// * `data` - Anything convertible into a [`Value`]: string, raw bytes,
    ///   integer or float
    pub async fn store(&self, data: impl Into<Value>) -> Result<String> {
        let value = data.into();
        let kind = value.kind();

        self.counter
            .wrap(Operation::Store, || async move {
                let key = self.keys.generate();
                self.store.set(&key, &value.into_bytes()).await?;
                debug!(key = %key, kind, "stored value");
                Ok(key)
            })
            .await
    }

    // == Get ==
    /// Fetches the raw bytes stored at `key`.
    ///
    /// Returns `None` if the key was never stored (or the store has since
    /// been cleared); a missing key is not an error.
    pub async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        self.get_with(key, Ok).await
    }

    // == Get With ==
    /// Fetches `key` and passes the raw bytes through `decode`.
    ///
    /// This is the single retrieval primitive; [`get`](Self::get) uses the
    /// identity decode and the typed accessors are thin specializations. A
    /// missing key short-circuits to `Ok(None)` without invoking `decode`.
    ///
    /// # Arguments
    /// * `key` - The key to fetch
    /// * `decode` - Conversion from the raw stored bytes to the target type
    pub async fn get_with<T>(
        &self,
        key: &str,
        decode: impl FnOnce(Vec<u8>) -> Result<T>,
    ) -> Result<Option<T>> {
        let fetched = self.store.get(key).await?;
        debug!(key = %key, found = fetched.is_some(), "fetched key");

        match fetched {
            Some(raw) => Ok(Some(decode(raw)?)),
            None => Ok(None),
        }
    }

    // == Get Str ==
    /// Fetches `key` as UTF-8 text.
    pub async fn get_str(&self, key: &str) -> Result<Option<String>> {
        self.get_with(key, decode_str).await
    }

    // == Get Int ==
    /// Fetches `key` as a base-10 integer.
    ///
    /// Fails with [`CacheError::Decode`](crate::error::CacheError::Decode)
    /// if the stored bytes are not a valid integer representation.
    pub async fn get_int(&self, key: &str) -> Result<Option<i64>> {
        self.get_with(key, decode_int).await
    }

    // == Call Count ==
    /// Returns how many `op` invocations have been recorded since the store
    /// was last cleared.
    pub async fn call_count(&self, op: Operation) -> Result<u64> {
        self.counter.count(op).await
    }
}

impl Cache<RedisStore> {
    /// Connects to the Redis server named by `config` and wraps it.
    pub async fn from_config(config: &Config) -> Result<Self> {
        let store = RedisStore::connect(config).await?;
        Self::new(store).await
    }
}
