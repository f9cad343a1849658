//! In-Process Store Module
//!
//! A map-backed [`Store`] used as the test double and embedded backend.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::error::{CacheError, Result};
use crate::store::Store;

// == Memory Store ==
/// In-process [`Store`] backed by a `HashMap`.
///
/// Cloning returns another handle to the same underlying map, the way two
/// connections reach one database. Writes and increments go through a write
/// lock, so `incr` is atomic under concurrent callers.
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, Vec<u8>>>>,
}

impl MemoryStore {
    // == Constructor ==
    /// Creates a new empty MemoryStore.
    pub fn new() -> Self {
        Self::default()
    }

    // == Length ==
    /// Returns the current number of stored keys.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    // == Is Empty ==
    /// Returns true if the store holds no keys.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl Store for MemoryStore {
    async fn set(&self, key: &str, value: &[u8]) -> Result<()> {
        self.entries
            .write()
            .await
            .insert(key.to_string(), value.to_vec());
        Ok(())
    }

    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        Ok(self.entries.read().await.get(key).cloned())
    }

    async fn incr(&self, key: &str) -> Result<i64> {
        // Held across read-modify-write, which is what makes incr atomic
        let mut entries = self.entries.write().await;

        let current = match entries.get(key) {
            Some(raw) => std::str::from_utf8(raw)
                .ok()
                .and_then(|s| s.trim().parse::<i64>().ok())
                .ok_or_else(|| {
                    CacheError::Decode(format!("value at '{}' is not an integer", key))
                })?,
            None => 0,
        };

        let next = current + 1;
        entries.insert(key.to_string(), next.to_string().into_bytes());
        Ok(next)
    }

    async fn clear(&self) -> Result<()> {
        self.entries.write().await.clear();
        Ok(())
    }
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        tokio_test::block_on(async {
            let store = MemoryStore::new();

            store.set("key1", b"value1").await.unwrap();
            let value = store.get("key1").await.unwrap();

            assert_eq!(value.as_deref(), Some(&b"value1"[..]));
            assert_eq!(store.len().await, 1);
        });
    }

    #[test]
    fn test_get_missing_key_is_none() {
        tokio_test::block_on(async {
            let store = MemoryStore::new();
            assert_eq!(store.get("nope").await.unwrap(), None);
        });
    }

    #[test]
    fn test_set_overwrites() {
        tokio_test::block_on(async {
            let store = MemoryStore::new();

            store.set("key1", b"first").await.unwrap();
            store.set("key1", b"second").await.unwrap();

            assert_eq!(store.get("key1").await.unwrap().as_deref(), Some(&b"second"[..]));
            assert_eq!(store.len().await, 1);
        });
    }

    #[test]
    fn test_empty_value_is_stored_not_absent() {
        tokio_test::block_on(async {
            let store = MemoryStore::new();

            store.set("empty", b"").await.unwrap();

            assert_eq!(store.get("empty").await.unwrap().as_deref(), Some(&b""[..]));
        });
    }

    #[tokio::test]
    async fn test_incr_creates_at_one() {
        let store = MemoryStore::new();

        assert_eq!(store.incr("counter").await.unwrap(), 1);
        assert_eq!(store.incr("counter").await.unwrap(), 2);
        assert_eq!(store.incr("counter").await.unwrap(), 3);

        assert_eq!(store.get("counter").await.unwrap().as_deref(), Some(&b"3"[..]));
    }

    #[tokio::test]
    async fn test_incr_on_non_integer_fails() {
        let store = MemoryStore::new();

        store.set("text", b"not-a-number").await.unwrap();
        let result = store.incr("text").await;

        assert!(matches!(result, Err(CacheError::Decode(_))));
    }

    #[tokio::test]
    async fn test_clear_removes_everything() {
        let store = MemoryStore::new();

        store.set("a", b"1").await.unwrap();
        store.set("b", b"2").await.unwrap();
        store.incr("counter").await.unwrap();

        store.clear().await.unwrap();

        assert!(store.is_empty().await);
        assert_eq!(store.get("a").await.unwrap(), None);
        assert_eq!(store.get("counter").await.unwrap(), None);
    }

    #[tokio::test]
    async fn test_clone_shares_the_same_map() {
        let store = MemoryStore::new();
        let other = store.clone();

        store.set("shared", b"yes").await.unwrap();

        assert_eq!(other.get("shared").await.unwrap().as_deref(), Some(&b"yes"[..]));
    }

    #[tokio::test]
    async fn test_concurrent_incr_loses_nothing() {
        let store = MemoryStore::new();
        let mut handles = Vec::new();

        for _ in 0..8 {
            let store = store.clone();
            handles.push(tokio::spawn(async move {
                for _ in 0..50 {
                    store.incr("hits").await.unwrap();
                }
            }));
        }
        for handle in handles {
            handle.await.unwrap();
        }

        assert_eq!(store.incr("hits").await.unwrap(), 401);
    }
}
