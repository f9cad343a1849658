//! Call Counter Module
//!
//! Cross-cutting call counting for designated cache operations. Counters
//! live in the same store as ordinary entries, so they share its lifetime
//! and are wiped by the same flush.

use std::future::Future;
use std::sync::Arc;

use crate::cache::decode_int;
use crate::error::Result;
use crate::store::Store;

// == Operation ==
/// Stable identity of an instrumented cache operation.
///
/// The qualified name doubles as the counter's key in the store. Entry keys
/// are random UUIDs, so the two namespaces cannot collide.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    /// The facade's `store` operation
    Store,
}

impl Operation {
    /// Returns the operation's stable qualified name.
    pub fn qualified_name(&self) -> &'static str {
        match self {
            Operation::Store => "Cache::store",
        }
    }
}

// == Call Counter ==
/// Counts invocations of instrumented operations through the store itself.
///
/// The wrapper observes without altering: it increments the operation's
/// counter, then runs the wrapped call and hands back its result unchanged,
/// failures included. The only failure mode it adds is
/// [`StoreUnavailable`](crate::error::CacheError::StoreUnavailable) from the
/// increment round-trip, in which case the wrapped call never runs.
#[derive(Debug)]
pub struct CallCounter<S> {
    store: Arc<S>,
}

impl<S: Store> CallCounter<S> {
    // == Constructor ==
    /// Creates a counter recording through `store`.
    pub fn new(store: Arc<S>) -> Self {
        Self { store }
    }

    // == Wrap ==
    /// Counts one invocation of `op`, then runs `call`.
    ///
    /// The increment is atomic in the store, so concurrent callers are each
    /// counted exactly once.
    pub async fn wrap<F, Fut, T>(&self, op: Operation, call: F) -> Result<T>
    where
        F: FnOnce() -> Fut,
        Fut: Future<Output = Result<T>>,
    {
        self.store.incr(op.qualified_name()).await?;
        call().await
    }

    // == Count ==
    /// Returns how many invocations of `op` have been recorded since the
    /// store was last cleared. An absent counter reads as zero.
    pub async fn count(&self, op: Operation) -> Result<u64> {
        match self.store.get(op.qualified_name()).await? {
            Some(raw) => Ok(decode_int(raw)? as u64),
            None => Ok(0),
        }
    }
}
