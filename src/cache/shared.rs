//! Thread-safe cache engine
//!
//! Wraps `LruStore` in a single mutex. Every operation, reads included,
//! takes the same lock, so callers never observe a half-updated
//! index/list pair. The lock is never held across an await or a callback.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use crate::cache::{current_timestamp, Cache, CacheEntry, LruStore};
use crate::error::Result;

// == LRU Cache ==
/// Process-wide cache instance shared between request handlers.
#[derive(Debug)]
pub struct LruCache<V> {
    store: Mutex<LruStore<V>>,
}

impl<V> LruCache<V> {
    // == Constructor ==
    /// Creates a new cache holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            store: Mutex::new(LruStore::new(capacity)),
        }
    }

    // Store methods never panic mid-mutation, so a poisoned lock still
    // guards consistent state.
    fn lock(&self) -> MutexGuard<'_, LruStore<V>> {
        self.store.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Keys from most to least recently used.
    pub fn keys_by_recency(&self) -> Vec<String> {
        self.lock().keys_by_recency()
    }

    /// Checks index/list consistency under the lock.
    pub fn is_consistent(&self) -> bool {
        self.lock().is_consistent()
    }
}

impl<V> Cache<V> for LruCache<V>
where
    V: Clone + Send,
{
    fn set(&self, key: String, value: V, expiry: i64) -> Result<()> {
        self.lock().set(key, value, expiry)
    }

    fn get(&self, key: &str) -> Option<CacheEntry<V>> {
        self.lock().get(key, current_timestamp()).cloned()
    }

    fn get_all(&self) -> HashMap<String, CacheEntry<V>> {
        self.lock().get_all(current_timestamp())
    }

    fn delete(&self, key: &str) -> Result<()> {
        self.lock().delete(key)
    }

    fn clear(&self) -> Result<()> {
        self.lock().clear();
        Ok(())
    }

    fn len(&self) -> usize {
        self.lock().len()
    }

    fn capacity(&self) -> usize {
        self.lock().capacity()
    }
}
