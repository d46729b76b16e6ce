//! Cache Store Module
//!
//! Unsynchronized cache engine combining a HashMap index with the LRU list
//! and lazy expiration. Thread safety is added by `LruCache`.

use std::collections::HashMap;

use tracing::debug;

use crate::cache::{CacheEntry, LruList, NodeId};
use crate::error::{CacheError, Result};

// == Cache Store ==
/// Bounded key-value storage with LRU eviction and lazy expiry.
///
/// Every key in `index` owns exactly one node in `order` and vice versa.
/// Time-dependent operations take `now` (Unix seconds) explicitly.
#[derive(Debug)]
pub struct LruStore<V> {
    /// Key to list node
    index: HashMap<String, NodeId>,
    /// Recency order, front = most recently used
    order: LruList<V>,
    /// Maximum number of slots, expired entries included
    capacity: usize,
}

impl<V> LruStore<V> {
    // == Constructor ==
    /// Creates a new store holding at most `capacity` entries.
    pub fn new(capacity: usize) -> Self {
        Self {
            index: HashMap::with_capacity(capacity),
            order: LruList::with_capacity(capacity),
            capacity,
        }
    }

    // == Set ==
    /// Stores a value under `key` with an absolute expiry.
    ///
    /// An existing key is overwritten in place and becomes most recently
    /// used; occupancy does not change so nothing is evicted. A new key
    /// evicts the least recently used entry when the store is full.
    ///
    /// # Arguments
    /// * `key` - The key to store
    /// * `value` - The value to store
    /// * `expiry` - Absolute Unix seconds, 0 for no expiry
    pub fn set(&mut self, key: String, value: V, expiry: i64) -> Result<()> {
        if let Some(&id) = self.index.get(&key) {
            if let Some(entry) = self.order.entry_mut(id) {
                *entry = CacheEntry::new(value, expiry);
            }
            self.order.move_to_front(id);
            return Ok(());
        }

        if self.order.len() >= self.capacity {
            match self.order.pop_back() {
                Some((evicted_key, _)) => {
                    self.index.remove(&evicted_key);
                    debug!("Evicted least recently used key '{}'", evicted_key);
                }
                None => {
                    return Err(CacheError::CacheFull(
                        "Cache is full and eviction failed".to_string(),
                    ));
                }
            }
        }

        let id = self.order.push_front(key.clone(), CacheEntry::new(value, expiry));
        self.index.insert(key, id);

        Ok(())
    }

    // == Get ==
    /// Looks up `key` as of `now`.
    ///
    /// A live hit becomes most recently used. An expired entry is purged
    /// and reported as absent.
    pub fn get(&mut self, key: &str, now: i64) -> Option<&CacheEntry<V>> {
        let id = *self.index.get(key)?;

        if self.order.entry(id)?.is_expired_at(now) {
            self.purge(id);
            debug!("Purged expired key '{}' on read", key);
            return None;
        }

        self.order.move_to_front(id);
        self.order.entry(id)
    }

    // == Get All ==
    /// Returns every entry that is live at `now`.
    ///
    /// Expired entries met during the scan are purged. Recency order of the
    /// remaining entries is left untouched.
    pub fn get_all(&mut self, now: i64) -> HashMap<String, CacheEntry<V>>
    where
        V: Clone,
    {
        let mut live = HashMap::with_capacity(self.order.len());
        let mut expired = Vec::new();

        for (id, key, entry) in self.order.iter() {
            if entry.is_expired_at(now) {
                expired.push(id);
            } else {
                live.insert(key.to_string(), entry.clone());
            }
        }

        for id in expired {
            if let Some(key) = self.purge(id) {
                debug!("Purged expired key '{}' during scan", key);
            }
        }

        live
    }

    // == Delete ==
    /// Removes an entry by key.
    ///
    /// # Arguments
    /// * `key` - The key to delete
    pub fn delete(&mut self, key: &str) -> Result<()> {
        match self.index.remove(key) {
            Some(id) => {
                self.order.remove(id);
                Ok(())
            }
            None => Err(CacheError::NotFound(key.to_string())),
        }
    }

    // == Clear ==
    /// Removes every entry.
    pub fn clear(&mut self) {
        self.index.clear();
        self.order.clear();
    }

    // == Length ==
    /// Returns the number of occupied slots, expired entries included.
    pub fn len(&self) -> usize {
        self.order.len()
    }

    // == Is Empty ==
    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }

    /// Returns the maximum number of slots.
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    /// Keys from most to least recently used.
    pub fn keys_by_recency(&self) -> Vec<String> {
        self.order.iter().map(|(_, key, _)| key.to_string()).collect()
    }

    /// Checks that `index` and `order` describe the same set of nodes.
    pub fn is_consistent(&self) -> bool {
        self.index.len() == self.order.len()
            && self.order.len() <= self.capacity
            && self
                .order
                .iter()
                .all(|(id, key, _)| self.index.get(key) == Some(&id))
    }

    /// Removes the node at `id` from both structures.
    fn purge(&mut self, id: NodeId) -> Option<String> {
        let (key, _) = self.order.remove(id)?;
        self.index.remove(&key);
        Some(key)
    }
}
