//! Cache capability interface
//!
//! The narrow set of operations a calling layer uses to drive the engine.
//! It is transport-agnostic: plain values in, plain values and errors out.

use std::collections::HashMap;

use crate::cache::CacheEntry;
use crate::error::Result;

/// Operations exposed by a cache engine.
///
/// Implementations must make each call atomic with respect to every other
/// call on the same instance.
pub trait Cache<V>: Send + Sync {
    /// Stores `value` under `key`, expiring at the absolute Unix second
    /// `expiry` (0 = never). Evicts the least recently used entry when a
    /// new key arrives at capacity.
    fn set(&self, key: String, value: V, expiry: i64) -> Result<()>;

    /// Returns the live entry for `key` and marks it most recently used.
    /// Expired entries are removed and reported as absent.
    fn get(&self, key: &str) -> Option<CacheEntry<V>>;

    /// Snapshot of all live entries. Does not affect recency.
    fn get_all(&self) -> HashMap<String, CacheEntry<V>>;

    /// Removes `key`, failing with `CacheError::NotFound` if absent.
    fn delete(&self, key: &str) -> Result<()>;

    /// Removes every entry.
    fn clear(&self) -> Result<()>;

    /// Number of occupied slots, expired-but-unread entries included.
    fn len(&self) -> usize;

    fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Maximum number of slots.
    fn capacity(&self) -> usize;
}
