//! Cache Entry Module
//!
//! Defines the unit of stored state: an opaque value plus an optional expiry.

// == Constants ==
/// Expiry sentinel meaning the entry never expires.
pub const NO_EXPIRY: i64 = 0;

// == Cache Entry ==
/// A single cached value with its absolute expiry time.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    /// The stored value, never interpreted by the engine
    pub value: V,
    /// Expiration timestamp (Unix seconds), `NO_EXPIRY` = never expires
    pub expiry: i64,
}

impl<V> CacheEntry<V> {
    // == Constructor ==
    /// Creates a new entry expiring at the given Unix timestamp.
    ///
    /// # Arguments
    /// * `value` - The value to store
    /// * `expiry` - Absolute Unix seconds, or `NO_EXPIRY`
    pub fn new(value: V, expiry: i64) -> Self {
        Self { value, expiry }
    }

    /// Creates an entry that never expires.
    pub fn persistent(value: V) -> Self {
        Self::new(value, NO_EXPIRY)
    }

    // == Is Expired ==
    /// Checks whether the entry is expired at `now` (Unix seconds).
    ///
    /// An entry with an expiry is expired once `now` is strictly past it;
    /// the expiry second itself is still live.
    pub fn is_expired_at(&self, now: i64) -> bool {
        self.expiry != NO_EXPIRY && now > self.expiry
    }

    /// Checks whether the entry is expired against the wall clock.
    pub fn is_expired(&self) -> bool {
        self.is_expired_at(current_timestamp())
    }

    /// Returns true if the entry has no expiry.
    pub fn never_expires(&self) -> bool {
        self.expiry == NO_EXPIRY
    }
}

// == Utility Functions ==
/// Returns current Unix timestamp in seconds.
pub fn current_timestamp() -> i64 {
    chrono::Utc::now().timestamp()
}
