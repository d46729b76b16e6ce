//! Request DTOs for the cache server API
//!
//! Defines the structure of incoming HTTP request bodies.

use serde::Deserialize;
use serde_json::Value;

use crate::cache::NO_EXPIRY;

/// Request body for the SET operation (POST /api/cache)
///
/// # Fields
/// - `key`: The cache key to store the value under
/// - `value`: Any non-empty JSON value
/// - `expiry`: Time to live in seconds, 0 for no expiry
#[derive(Debug, Clone, Deserialize)]
pub struct SetRequest {
    /// The cache key
    #[serde(default)]
    pub key: String,
    /// The value to store
    #[serde(default)]
    pub value: Value,
    /// Time to live in seconds
    #[serde(default)]
    pub expiry: i64,
}

impl SetRequest {
    /// Validates the request data against the allowed TTL bounds
    ///
    /// Returns an error message if validation fails, None if valid.
    pub fn validate(&self, min_ttl: i64, max_ttl: i64) -> Option<String> {
        if self.key.is_empty() {
            return Some("Key cannot be empty".to_string());
        }
        if self.value.is_null() || self.value.as_str() == Some("") {
            return Some("Value cannot be empty".to_string());
        }
        if self.expiry != NO_EXPIRY && (self.expiry <= min_ttl || self.expiry >= max_ttl) {
            return Some(format!("Expiry must be in range {} - {}", min_ttl, max_ttl));
        }
        None
    }

    /// Absolute Unix expiry for an entry written at `now`.
    pub fn expires_at(&self, now: i64) -> i64 {
        if self.expiry == NO_EXPIRY {
            NO_EXPIRY
        } else {
            now.saturating_add(self.expiry)
        }
    }
}
