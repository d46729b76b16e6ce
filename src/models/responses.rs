//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing HTTP response bodies.

use serde::Serialize;
use serde_json::Value;

use crate::cache::CacheEntry;

/// Envelope wrapping successful payloads as `{"data": ...}`
#[derive(Debug, Clone, Serialize)]
pub struct DataResponse<T> {
    pub data: T,
}

impl<T> DataResponse<T> {
    pub fn new(data: T) -> Self {
        Self { data }
    }
}

/// A single cache entry as seen by clients
#[derive(Debug, Clone, Serialize)]
pub struct EntryResponse {
    /// The entry key
    pub key: String,
    /// The stored value
    pub value: Value,
    /// Absolute expiry (Unix seconds), 0 = never
    pub expiry: i64,
}

impl EntryResponse {
    /// Builds the view of an engine entry
    pub fn new(key: impl Into<String>, entry: CacheEntry<Value>) -> Self {
        Self {
            key: key.into(),
            value: entry.value,
            expiry: entry.expiry,
        }
    }
}

/// Body returned by mutating operations
#[derive(Debug, Clone, Serialize)]
pub struct StatusResponse {
    pub status: String,
}

impl StatusResponse {
    pub fn success() -> Self {
        Self {
            status: "success".to_string(),
        }
    }
}

/// Response body for the health endpoint (GET /health)
#[derive(Debug, Clone, Serialize)]
pub struct HealthResponse {
    /// Health status (e.g., "healthy")
    pub status: String,
    /// Current timestamp in ISO 8601 format
    pub timestamp: String,
}

impl HealthResponse {
    /// Creates a new HealthResponse with current timestamp
    pub fn healthy() -> Self {
        Self {
            status: "healthy".to_string(),
            timestamp: chrono::Utc::now().to_rfc3339(),
        }
    }
}

/// Error response body for all error conditions
#[derive(Debug, Clone, Serialize)]
pub struct ErrorResponse {
    /// Error message describing what went wrong
    pub error: String,
}

impl ErrorResponse {
    /// Creates a new ErrorResponse
    pub fn new(error: impl Into<String>) -> Self {
        Self {
            error: error.into(),
        }
    }
}
