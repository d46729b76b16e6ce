//! Configuration Module
//!
//! Handles loading and managing server configuration from environment variables.

use std::env;
use std::str::FromStr;

const DEFAULT_CAPACITY: usize = 100;
const DEFAULT_PORT: u16 = 8080;
const DEFAULT_MIN_TTL: i64 = 0;
const DEFAULT_MAX_TTL: i64 = 86_400;
const DEFAULT_CORS_ORIGIN: &str = "http://localhost:5173";

/// Server configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// Maximum number of entries the cache can hold
    pub capacity: usize,
    /// HTTP server port
    pub server_port: u16,
    /// Exclusive lower bound for a requested TTL in seconds
    pub min_ttl: i64,
    /// Exclusive upper bound for a requested TTL in seconds
    pub max_ttl: i64,
    /// Origin allowed by CORS, `*` for any
    pub cors_origin: String,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_CAPACITY` - Maximum cache entries, must be positive (default: 100)
    /// - `SERVER_PORT` - HTTP server port (default: 8080)
    /// - `MIN_TTL` - Exclusive lower TTL bound in seconds (default: 0)
    /// - `MAX_TTL` - Exclusive upper TTL bound in seconds (default: 86400)
    /// - `CORS_ORIGIN` - Allowed origin (default: http://localhost:5173)
    pub fn from_env() -> Self {
        Self {
            capacity: match env_or("CACHE_CAPACITY", DEFAULT_CAPACITY) {
                0 => DEFAULT_CAPACITY,
                n => n,
            },
            server_port: env_or("SERVER_PORT", DEFAULT_PORT),
            min_ttl: env_or("MIN_TTL", DEFAULT_MIN_TTL),
            max_ttl: env_or("MAX_TTL", DEFAULT_MAX_TTL),
            cors_origin: env::var("CORS_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_CORS_ORIGIN.to_string()),
        }
    }
}

fn env_or<T: FromStr>(name: &str, default: T) -> T {
    env::var(name)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

impl Default for Config {
    fn default() -> Self {
        Self {
            capacity: DEFAULT_CAPACITY,
            server_port: DEFAULT_PORT,
            min_ttl: DEFAULT_MIN_TTL,
            max_ttl: DEFAULT_MAX_TTL,
            cors_origin: DEFAULT_CORS_ORIGIN.to_string(),
        }
    }
}
