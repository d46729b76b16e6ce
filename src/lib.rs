//! LRU Cache Server - An in-memory cache server
//!
//! Provides a capacity-bounded LRU cache with lazy per-entry expiration,
//! exposed over a small JSON API.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;

pub use api::AppState;
pub use cache::{Cache, CacheEntry, LruCache};
pub use config::Config;
pub use error::CacheError;
