//! Cache Module
//!
//! In-memory cache engine with LRU eviction and lazy expiration.

mod entry;
mod lru;
mod shared;
mod store;
mod traits;


// Re-export public types
pub use entry::{current_timestamp, CacheEntry, NO_EXPIRY};
pub use lru::{LruList, NodeId};
pub use shared::LruCache;
pub use store::LruStore;
pub use traits::Cache;
