//! API Handlers
//!
//! HTTP request handlers for each cache server endpoint. All input
//! validation lives here; the engine stores whatever it is given.

use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, Path, State},
    Json,
};
use serde_json::Value;
use tracing::{debug, error};

use crate::cache::{current_timestamp, Cache, LruCache};
use crate::config::Config;
use crate::error::{CacheError, Result};
use crate::models::{DataResponse, EntryResponse, HealthResponse, SetRequest, StatusResponse};

/// Application state shared across all handlers.
///
/// Holds the cache engine behind its capability interface, so any
/// implementation can be injected at startup.
#[derive(Clone)]
pub struct AppState {
    /// Thread-safe cache engine
    pub cache: Arc<dyn Cache<Value>>,
    /// Server configuration
    pub config: Arc<Config>,
}

impl AppState {
    /// Creates a new AppState around an existing cache.
    pub fn new(cache: Arc<dyn Cache<Value>>, config: Config) -> Self {
        Self {
            cache,
            config: Arc::new(config),
        }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Initializes an LRU cache with the configured capacity.
    pub fn from_config(config: &Config) -> Self {
        let cache = Arc::new(LruCache::<Value>::new(config.capacity));
        Self::new(cache, config.clone())
    }
}

/// Handler for GET /api/cache
///
/// Lists every live entry, sorted by key. Recency is not affected.
pub async fn get_all_handler(
    State(state): State<AppState>,
) -> Json<DataResponse<Vec<EntryResponse>>> {
    let mut entries: Vec<EntryResponse> = state
        .cache
        .get_all()
        .into_iter()
        .map(|(key, entry)| EntryResponse::new(key, entry))
        .collect();
    entries.sort_by(|a, b| a.key.cmp(&b.key));

    Json(DataResponse::new(entries))
}

/// Handler for GET /api/cache/:key
///
/// Retrieves a single entry and marks it most recently used.
pub async fn get_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<DataResponse<EntryResponse>>> {
    let entry = state
        .cache
        .get(&key)
        .ok_or_else(|| CacheError::NotFound(key.clone()))?;

    Ok(Json(DataResponse::new(EntryResponse::new(key, entry))))
}

/// Handler for POST /api/cache
///
/// Stores a key-value pair. The requested TTL is converted to an absolute
/// expiry before it reaches the engine.
pub async fn set_handler(
    State(state): State<AppState>,
    payload: std::result::Result<Json<SetRequest>, JsonRejection>,
) -> Result<Json<StatusResponse>> {
    let Json(req) = payload.map_err(|rejection| {
        debug!("Rejected set request body: {}", rejection);
        CacheError::InvalidRequest("Invalid JSON format".to_string())
    })?;

    if let Some(error_msg) = req.validate(state.config.min_ttl, state.config.max_ttl) {
        return Err(CacheError::InvalidRequest(error_msg));
    }

    let expiry = req.expires_at(current_timestamp());
    state.cache.set(req.key, req.value, expiry)?;

    Ok(Json(StatusResponse::success()))
}

/// Handler for DELETE /api/cache/:key
pub async fn delete_handler(
    State(state): State<AppState>,
    Path(key): Path<String>,
) -> Result<Json<StatusResponse>> {
    state.cache.delete(&key)?;

    Ok(Json(StatusResponse::success()))
}

/// Handler for DELETE /api/cache
pub async fn clear_handler(State(state): State<AppState>) -> Result<Json<StatusResponse>> {
    state.cache.clear().map_err(|err| {
        error!("Failed to clear cache: {}", err);
        CacheError::Internal("Failed to clear cache".to_string())
    })?;

    Ok(Json(StatusResponse::success()))
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
