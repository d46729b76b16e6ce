//! API Module
//!
//! HTTP handlers and routing for the cache server REST API.
//!
//! # Endpoints
//! - `GET /api/cache` - List all live entries
//! - `POST /api/cache` - Store a key-value pair
//! - `DELETE /api/cache` - Clear the cache
//! - `GET /api/cache/:key` - Retrieve an entry by key
//! - `DELETE /api/cache/:key` - Delete a key
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
