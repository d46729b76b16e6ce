//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{
    http::{header, HeaderValue, Method},
    routing::get,
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};
use tracing::warn;

use super::handlers::{
    clear_handler, delete_handler, get_all_handler, get_handler, health_handler, set_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /api/cache` - List all live entries
/// - `POST /api/cache` - Store a key-value pair
/// - `DELETE /api/cache` - Remove every entry
/// - `GET /api/cache/:key` - Retrieve an entry by key
/// - `DELETE /api/cache/:key` - Delete an entry
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows the configured origin
/// - Tracing: Logs all requests for debugging
pub fn create_router(state: AppState) -> Router {
    let cors = cors_layer(&state.config.cors_origin);

    let api = Router::new()
        .route(
            "/cache",
            get(get_all_handler).post(set_handler).delete(clear_handler),
        )
        .route("/cache/:key", get(get_handler).delete(delete_handler));

    Router::new()
        .nest("/api", api)
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

/// Builds the CORS layer for `origin`, where `*` allows any origin.
fn cors_layer(origin: &str) -> CorsLayer {
    let allow_origin = if origin == "*" {
        AllowOrigin::any()
    } else {
        match HeaderValue::from_str(origin) {
            Ok(value) => AllowOrigin::exact(value),
            Err(_) => {
                warn!("Invalid CORS origin '{}', allowing any origin", origin);
                AllowOrigin::any()
            }
        }
    };

    CorsLayer::new()
        .allow_origin(allow_origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::DELETE])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION])
}
