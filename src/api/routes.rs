//! API Routes
//!
//! Configures the Axum router with all cache server endpoints.

use axum::{routing::get, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

use super::handlers::{
    delete_handler, get_handler, health_handler, list_handler, set_handler, table_handler,
    AppState,
};

/// Creates the main router with all endpoints configured.
///
/// # Endpoints
/// - `GET /kv` - List namespaces
/// - `GET /kv/:id` - Namespace item count
/// - `GET /kv/:id/:key` - Read a value (`null` when absent)
/// - `POST /kv/:id/:key?data=<json>[&ttl=<ms>]` - Store a value
/// - `DELETE /kv/:id/:key` - Delete a value
/// - `GET /health` - Health check endpoint
///
/// # Middleware
/// - CORS: Allows any origin
/// - Tracing: Logs all requests
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/kv", get(list_handler))
        .route("/kv/:id", get(table_handler))
        .route(
            "/kv/:id/:key",
            get(get_handler).post(set_handler).delete(delete_handler),
        )
        .route("/health", get(health_handler))
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
