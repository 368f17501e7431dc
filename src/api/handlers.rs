//! API Handlers
//!
//! HTTP request handlers for the key-value endpoints.
//!
//! Path segments arrive percent-decoded, so `%2F` inside a namespace or key
//! is kept as a literal `/`.

use std::sync::Arc;

use axum::{
    extract::{
        rejection::{PathRejection, QueryRejection},
        Path, Query, State,
    },
    Json,
};
use serde_json::Value;
use tracing::debug;

use crate::cache::Registry;
use crate::config::Config;
use crate::error::{ApiError, Result};
use crate::models::{HealthResponse, SetParams, TableResponse};

/// Application state shared across all handlers.
#[derive(Clone)]
pub struct AppState {
    /// Namespaced cache tables
    pub registry: Arc<Registry>,
}

impl AppState {
    /// Creates a new AppState around an existing registry.
    pub fn new(registry: Arc<Registry>) -> Self {
        Self { registry }
    }

    /// Creates a new AppState from configuration.
    ///
    /// Tables get a cleaner when the configured interval is non-zero.
    pub fn from_config(config: &Config) -> Self {
        let registry = match config.cleanup_interval() {
            Some(interval) => Registry::with_cleanup_interval(interval),
            None => Registry::new(),
        };
        Self::new(Arc::new(registry))
    }
}

/// Handler for GET /kv
///
/// Lists namespace names.
pub async fn list_handler(State(state): State<AppState>) -> Json<Vec<String>> {
    Json(state.registry.list())
}

/// Handler for GET /kv/:id
///
/// Describes one namespace, creating it if needed.
pub async fn table_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<String>, PathRejection>,
) -> Result<Json<TableResponse>> {
    let Path(id) = path?;
    let table = state.registry.store(&id);

    Ok(Json(TableResponse::new(
        id,
        table.count(),
        table.is_cleaner_running(),
    )))
}

/// Handler for GET /kv/:id/:key
///
/// Returns the stored JSON value, or `null` when the key is missing or expired.
pub async fn get_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<(String, String)>, PathRejection>,
) -> Result<Json<Value>> {
    let Path((id, key)) = path?;
    let value = state.registry.store(&id).get(&key);

    Ok(Json(value.unwrap_or(Value::Null)))
}

/// Handler for POST /kv/:id/:key?data=<json>[&ttl=<ms>]
///
/// Decodes `data` as JSON and stores it. Without `ttl` the value never expires.
pub async fn set_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<(String, String)>, PathRejection>,
    query: std::result::Result<Query<SetParams>, QueryRejection>,
) -> Result<&'static str> {
    let Path((id, key)) = path?;
    let Query(params) = query?;

    let data = params.data().ok_or(ApiError::MissingData)?;
    let value: Value = serde_json::from_str(data)?;
    let ttl = params.ttl();

    debug!(table = %id, key = %key, ?ttl, "Storing value");
    state.registry.store(&id).set(key, value, ttl);

    Ok("OK")
}

/// Handler for DELETE /kv/:id/:key
///
/// Removes the key; deleting a missing key is not an error.
pub async fn delete_handler(
    State(state): State<AppState>,
    path: std::result::Result<Path<(String, String)>, PathRejection>,
) -> Result<&'static str> {
    let Path((id, key)) = path?;
    state.registry.store(&id).delete(&key);

    Ok("OK")
}

/// Handler for GET /health
pub async fn health_handler() -> Json<HealthResponse> {
    Json(HealthResponse::healthy())
}
