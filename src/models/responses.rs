//! Response DTOs for the cache server API
//!
//! Defines the structure of outgoing JSON response bodies.

use serde::Serialize;

/// Response body for `GET /kv/:id`
#[derive(Debug, Clone, Serialize)]
pub struct TableResponse {
    /// Namespace name
    pub name: String,
    /// Stored items, including expired ones not yet removed
    pub count: usize,
    /// Whether the table's cleaner is running
    pub cleaner_running: bool,
}

impl TableResponse {
    pub fn new(name: impl Into<String>, count: usize, cleaner_running: bool) -> Self {
        Self {
            name: name.into(),
            count,
            cleaner_running,
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
