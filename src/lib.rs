//! TTL KV - Namespaced in-memory key-value cache
//!
//! Short-lived shared state for cooperating processes, with per-item TTL,
//! lazy and active expiry, and an HTTP interface.

pub mod api;
pub mod cache;
pub mod config;
pub mod error;
pub mod models;
mod tasks;

pub use api::{create_router, AppState};
pub use cache::{CacheTable, Registry, Ttl};
pub use config::Config;
