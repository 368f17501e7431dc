//! API Module
//!
//! HTTP handlers and routing exposing the cache over REST.
//!
//! # Endpoints
//! - `GET /kv` - List namespaces
//! - `GET /kv/:id` - Describe a namespace
//! - `GET /kv/:id/:key` - Read a value
//! - `POST /kv/:id/:key` - Store a value
//! - `DELETE /kv/:id/:key` - Delete a value
//! - `GET /health` - Health check endpoint

pub mod handlers;
pub mod routes;

pub use handlers::*;
pub use routes::create_router;
