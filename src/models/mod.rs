//! Request and Response models for the cache server API
//!
//! Query parameters and JSON bodies exchanged over HTTP.

pub mod requests;
pub mod responses;

// Re-export commonly used types
pub use requests::SetParams;
pub use responses::{HealthResponse, TableResponse};
