//! HTTP layer
//!
//! Axum server with:
//! - Permissive CORS
//! - Request tracing
//! - Graceful shutdown
//! - JSON error responses (`{"error": kind, "detail": message}`)

pub mod error;
pub mod extractors;
pub mod routes;
pub mod server;

pub use error::ApiError;
pub use server::{AppState, build_router, serve};
