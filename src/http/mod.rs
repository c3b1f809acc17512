//! HTTP transport layer.
//!
//! Axum server with:
//! - CORS (localhost only by default)
//! - Request tracing
//! - Graceful shutdown
//! - GraphQL execute + GraphiQL endpoints

pub mod server;

pub use server::{build_router, run_server};
