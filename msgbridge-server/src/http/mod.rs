//! HTTP transport adapter
//!
//! Thin mapping from HTTP requests onto the operation handlers. The
//! operations own validation and error shaping; routes only
//! deserialize input and serialize the operation's reply.

pub mod routes;
pub mod server;

pub use server::{build_router, run_server, AppState, ServerConfig, ServerError};
