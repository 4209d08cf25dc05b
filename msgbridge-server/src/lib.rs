//! msgbridge-server: bulletin board and private messages over Postgres
//!
//! Exposes a small set of remote-callable operations backed by two
//! tables. Every operation validates its input, runs one statement on
//! a dedicated connection inside a transaction, and answers with a
//! structured value; errors come back in-band, never as a transport
//! fault.

pub mod db;
pub mod http;
pub mod models;
pub mod ops;

pub use db::{DbConfig, DbError};
pub use http::{run_server, ServerConfig};
pub use models::ValidationError;
