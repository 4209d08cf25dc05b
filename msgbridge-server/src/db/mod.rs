//! Database access: per-operation connections, schema provisioning,
//! and the message store.

pub mod schema;
pub mod store;

use futures::future::BoxFuture;
use sqlx::{Connection, PgConnection, Postgres, Transaction};

/// Database configuration, constructed once at startup and passed by
/// reference into every operation.
#[derive(Debug, Clone)]
pub struct DbConfig {
    /// PostgreSQL connection string
    pub url: String,
}

impl DbConfig {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }
}

/// Database error type
#[derive(Debug, thiserror::Error)]
pub enum DbError {
    #[error("could not connect to database: {0}")]
    Connect(#[source] sqlx::Error),

    #[error("database error: {0}")]
    Sqlx(#[from] sqlx::Error),

    #[error("{resource} {id} not found")]
    NotFound { resource: &'static str, id: i64 },
}

/// Run `op` on a dedicated connection inside a single transaction.
///
/// Opens exactly one connection per invocation, no pooling. The
/// transaction commits when `op` returns Ok, rolls back when it
/// returns Err, and the connection is closed on every exit path.
pub async fn with_connection<T, F>(config: &DbConfig, op: F) -> Result<T, DbError>
where
    T: Send,
    F: for<'c> FnOnce(&'c mut Transaction<'_, Postgres>) -> BoxFuture<'c, Result<T, DbError>>
        + Send
        + Sync,
{
    let mut conn = PgConnection::connect(&config.url)
        .await
        .map_err(DbError::Connect)?;

    let outcome = conn.transaction(op).await;

    if let Err(err) = conn.close().await {
        tracing::warn!(error = %err, "database connection did not close cleanly");
    }

    outcome
}
