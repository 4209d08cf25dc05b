//! Liveness and status endpoints

use axum::routing::get;
use axum::Router;

use crate::ops;

/// GET /ping - liveness probe
async fn ping() -> &'static str {
    ops::ping()
}

/// GET /status - human-readable running-state text
async fn status() -> String {
    ops::status()
}

/// Status routes
pub fn router<S>() -> Router<S>
where
    S: Clone + Send + Sync + 'static,
{
    Router::new()
        .route("/ping", get(ping))
        .route("/status", get(status))
}
