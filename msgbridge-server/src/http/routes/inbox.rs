//! Private message endpoints

use std::sync::Arc;

use axum::extract::{Path, Query, State};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;

use crate::http::server::AppState;
use crate::ops::{self, MessageEntry, ReadReply};

/// Send message request
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    pub from_user_id: i64,
    pub to_user_id: i64,
    pub content: String,
}

/// Read query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ReadParams {
    pub limit: Option<i64>,
}

/// POST /messages - send a private message
async fn send_message(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SendMessageRequest>,
) -> Json<String> {
    Json(
        ops::private_message_send(&state.db, req.from_user_id, req.to_user_id, &req.content)
            .await,
    )
}

/// GET /messages/{to_user_id} - read a user's inbox, newest first
async fn read_inbox(
    State(state): State<Arc<AppState>>,
    Path(to_user_id): Path<i64>,
    Query(params): Query<ReadParams>,
) -> Json<ReadReply<MessageEntry>> {
    Json(ops::private_message_read(&state.db, to_user_id, params.limit).await)
}

/// POST /messages/{id}/read - mark one message as read
async fn mark_read(State(state): State<Arc<AppState>>, Path(id): Path<i64>) -> Json<String> {
    Json(ops::private_message_mark_read(&state.db, id).await)
}

/// Private message routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/messages", post(send_message))
        .route("/messages/{to_user_id}", get(read_inbox))
        .route("/messages/{id}/read", post(mark_read))
}
