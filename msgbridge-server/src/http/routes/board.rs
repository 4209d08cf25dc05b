//! Bulletin board endpoints

use std::sync::Arc;

use axum::extract::{Query, State};
use axum::routing::get;
use axum::{Json, Router};
use serde::Deserialize;

use crate::http::server::AppState;
use crate::ops::{self, BoardEntry, ReadReply};

/// Send post request
#[derive(Debug, Deserialize)]
pub struct SendPostRequest {
    pub content: String,
    pub user_id: Option<i64>,
}

/// Read query parameters
#[derive(Debug, Default, Deserialize)]
pub struct ReadParams {
    pub limit: Option<i64>,
}

/// POST /board - post to the public bulletin board
async fn send_post(
    State(state): State<Arc<AppState>>,
    Json(req): Json<SendPostRequest>,
) -> Json<String> {
    Json(ops::bulletin_board_send(&state.db, &req.content, req.user_id).await)
}

/// GET /board - read recent posts, newest first
async fn read_board(
    State(state): State<Arc<AppState>>,
    Query(params): Query<ReadParams>,
) -> Json<ReadReply<BoardEntry>> {
    Json(ops::bulletin_board_read(&state.db, params.limit).await)
}

/// Bulletin board routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new().route("/board", get(read_board).post(send_post))
}
