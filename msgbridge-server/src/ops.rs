//! Operation handlers: the remote-callable surface
//!
//! Each operation is stateless and atomic: validate input, run one
//! statement on a dedicated connection inside a transaction, shape the
//! outcome. Send-shaped operations answer with a confirmation string
//! or an `"Error: ..."` string; read-shaped operations answer with a
//! list of records or a one-element list holding an error record.
//! Nothing here propagates an error to the transport.

use serde::Serialize;

use crate::db::store::{self, DirectMessage, Post};
use crate::db::{schema, with_connection, DbConfig};
use crate::models::{MessageContent, ReadLimit, UserId};

/// Bulletin board record as returned to callers
#[derive(Debug, Clone, Serialize)]
pub struct BoardEntry {
    pub id: i64,
    pub user_id: Option<i64>,
    pub content: String,
    pub created_at: String,
}

impl From<Post> for BoardEntry {
    fn from(p: Post) -> Self {
        Self {
            id: p.id,
            user_id: p.user_id,
            content: p.content,
            created_at: p.created_at.to_rfc3339(),
        }
    }
}

/// Private message record as returned to callers
#[derive(Debug, Clone, Serialize)]
pub struct MessageEntry {
    pub id: i64,
    pub from_user: i64,
    pub to_user: i64,
    pub content: String,
    pub read_at: Option<String>,
    pub created_at: String,
}

impl From<DirectMessage> for MessageEntry {
    fn from(m: DirectMessage) -> Self {
        Self {
            id: m.id,
            from_user: m.from_user,
            to_user: m.to_user,
            content: m.content,
            read_at: m.read_at.map(|t| t.to_rfc3339()),
            created_at: m.created_at.to_rfc3339(),
        }
    }
}

/// Error record for read-shaped operations
#[derive(Debug, Clone, Serialize)]
pub struct ReadError {
    pub error: String,
}

/// Reply of a read-shaped operation.
///
/// Serializes as a JSON array either way: the matching records, or a
/// single error record.
#[derive(Debug, Serialize)]
#[serde(untagged)]
pub enum ReadReply<T> {
    Entries(Vec<T>),
    Failed([ReadError; 1]),
}

impl<T> ReadReply<T> {
    fn failure(message: impl Into<String>) -> Self {
        Self::Failed([ReadError {
            error: message.into(),
        }])
    }
}

/// Post text to the public bulletin board.
///
/// `user_id` links the post to an author; omit for anonymous.
pub async fn bulletin_board_send(db: &DbConfig, content: &str, user_id: Option<i64>) -> String {
    let content = match MessageContent::new(content) {
        Ok(content) => content,
        Err(err) => return format!("Error: {err}."),
    };
    let author = match user_id.map(|id| UserId::new("user_id", id)).transpose() {
        Ok(author) => author,
        Err(err) => return format!("Error: {err}."),
    };

    let inserted = with_connection(db, move |tx| {
        Box::pin(async move {
            schema::ensure_schema(&mut **tx).await?;
            store::insert_post(&mut **tx, author, &content).await
        })
    })
    .await;

    match inserted {
        Ok(id) => format!("Posted to bulletin board (id={id})."),
        Err(err) => format!("Error: {err}"),
    }
}

/// Read recent posts from the public bulletin board, newest first.
pub async fn bulletin_board_read(db: &DbConfig, limit: Option<i64>) -> ReadReply<BoardEntry> {
    let limit = ReadLimit::board(limit);

    let posts = with_connection(db, move |tx| {
        Box::pin(async move {
            schema::ensure_schema(&mut **tx).await?;
            store::list_posts(&mut **tx, limit).await
        })
    })
    .await;

    match posts {
        Ok(posts) => ReadReply::Entries(posts.into_iter().map(BoardEntry::from).collect()),
        Err(err) => ReadReply::failure(err.to_string()),
    }
}

/// Send a private message from one user id to another.
pub async fn private_message_send(
    db: &DbConfig,
    from_user_id: i64,
    to_user_id: i64,
    content: &str,
) -> String {
    let content = match MessageContent::new(content) {
        Ok(content) => content,
        Err(err) => return format!("Error: {err}."),
    };
    let from = match UserId::new("from_user_id", from_user_id) {
        Ok(from) => from,
        Err(err) => return format!("Error: {err}."),
    };
    let to = match UserId::new("to_user_id", to_user_id) {
        Ok(to) => to,
        Err(err) => return format!("Error: {err}."),
    };

    let inserted = with_connection(db, move |tx| {
        Box::pin(async move {
            schema::ensure_schema(&mut **tx).await?;
            store::insert_message(&mut **tx, from, to, &content).await
        })
    })
    .await;

    match inserted {
        Ok(id) => format!("Private message sent (id={id})."),
        Err(err) => format!("Error: {err}"),
    }
}

/// Read private messages addressed to the given user id, newest first.
pub async fn private_message_read(
    db: &DbConfig,
    to_user_id: i64,
    limit: Option<i64>,
) -> ReadReply<MessageEntry> {
    let to = match UserId::new("to_user_id", to_user_id) {
        Ok(to) => to,
        Err(err) => return ReadReply::failure(format!("{err}.")),
    };
    let limit = ReadLimit::inbox(limit);

    let messages = with_connection(db, move |tx| {
        Box::pin(async move {
            schema::ensure_schema(&mut **tx).await?;
            store::list_messages_for(&mut **tx, to, limit).await
        })
    })
    .await;

    match messages {
        Ok(messages) => ReadReply::Entries(messages.into_iter().map(MessageEntry::from).collect()),
        Err(err) => ReadReply::failure(err.to_string()),
    }
}

/// Mark one private message as read.
pub async fn private_message_mark_read(db: &DbConfig, message_id: i64) -> String {
    let updated = with_connection(db, move |tx| {
        Box::pin(async move {
            schema::ensure_schema(&mut **tx).await?;
            store::mark_message_read(&mut **tx, message_id).await
        })
    })
    .await;

    match updated {
        Ok(message) => format!("Marked message {} as read.", message.id),
        Err(err) => format!("Error: {err}"),
    }
}

/// Liveness probe.
pub fn ping() -> &'static str {
    "pong"
}

/// Human-readable running-state text.
pub fn status() -> String {
    format!(
        "msgbridge {} is running (bulletin board + private messages)",
        env!("CARGO_PKG_VERSION")
    )
}
