//! Message store: the posts and direct_messages tables
//!
//! All queries are parameterized; caller input never reaches SQL text.
//! Table and column identifiers are fixed at compile time.

use chrono::{DateTime, Utc};
use sqlx::{FromRow, PgConnection};

use crate::models::{MessageContent, ReadLimit, UserId};

use super::DbError;

/// A public bulletin board entry
#[derive(Debug, Clone, FromRow)]
pub struct Post {
    pub id: i64,
    pub user_id: Option<i64>,
    pub content: String,
    pub created_at: DateTime<Utc>,
}

/// A directed private message
#[derive(Debug, Clone, FromRow)]
pub struct DirectMessage {
    pub id: i64,
    pub from_user: i64,
    pub to_user: i64,
    pub content: String,
    pub read_at: Option<DateTime<Utc>>,
    pub created_at: DateTime<Utc>,
}

/// Insert a bulletin board post, returning the assigned id.
pub async fn insert_post(
    conn: &mut PgConnection,
    author: Option<UserId>,
    content: &MessageContent,
) -> Result<i64, DbError> {
    let id: i64 =
        sqlx::query_scalar("INSERT INTO posts (user_id, content) VALUES ($1, $2) RETURNING id")
            .bind(author.map(UserId::get))
            .bind(content.as_str())
            .fetch_one(&mut *conn)
            .await?;

    Ok(id)
}

/// List board posts, newest first.
///
/// Rows sharing a created_at come back in natural row order; that
/// tie-break is not guaranteed stable.
pub async fn list_posts(conn: &mut PgConnection, limit: ReadLimit) -> Result<Vec<Post>, DbError> {
    let posts = sqlx::query_as(
        r#"
        SELECT id, user_id, content, created_at
        FROM posts
        ORDER BY created_at DESC
        LIMIT $1
        "#,
    )
    .bind(limit.get())
    .fetch_all(&mut *conn)
    .await?;

    Ok(posts)
}

/// Insert a private message, returning the assigned id.
pub async fn insert_message(
    conn: &mut PgConnection,
    from: UserId,
    to: UserId,
    content: &MessageContent,
) -> Result<i64, DbError> {
    let id: i64 = sqlx::query_scalar(
        r#"
        INSERT INTO direct_messages (from_user, to_user, content)
        VALUES ($1, $2, $3)
        RETURNING id
        "#,
    )
    .bind(from.get())
    .bind(to.get())
    .bind(content.as_str())
    .fetch_one(&mut *conn)
    .await?;

    Ok(id)
}

/// List messages addressed to `to`, newest first.
pub async fn list_messages_for(
    conn: &mut PgConnection,
    to: UserId,
    limit: ReadLimit,
) -> Result<Vec<DirectMessage>, DbError> {
    let messages = sqlx::query_as(
        r#"
        SELECT id, from_user, to_user, content, read_at, created_at
        FROM direct_messages
        WHERE to_user = $1
        ORDER BY created_at DESC
        LIMIT $2
        "#,
    )
    .bind(to.get())
    .bind(limit.get())
    .fetch_all(&mut *conn)
    .await?;

    Ok(messages)
}

/// Stamp a message as read, returning the updated row.
pub async fn mark_message_read(
    conn: &mut PgConnection,
    id: i64,
) -> Result<DirectMessage, DbError> {
    let message: Option<DirectMessage> = sqlx::query_as(
        r#"
        UPDATE direct_messages SET read_at = NOW()
        WHERE id = $1
        RETURNING id, from_user, to_user, content, read_at, created_at
        "#,
    )
    .bind(id)
    .fetch_optional(&mut *conn)
    .await?;

    message.ok_or(DbError::NotFound {
        resource: "message",
        id,
    })
}
