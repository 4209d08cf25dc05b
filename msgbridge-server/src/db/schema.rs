//! Idempotent schema provisioning
//!
//! Runs inside each operation's transaction so a first-ever request on
//! an empty database provisions the tables and performs its write
//! atomically.

use sqlx::PgConnection;

use super::DbError;

/// Ensure the posts and direct_messages tables exist.
///
/// Creation is `IF NOT EXISTS`: safe to call on every request, never
/// touches existing rows or table structure.
pub async fn ensure_schema(conn: &mut PgConnection) -> Result<(), DbError> {
    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS posts (
            id BIGSERIAL PRIMARY KEY,
            user_id BIGINT,
            content TEXT NOT NULL,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    sqlx::query(
        r#"
        CREATE TABLE IF NOT EXISTS direct_messages (
            id BIGSERIAL PRIMARY KEY,
            from_user BIGINT NOT NULL,
            to_user BIGINT NOT NULL,
            content TEXT NOT NULL,
            read_at TIMESTAMPTZ,
            created_at TIMESTAMPTZ NOT NULL DEFAULT NOW()
        )
        "#,
    )
    .execute(&mut *conn)
    .await?;

    create_indexes(conn).await?;

    Ok(())
}

async fn create_indexes(conn: &mut PgConnection) -> Result<(), DbError> {
    sqlx::query("CREATE INDEX IF NOT EXISTS idx_posts_created ON posts(created_at DESC)")
        .execute(&mut *conn)
        .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_direct_messages_recipient ON direct_messages(to_user)",
    )
    .execute(&mut *conn)
    .await?;

    sqlx::query(
        "CREATE INDEX IF NOT EXISTS idx_direct_messages_unread ON direct_messages(to_user) WHERE read_at IS NULL",
    )
    .execute(&mut *conn)
    .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{with_connection, DbConfig};

    // Integration tests require a real database
    // Run with: DATABASE_URL=postgres://... cargo test -p msgbridge-server -- --ignored

    #[tokio::test]
    #[ignore = "requires database"]
    async fn provisioning_is_idempotent() {
        let url = std::env::var("DATABASE_URL").expect("DATABASE_URL required");
        let db = DbConfig::new(url);

        with_connection(&db, |tx| {
            Box::pin(async move {
                ensure_schema(&mut **tx).await?;
                ensure_schema(&mut **tx).await
            })
        })
        .await
        .expect("provisioning twice in one transaction failed");

        // And again on a fresh connection, against already-existing tables.
        with_connection(&db, |tx| Box::pin(ensure_schema(&mut **tx)))
            .await
            .expect("provisioning against existing tables failed");
    }
}
