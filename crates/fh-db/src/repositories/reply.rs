use chrono::{DateTime, Utc};
use sqlx::{Executor, Postgres};

use crate::models::{ReplyDetail, ReplyListItem};

/// Insert a new reply and return its id. `created_at` is assigned by the
/// attachment code; `solution` always starts FALSE.
pub async fn insert<'e, E>(
    executor: E,
    message: &str,
    topic_id: i64,
    author_id: i64,
    created_at: DateTime<Utc>,
) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            INSERT INTO replies (message, topic_id, author_id, created_at, solution)
            VALUES ($1, $2, $3, $4, FALSE)
            RETURNING id
        "#,
    )
    .bind(message)
    .bind(topic_id)
    .bind(author_id)
    .bind(created_at)
    .fetch_one(executor)
    .await
}

/// Replies have no soft-delete concept, so the lookup has no activity filter
/// and resolves the owning topic even when that topic is inactive.
pub async fn find_detail_by_id<'e, E>(
    executor: E,
    reply_id: i64,
) -> Result<Option<ReplyDetail>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT
                r.id,
                r.message,
                u.name AS author,
                t.title AS topic,
                r.solution,
                r.created_at
            FROM replies r
            JOIN users u ON u.id = r.author_id
            JOIN topics t ON t.id = r.topic_id
            WHERE r.id = $1
        "#,
    )
    .bind(reply_id)
    .fetch_optional(executor)
    .await
}

pub async fn list<'e, E>(
    executor: E,
    limit: i64,
    offset: i64,
    ascending: bool,
) -> Result<Vec<ReplyListItem>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT
                r.id,
                r.message,
                u.name AS author,
                r.solution
            FROM replies r
            JOIN users u ON u.id = r.author_id
            ORDER BY
                CASE WHEN $3 THEN r.created_at END ASC,
                CASE WHEN NOT $3 THEN r.created_at END DESC
            LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .bind(ascending)
    .fetch_all(executor)
    .await
}

pub async fn count_all<'e, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT COUNT(*) FROM replies
        "#,
    )
    .fetch_one(executor)
    .await
}

/// Update the message, and the solution flag only when the caller supplied
/// one; `NULL` keeps the stored value. Flipping `solution` never touches the
/// owning topic's status.
pub async fn update<'e, E>(
    executor: E,
    reply_id: i64,
    message: &str,
    solution: Option<bool>,
) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE replies
            SET message = $2, solution = COALESCE($3, solution)
            WHERE id = $1
        "#,
    )
    .bind(reply_id)
    .bind(message)
    .bind(solution)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

/// Hard delete, asymmetric with the topic's soft delete. Returns 0 when the
/// reply is absent.
pub async fn delete<'e, E>(executor: E, reply_id: i64) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM replies
            WHERE id = $1
        "#,
    )
    .bind(reply_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}
