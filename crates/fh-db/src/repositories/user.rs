use chrono::{DateTime, Utc};
use sqlx::{Executor, Postgres};

use crate::models::UserSummary;

pub async fn exists_by_id<'e, E>(executor: E, user_id: i64) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT EXISTS (SELECT 1 FROM users WHERE id = $1)
        "#,
    )
    .bind(user_id)
    .fetch_one(executor)
    .await
}

pub async fn exists_by_email<'e, E>(executor: E, email: &str) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT EXISTS (SELECT 1 FROM users WHERE email = $1)
        "#,
    )
    .bind(email)
    .fetch_one(executor)
    .await
}

pub async fn create<'e, E>(
    executor: E,
    name: &str,
    email: &str,
    password_hash: &str,
    created_at: DateTime<Utc>,
) -> Result<UserSummary, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO users (name, email, password_hash, created_at)
            VALUES ($1, $2, $3, $4)
            RETURNING id, name, email
        "#,
    )
    .bind(name)
    .bind(email)
    .bind(password_hash)
    .bind(created_at)
    .fetch_one(executor)
    .await
}

pub async fn find_summary_by_id<'e, E>(
    executor: E,
    user_id: i64,
) -> Result<Option<UserSummary>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, name, email
            FROM users
            WHERE id = $1
        "#,
    )
    .bind(user_id)
    .fetch_optional(executor)
    .await
}

/// Registration order follows the id sequence, so ordering by id is ordering
/// by signup time.
pub async fn list_summaries<'e, E>(
    executor: E,
    limit: i64,
    offset: i64,
    ascending: bool,
) -> Result<Vec<UserSummary>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, name, email
            FROM users
            ORDER BY
                CASE WHEN $3 THEN id END ASC,
                CASE WHEN NOT $3 THEN id END DESC
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
            SELECT COUNT(*) FROM users
        "#,
    )
    .fetch_one(executor)
    .await
}

/// Replace name and password hash. Returns `None` when the user is absent.
pub async fn update<'e, E>(
    executor: E,
    user_id: i64,
    name: &str,
    password_hash: &str,
) -> Result<Option<UserSummary>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            UPDATE users
            SET name = $2, password_hash = $3
            WHERE id = $1
            RETURNING id, name, email
        "#,
    )
    .bind(user_id)
    .bind(name)
    .bind(password_hash)
    .fetch_optional(executor)
    .await
}

/// Hard delete. Returns the number of removed rows (0 when absent).
pub async fn delete<'e, E>(executor: E, user_id: i64) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            DELETE FROM users
            WHERE id = $1
        "#,
    )
    .bind(user_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}
