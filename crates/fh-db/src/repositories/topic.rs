use chrono::{DateTime, Utc};
use sqlx::{Executor, Postgres};

use crate::models::{TopicDetail, TopicListItem};

/// Duplicate check across ALL topics, soft-deleted ones included.
pub async fn exists_with_title_and_message<'e, E>(
    executor: E,
    title: &str,
    message: &str,
) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT EXISTS (
                SELECT 1 FROM topics WHERE title = $1 AND message = $2
            )
        "#,
    )
    .bind(title)
    .bind(message)
    .fetch_one(executor)
    .await
}

/// Insert a new topic and return its id.
///
/// `status` and `created_at` are assigned by the lifecycle code, never taken
/// from the caller. A `topics_title_message_key` unique violation here is the
/// storage-level duplicate rejection.
pub async fn insert<'e, E>(
    executor: E,
    title: &str,
    message: &str,
    author_id: i64,
    course_id: i64,
    status: &str,
    created_at: DateTime<Utc>,
) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            INSERT INTO topics (title, message, author_id, course_id, status, created_at, active)
            VALUES ($1, $2, $3, $4, $5, $6, TRUE)
            RETURNING id
        "#,
    )
    .bind(title)
    .bind(message)
    .bind(author_id)
    .bind(course_id)
    .bind(status)
    .bind(created_at)
    .fetch_one(executor)
    .await
}

/// Detail lookup through the public read path: soft-deleted topics are
/// invisible here.
pub async fn find_detail_by_id_active<'e, E>(
    executor: E,
    topic_id: i64,
) -> Result<Option<TopicDetail>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT
                t.id,
                t.title,
                t.message,
                u.name AS author,
                c.name AS course,
                t.created_at,
                t.status
            FROM topics t
            JOIN users u ON u.id = t.author_id
            JOIN courses c ON c.id = t.course_id
            WHERE t.id = $1 AND t.active = TRUE
        "#,
    )
    .bind(topic_id)
    .fetch_optional(executor)
    .await
}

pub async fn list_active<'e, E>(
    executor: E,
    limit: i64,
    offset: i64,
    ascending: bool,
) -> Result<Vec<TopicListItem>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT
                t.id,
                t.title,
                t.message,
                t.created_at,
                t.status,
                u.name AS author,
                c.category AS course_category,
                (SELECT COUNT(*) FROM replies r WHERE r.topic_id = t.id) AS replies
            FROM topics t
            JOIN users u ON u.id = t.author_id
            JOIN courses c ON c.id = t.course_id
            WHERE t.active = TRUE
            ORDER BY
                CASE WHEN $3 THEN t.created_at END ASC,
                CASE WHEN NOT $3 THEN t.created_at END DESC
            LIMIT $1 OFFSET $2
        "#,
    )
    .bind(limit)
    .bind(offset)
    .bind(ascending)
    .fetch_all(executor)
    .await
}

pub async fn count_active<'e, E>(executor: E) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT COUNT(*) FROM topics WHERE active = TRUE
        "#,
    )
    .fetch_one(executor)
    .await
}

/// Active topics of a course (matched by name) created inside the inclusive
/// `[start, end]` window.
pub async fn list_active_by_course_and_window<'e, E>(
    executor: E,
    course_name: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
    limit: i64,
    offset: i64,
    ascending: bool,
) -> Result<Vec<TopicListItem>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT
                t.id,
                t.title,
                t.message,
                t.created_at,
                t.status,
                u.name AS author,
                c.category AS course_category,
                (SELECT COUNT(*) FROM replies r WHERE r.topic_id = t.id) AS replies
            FROM topics t
            JOIN users u ON u.id = t.author_id
            JOIN courses c ON c.id = t.course_id
            WHERE t.active = TRUE
                AND c.name = $1
                AND t.created_at BETWEEN $2 AND $3
            ORDER BY
                CASE WHEN $6 THEN t.created_at END ASC,
                CASE WHEN NOT $6 THEN t.created_at END DESC
            LIMIT $4 OFFSET $5
        "#,
    )
    .bind(course_name)
    .bind(start)
    .bind(end)
    .bind(limit)
    .bind(offset)
    .bind(ascending)
    .fetch_all(executor)
    .await
}

pub async fn count_active_by_course_and_window<'e, E>(
    executor: E,
    course_name: &str,
    start: DateTime<Utc>,
    end: DateTime<Utc>,
) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT COUNT(*)
            FROM topics t
            JOIN courses c ON c.id = t.course_id
            WHERE t.active = TRUE
                AND c.name = $1
                AND t.created_at BETWEEN $2 AND $3
        "#,
    )
    .bind(course_name)
    .bind(start)
    .bind(end)
    .fetch_one(executor)
    .await
}

/// Replace title and message of an active topic. Returns the number of
/// updated rows (0 when the topic is missing or soft-deleted).
pub async fn update_content<'e, E>(
    executor: E,
    topic_id: i64,
    title: &str,
    message: &str,
) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE topics
            SET title = $2, message = $3
            WHERE id = $1 AND active = TRUE
        "#,
    )
    .bind(topic_id)
    .bind(title)
    .bind(message)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

/// Soft delete: flip `active` to FALSE. Returns 0 when the topic is missing
/// or already inactive, which callers report as not-found. Replies are left
/// untouched.
pub async fn soft_delete<'e, E>(executor: E, topic_id: i64) -> Result<u64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    let result = sqlx::query(
        // language=PostgreSQL
        r#"
            UPDATE topics
            SET active = FALSE
            WHERE id = $1 AND active = TRUE
        "#,
    )
    .bind(topic_id)
    .execute(executor)
    .await?;

    Ok(result.rows_affected())
}

/// Existence check regardless of the soft-delete flag. Reply attachment
/// resolves topics through this, so replies can land on inactive topics.
pub async fn exists_by_id<'e, E>(executor: E, topic_id: i64) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT EXISTS (SELECT 1 FROM topics WHERE id = $1)
        "#,
    )
    .bind(topic_id)
    .fetch_one(executor)
    .await
}
