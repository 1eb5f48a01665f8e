//! Aggregation counts for the statistics endpoint.
//!
//! None of these queries filter on `topics.active`: the aggregation has
//! always counted soft-deleted topics while the listing paths hide them.
//! That inconsistency is preserved here on purpose, isolated in this module
//! so a future fix is a one-predicate change.

use chrono::{DateTime, Utc};
use sqlx::{Executor, Postgres};

pub async fn count_topics_by_category<'e, E>(
    executor: E,
    category: &str,
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
            WHERE c.category = $1
        "#,
    )
    .bind(category)
    .fetch_one(executor)
    .await
}

pub async fn count_topics_by_category_since<'e, E>(
    executor: E,
    category: &str,
    since: DateTime<Utc>,
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
            WHERE c.category = $1 AND t.created_at > $2
        "#,
    )
    .bind(category)
    .bind(since)
    .fetch_one(executor)
    .await
}

pub async fn count_replies_by_category<'e, E>(
    executor: E,
    category: &str,
) -> Result<i64, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT COUNT(*)
            FROM replies r
            JOIN topics t ON t.id = r.topic_id
            JOIN courses c ON c.id = t.course_id
            WHERE c.category = $1
        "#,
    )
    .bind(category)
    .fetch_one(executor)
    .await
}
