use sqlx::{Executor, Postgres};

use crate::models::Course;

pub async fn exists_by_id<'e, E>(executor: E, course_id: i64) -> Result<bool, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_scalar(
        // language=PostgreSQL
        r#"
            SELECT EXISTS (SELECT 1 FROM courses WHERE id = $1)
        "#,
    )
    .bind(course_id)
    .fetch_one(executor)
    .await
}

pub async fn create<'e, E>(executor: E, name: &str, category: &str) -> Result<Course, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            INSERT INTO courses (name, category)
            VALUES ($1, $2)
            RETURNING id, name, category
        "#,
    )
    .bind(name)
    .bind(category)
    .fetch_one(executor)
    .await
}

pub async fn find_by_id<'e, E>(executor: E, course_id: i64) -> Result<Option<Course>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, name, category
            FROM courses
            WHERE id = $1
        "#,
    )
    .bind(course_id)
    .fetch_optional(executor)
    .await
}

pub async fn list<'e, E>(executor: E) -> Result<Vec<Course>, sqlx::Error>
where
    E: Executor<'e, Database = Postgres>,
{
    sqlx::query_as(
        // language=PostgreSQL
        r#"
            SELECT id, name, category
            FROM courses
            ORDER BY id
        "#,
    )
    .fetch_all(executor)
    .await
}
