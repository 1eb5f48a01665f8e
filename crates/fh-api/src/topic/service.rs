//! Topic lifecycle: creation with duplicate rejection, visibility through the
//! soft-delete flag, content updates and filtered listing.

use chrono::Utc;
use fh_db::models::{TopicDetail, TopicListItem};
use fh_db::repositories::{course, topic, user};
use fh_domain::TopicStatus;
use sqlx::PgPool;

use super::model::{CreateTopicRequest, TopicListQuery, UpdateTopicRequest};
use crate::{error::ApiError, pagination::Page, validation};

/// Create a topic.
///
/// The duplicate pre-check gives a friendly rejection in the common case; the
/// `topics_title_message_key` unique constraint closes the race when two
/// identical submissions arrive concurrently, so the insert error is mapped
/// to the same `DuplicateContent`.
pub async fn create_topic(
    pool: &PgPool,
    request: &CreateTopicRequest,
) -> Result<TopicDetail, ApiError> {
    validation::validate_not_blank(&request.title, "title")?;
    validation::validate_not_blank(&request.message, "message")?;

    if topic::exists_with_title_and_message(pool, &request.title, &request.message).await? {
        return Err(ApiError::DuplicateContent);
    }
    if !user::exists_by_id(pool, request.author_id).await? {
        return Err(ApiError::not_found("user", request.author_id));
    }
    if !course::exists_by_id(pool, request.course_id).await? {
        return Err(ApiError::not_found("course", request.course_id));
    }

    let topic_id = match topic::insert(
        pool,
        &request.title,
        &request.message,
        request.author_id,
        request.course_id,
        TopicStatus::initial().as_str(),
        Utc::now(),
    )
    .await
    {
        Ok(id) => id,
        Err(sqlx::Error::Database(db_err))
            if db_err.constraint() == Some("topics_title_message_key") =>
        {
            return Err(ApiError::DuplicateContent);
        }
        Err(e) => return Err(e.into()),
    };

    // Freshly inserted topics are active, so this lookup cannot miss.
    topic::find_detail_by_id_active(pool, topic_id)
        .await?
        .ok_or_else(|| ApiError::not_found("topic", topic_id))
}

/// Detail lookup; soft-deleted topics are reported as not found.
pub async fn get_topic(pool: &PgPool, topic_id: i64) -> Result<TopicDetail, ApiError> {
    topic::find_detail_by_id_active(pool, topic_id)
        .await?
        .ok_or_else(|| ApiError::not_found("topic", topic_id))
}

/// Paginated listing of active topics.
///
/// The course/year filter only applies when both parameters are present:
/// course name must match and the creation timestamp must fall inside the
/// inclusive calendar-year window.
pub async fn list_topics(
    pool: &PgPool,
    query: &TopicListQuery,
) -> Result<Page<TopicListItem>, ApiError> {
    let (limit, offset) = query.page().clamped();
    let ascending = query.order.is_ascending();

    if let (Some(course_name), Some(year)) = (query.course.as_deref(), query.year) {
        let (start, end) = fh_domain::year_window(year)
            .ok_or_else(|| ApiError::Validation(format!("year {year} is out of range")))?;

        let items = topic::list_active_by_course_and_window(
            pool,
            course_name,
            start,
            end,
            limit,
            offset,
            ascending,
        )
        .await?;
        let total =
            topic::count_active_by_course_and_window(pool, course_name, start, end).await?;

        return Ok(Page::new(items, total, limit, offset));
    }

    let items = topic::list_active(pool, limit, offset, ascending).await?;
    let total = topic::count_active(pool).await?;

    Ok(Page::new(items, total, limit, offset))
}

/// Replace title and message of an active topic. No partial update: both
/// fields are always overwritten.
pub async fn update_topic(
    pool: &PgPool,
    topic_id: i64,
    request: &UpdateTopicRequest,
) -> Result<TopicDetail, ApiError> {
    validation::validate_not_blank(&request.title, "title")?;
    validation::validate_not_blank(&request.message, "message")?;

    let updated = match topic::update_content(pool, topic_id, &request.title, &request.message)
        .await
    {
        Ok(rows) => rows,
        Err(sqlx::Error::Database(db_err))
            if db_err.constraint() == Some("topics_title_message_key") =>
        {
            return Err(ApiError::DuplicateContent);
        }
        Err(e) => return Err(e.into()),
    };

    if updated == 0 {
        return Err(ApiError::not_found("topic", topic_id));
    }

    topic::find_detail_by_id_active(pool, topic_id)
        .await?
        .ok_or_else(|| ApiError::not_found("topic", topic_id))
}

/// Soft delete. Terminal: there is no undelete, and deleting an already
/// inactive or missing topic reports not found without touching anything.
pub async fn delete_topic(pool: &PgPool, topic_id: i64) -> Result<(), ApiError> {
    let deleted = topic::soft_delete(pool, topic_id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("topic", topic_id));
    }
    Ok(())
}
