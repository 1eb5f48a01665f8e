//! Reply attachment: replies bind to an existing topic and author, carry a
//! solution flag and hard-delete (unlike topics, which soft-delete).

use chrono::Utc;
use fh_db::models::{ReplyDetail, ReplyListItem};
use fh_db::repositories::{reply, topic, user};
use sqlx::PgPool;

use super::model::{CreateReplyRequest, UpdateReplyRequest};
use crate::{
    error::ApiError,
    pagination::{Page, PageParams},
    validation,
};

/// Attach a reply to a topic.
///
/// The topic lookup deliberately ignores the soft-delete flag: a reply can be
/// attached to an inactive topic. Both lookups must resolve before anything
/// is written.
pub async fn create_reply(
    pool: &PgPool,
    request: &CreateReplyRequest,
) -> Result<ReplyDetail, ApiError> {
    validation::validate_not_blank(&request.message, "message")?;

    if !topic::exists_by_id(pool, request.topic_id).await? {
        return Err(ApiError::not_found("topic", request.topic_id));
    }
    if !user::exists_by_id(pool, request.author_id).await? {
        return Err(ApiError::not_found("user", request.author_id));
    }

    let reply_id = reply::insert(
        pool,
        &request.message,
        request.topic_id,
        request.author_id,
        Utc::now(),
    )
    .await?;

    reply::find_detail_by_id(pool, reply_id)
        .await?
        .ok_or_else(|| ApiError::not_found("reply", reply_id))
}

pub async fn get_reply(pool: &PgPool, reply_id: i64) -> Result<ReplyDetail, ApiError> {
    reply::find_detail_by_id(pool, reply_id)
        .await?
        .ok_or_else(|| ApiError::not_found("reply", reply_id))
}

/// Unfiltered paginated listing across all replies, regardless of the owning
/// topic's state.
pub async fn list_replies(
    pool: &PgPool,
    params: &PageParams,
) -> Result<Page<ReplyListItem>, ApiError> {
    let (limit, offset) = params.clamped();

    let items = reply::list(pool, limit, offset, params.order.is_ascending()).await?;
    let total = reply::count_all(pool).await?;

    Ok(Page::new(items, total, limit, offset))
}

/// Update a reply. Setting `solution = true` does NOT transition the owning
/// topic's status; no automatic transition rule exists.
pub async fn update_reply(
    pool: &PgPool,
    reply_id: i64,
    request: &UpdateReplyRequest,
) -> Result<ReplyDetail, ApiError> {
    validation::validate_not_blank(&request.message, "message")?;

    let updated = reply::update(pool, reply_id, &request.message, request.solution).await?;
    if updated == 0 {
        return Err(ApiError::not_found("reply", reply_id));
    }

    reply::find_detail_by_id(pool, reply_id)
        .await?
        .ok_or_else(|| ApiError::not_found("reply", reply_id))
}

/// Hard delete: the row is physically removed. Deleting a missing reply
/// reports not found and mutates nothing.
pub async fn delete_reply(pool: &PgPool, reply_id: i64) -> Result<(), ApiError> {
    let deleted = reply::delete(pool, reply_id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("reply", reply_id));
    }
    Ok(())
}
