use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use fh_db::models::{TopicDetail, TopicListItem};

use super::model::{CreateTopicRequest, TopicListQuery, UpdateTopicRequest};
use super::service;
use crate::{ApiState, error::ApiError, pagination::Page};

/// Create the topic routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/topics", get(list_topics).post(create_topic))
        .route(
            "/topics/{id}",
            get(get_topic).put(update_topic).delete(delete_topic),
        )
}

async fn create_topic(
    State(state): State<ApiState>,
    Json(payload): Json<CreateTopicRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let topic = service::create_topic(&state.pool, &payload).await?;
    tracing::info!(topic_id = topic.id, "topic created");

    let location = format!("/topics/{}", topic.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(topic),
    ))
}

async fn list_topics(
    State(state): State<ApiState>,
    Query(query): Query<TopicListQuery>,
) -> Result<Json<Page<TopicListItem>>, ApiError> {
    let page = service::list_topics(&state.pool, &query).await?;
    Ok(Json(page))
}

async fn get_topic(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<TopicDetail>, ApiError> {
    let topic = service::get_topic(&state.pool, id).await?;
    Ok(Json(topic))
}

async fn update_topic(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateTopicRequest>,
) -> Result<Json<TopicDetail>, ApiError> {
    let topic = service::update_topic(&state.pool, id, &payload).await?;
    Ok(Json(topic))
}

async fn delete_topic(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    service::delete_topic(&state.pool, id).await?;
    tracing::info!(topic_id = id, "topic soft-deleted");
    Ok(StatusCode::NO_CONTENT)
}
