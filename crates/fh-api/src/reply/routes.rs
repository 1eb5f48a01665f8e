use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use fh_db::models::{ReplyDetail, ReplyListItem};

use super::model::{CreateReplyRequest, UpdateReplyRequest};
use super::service;
use crate::{
    ApiState,
    error::ApiError,
    pagination::{Page, PageParams},
};

/// Create the reply routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/replies", get(list_replies).post(create_reply))
        .route(
            "/replies/{id}",
            get(get_reply).put(update_reply).delete(delete_reply),
        )
}

async fn create_reply(
    State(state): State<ApiState>,
    Json(payload): Json<CreateReplyRequest>,
) -> Result<impl IntoResponse, ApiError> {
    let reply = service::create_reply(&state.pool, &payload).await?;
    tracing::info!(reply_id = reply.id, topic_id = payload.topic_id, "reply created");

    let location = format!("/replies/{}", reply.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(reply),
    ))
}

async fn list_replies(
    State(state): State<ApiState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<ReplyListItem>>, ApiError> {
    let page = service::list_replies(&state.pool, &params).await?;
    Ok(Json(page))
}

async fn get_reply(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<ReplyDetail>, ApiError> {
    let reply = service::get_reply(&state.pool, id).await?;
    Ok(Json(reply))
}

async fn update_reply(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateReplyRequest>,
) -> Result<Json<ReplyDetail>, ApiError> {
    let reply = service::update_reply(&state.pool, id, &payload).await?;
    Ok(Json(reply))
}

async fn delete_reply(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    service::delete_reply(&state.pool, id).await?;
    Ok(StatusCode::NO_CONTENT)
}
