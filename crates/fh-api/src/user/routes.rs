use axum::{
    Json, Router,
    extract::{Path, Query, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use chrono::Utc;
use fh_db::models::UserSummary;
use fh_db::repositories::user;

use super::model::{CreateUserRequest, UpdateUserRequest};
use crate::{
    ApiState,
    error::ApiError,
    pagination::{Page, PageParams},
    validation,
};

/// Create the user routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/users", get(list_users).post(create_user))
        .route(
            "/users/{id}",
            get(get_user).put(update_user).delete(delete_user),
        )
}

async fn create_user(
    State(state): State<ApiState>,
    Json(payload): Json<CreateUserRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validation::validate_not_blank(&payload.name, "name")?;
    validation::validate_email(&payload.email)?;
    validation::validate_not_blank(&payload.password, "password")?;

    if user::exists_by_email(&state.pool, &payload.email).await? {
        return Err(ApiError::Validation(
            "a user with this email already exists".to_string(),
        ));
    }

    let password_hash = bcrypt::hash(&payload.password, state.bcrypt_cost)?;

    let created = match user::create(
        &state.pool,
        &payload.name,
        &payload.email,
        &password_hash,
        Utc::now(),
    )
    .await
    {
        Ok(summary) => summary,
        // The unique constraint closes the race between the pre-check and
        // the insert under concurrent registrations.
        Err(sqlx::Error::Database(db_err)) if db_err.constraint() == Some("users_email_key") => {
            return Err(ApiError::Validation(
                "a user with this email already exists".to_string(),
            ));
        }
        Err(e) => return Err(e.into()),
    };
    tracing::info!(user_id = created.id, "user created");

    let location = format!("/users/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

async fn list_users(
    State(state): State<ApiState>,
    Query(params): Query<PageParams>,
) -> Result<Json<Page<UserSummary>>, ApiError> {
    let (limit, offset) = params.clamped();

    let items =
        user::list_summaries(&state.pool, limit, offset, params.order.is_ascending()).await?;
    let total = user::count_all(&state.pool).await?;

    Ok(Json(Page::new(items, total, limit, offset)))
}

async fn get_user(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<UserSummary>, ApiError> {
    let summary = user::find_summary_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("user", id))?;
    Ok(Json(summary))
}

async fn update_user(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
    Json(payload): Json<UpdateUserRequest>,
) -> Result<Json<UserSummary>, ApiError> {
    validation::validate_not_blank(&payload.name, "name")?;
    validation::validate_not_blank(&payload.password, "password")?;

    let password_hash = bcrypt::hash(&payload.password, state.bcrypt_cost)?;

    let summary = user::update(&state.pool, id, &payload.name, &password_hash)
        .await?
        .ok_or_else(|| ApiError::not_found("user", id))?;
    Ok(Json(summary))
}

async fn delete_user(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<StatusCode, ApiError> {
    let deleted = user::delete(&state.pool, id).await?;
    if deleted == 0 {
        return Err(ApiError::not_found("user", id));
    }
    Ok(StatusCode::NO_CONTENT)
}
