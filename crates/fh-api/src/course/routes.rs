use axum::{
    Json, Router,
    extract::{Path, State},
    http::{StatusCode, header},
    response::IntoResponse,
    routing::get,
};
use fh_db::models::Course;
use fh_db::repositories::course;

use super::model::CreateCourseRequest;
use crate::{ApiState, error::ApiError, validation};

/// Create the course routes
pub fn routes() -> Router<ApiState> {
    Router::new()
        .route("/courses", get(list_courses).post(create_course))
        .route("/courses/{id}", get(get_course))
}

async fn create_course(
    State(state): State<ApiState>,
    Json(payload): Json<CreateCourseRequest>,
) -> Result<impl IntoResponse, ApiError> {
    validation::validate_not_blank(&payload.name, "name")?;
    validation::validate_not_blank(&payload.category, "category")?;

    let created = course::create(&state.pool, &payload.name, &payload.category).await?;
    tracing::info!(course_id = created.id, "course created");

    let location = format!("/courses/{}", created.id);
    Ok((
        StatusCode::CREATED,
        [(header::LOCATION, location)],
        Json(created),
    ))
}

async fn list_courses(State(state): State<ApiState>) -> Result<Json<Vec<Course>>, ApiError> {
    let courses = course::list(&state.pool).await?;
    Ok(Json(courses))
}

async fn get_course(
    State(state): State<ApiState>,
    Path(id): Path<i64>,
) -> Result<Json<Course>, ApiError> {
    let found = course::find_by_id(&state.pool, id)
        .await?
        .ok_or_else(|| ApiError::not_found("course", id))?;
    Ok(Json(found))
}
