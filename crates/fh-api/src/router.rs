use axum::{Router, http::StatusCode, response::IntoResponse, routing::get};

use crate::{course, reply, state::ApiState, stats, topic, user};

pub fn router() -> Router<ApiState> {
    Router::new()
        .route("/health", get(health))
        // `/topics/stats` is a static segment and wins over `/topics/{id}`.
        .merge(stats::routes())
        .merge(topic::routes())
        .merge(reply::routes())
        .merge(user::routes())
        .merge(course::routes())
        .fallback(handler_404)
}

async fn health() -> StatusCode {
    StatusCode::OK
}

async fn handler_404() -> impl IntoResponse {
    (
        StatusCode::NOT_FOUND,
        "The requested resource was not found",
    )
}
