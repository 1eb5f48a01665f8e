use axum::{Json, Router, extract::State, routing::get};
use chrono::Utc;
use fh_db::models::CategoryStats;
use fh_db::repositories::stats;

use crate::{ApiState, error::ApiError};

/// Create the statistics routes
pub fn routes() -> Router<ApiState> {
    Router::new().route("/topics/stats", get(topic_stats))
}

/// Per-category counts over the fixed category enumeration.
///
/// Categories present in storage but absent from the enumeration are
/// silently excluded. Topic counts include soft-deleted topics; see the
/// note on `fh_db::repositories::stats`.
async fn topic_stats(State(state): State<ApiState>) -> Result<Json<Vec<CategoryStats>>, ApiError> {
    let since = fh_domain::trailing_week(Utc::now());

    let mut rows = Vec::with_capacity(fh_domain::STATS_CATEGORIES.len());
    for category in fh_domain::STATS_CATEGORIES {
        let total_topics = stats::count_topics_by_category(&state.pool, category).await?;
        let topics_last_week =
            stats::count_topics_by_category_since(&state.pool, category, since).await?;
        let total_replies = stats::count_replies_by_category(&state.pool, category).await?;

        rows.push(CategoryStats {
            category: (*category).to_string(),
            total_topics,
            topics_last_week,
            total_replies,
        });
    }

    Ok(Json(rows))
}
