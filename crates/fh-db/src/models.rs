use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::prelude::FromRow;

/// Public projection of a user. The stored row also carries the bcrypt
/// password hash, which never leaves the database.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct UserSummary {
    pub id: i64,
    pub name: String,
    pub email: String,
}

/// Course row - reference data topics point to.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Course {
    /// Unique course identifier
    pub id: i64,
    /// Course name (the topic listing filter matches on this)
    pub name: String,
    /// Free-text grouping used by statistics (e.g. "Mobile", "BackEnd")
    pub category: String,
}

/// Topic detail with author and course names resolved.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TopicDetail {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub author: String,
    pub course: String,
    pub created_at: DateTime<Utc>,
    pub status: String,
}

/// Topic listing entry: course category instead of name, plus a reply count.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct TopicListItem {
    pub id: i64,
    pub title: String,
    pub message: String,
    pub created_at: DateTime<Utc>,
    pub status: String,
    pub author: String,
    pub course_category: String,
    pub replies: i64,
}

/// Reply detail with author name and owning topic title resolved.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReplyDetail {
    pub id: i64,
    pub message: String,
    pub author: String,
    pub topic: String,
    pub solution: bool,
    pub created_at: DateTime<Utc>,
}

/// Reply listing entry.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct ReplyListItem {
    pub id: i64,
    pub message: String,
    pub author: String,
    pub solution: bool,
}

/// Per-category aggregation row for the statistics endpoint.
///
/// `total_topics` counts ALL topics of the category, soft-deleted included;
/// the listing paths filter on `active` but the aggregation never did.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CategoryStats {
    pub category: String,
    pub total_topics: i64,
    pub topics_last_week: i64,
    pub total_replies: i64,
}
