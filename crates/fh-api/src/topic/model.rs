use serde::Deserialize;

use crate::pagination::{PageParams, SortOrder};

#[derive(Debug, Deserialize)]
pub struct CreateTopicRequest {
    pub title: String,
    pub message: String,
    pub author_id: i64,
    pub course_id: i64,
}

/// Both fields are required: a topic update replaces title AND message
/// unconditionally, unlike the reply update which has optional parts.
#[derive(Debug, Deserialize)]
pub struct UpdateTopicRequest {
    pub title: String,
    pub message: String,
}

/// Listing filter plus pagination.
///
/// `course` and `year` only take effect together; a request carrying just one
/// of them falls back to the unfiltered active listing.
#[derive(Debug, Deserialize)]
pub struct TopicListQuery {
    pub course: Option<String>,
    pub year: Option<i32>,
    #[serde(default = "crate::pagination::default_limit")]
    pub limit: i64,
    #[serde(default)]
    pub offset: i64,
    #[serde(default)]
    pub order: SortOrder,
}

impl TopicListQuery {
    pub fn page(&self) -> PageParams {
        PageParams {
            limit: self.limit,
            offset: self.offset,
            order: self.order,
        }
    }
}
