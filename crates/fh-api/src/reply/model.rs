use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateReplyRequest {
    pub message: String,
    pub topic_id: i64,
    pub author_id: i64,
}

/// `message` is always replaced; `solution` only when supplied. Leaving it
/// out keeps the stored flag, which is why it is an `Option` and not a bool
/// with a default.
#[derive(Debug, Deserialize)]
pub struct UpdateReplyRequest {
    pub message: String,
    pub solution: Option<bool>,
}
