use serde::Deserialize;

#[derive(Debug, Deserialize)]
pub struct CreateCourseRequest {
    pub name: String,
    /// Free-text grouping for statistics ("Mobile", "BackEnd", ...). Only
    /// categories in the fixed stats enumeration show up in the aggregation.
    pub category: String,
}
