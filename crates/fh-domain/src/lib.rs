//! Domain rules for Forum Hub
//!
//! This crate holds the pure, I/O-free pieces of the forum: the topic status
//! state machine, the statistics category enumeration and the time windows
//! used by listing and aggregation queries.
//!
//! Nothing here touches the database or the clock. Functions that depend on
//! "now" take it as an argument so callers (and tests) control time.

use chrono::{DateTime, Duration, TimeZone, Utc};

pub mod status;

pub use status::{InvalidTransition, TopicStatus};

/// The closed set of course categories the statistics endpoint reports on.
///
/// A category present in storage but absent from this list is silently
/// excluded from the aggregation. The list is deliberately NOT derived from
/// the courses table.
pub const STATS_CATEGORIES: &[&str] = &["Mobile", "BackEnd", "FrontEnd", "UX & Design"];

/// Compute the inclusive calendar-year window used by the topic listing
/// filter.
///
/// Returns `(Y-01-01T00:00:00, Y-12-31T23:59:00)`. Both bounds are inclusive
/// (`BETWEEN` semantics): a topic created at `Y-12-31T23:59:00` falls inside
/// the window, one created at `Y+1-01-01T00:00:00` does not.
///
/// Returns `None` for years chrono cannot represent.
pub fn year_window(year: i32) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    let start = Utc.with_ymd_and_hms(year, 1, 1, 0, 0, 0).single()?;
    let end = Utc.with_ymd_and_hms(year, 12, 31, 23, 59, 0).single()?;
    Some((start, end))
}

/// Start of the trailing seven-day window ending at `now`.
///
/// Topics created strictly after this instant count as "last week" in the
/// statistics aggregation.
pub fn trailing_week(now: DateTime<Utc>) -> DateTime<Utc> {
    now - Duration::weeks(1)
}
