//! Topic status state machine.
//!
//! Four states are defined but only the initial one is assigned by any
//! operation today: topics are created `Unanswered` and nothing transitions
//! them automatically. Posting a reply or flagging it as the solution does
//! NOT move the topic to `Answered`/`Solved`. [`TopicStatus::transition`] is
//! the extension point for the day such rules exist.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Lifecycle status of a topic.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TopicStatus {
    /// No accepted answer yet. The only status assigned programmatically.
    Unanswered,
    /// Has replies but no accepted solution.
    Answered,
    /// One of the replies was accepted as the solution.
    Solved,
    /// Closed for further discussion. Terminal.
    Closed,
}

/// A status move rejected by [`TopicStatus::transition`].
#[derive(Debug, Error, PartialEq, Eq)]
#[error("invalid topic status transition: {from} -> {to}")]
pub struct InvalidTransition {
    pub from: TopicStatus,
    pub to: TopicStatus,
}

impl TopicStatus {
    /// Status assigned to every newly created topic.
    pub const fn initial() -> Self {
        Self::Unanswered
    }

    /// Wire/storage representation (matches the CHECK constraint on the
    /// `topics.status` column).
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Unanswered => "UNANSWERED",
            Self::Answered => "ANSWERED",
            Self::Solved => "SOLVED",
            Self::Closed => "CLOSED",
        }
    }

    /// Validate an explicit status move.
    ///
    /// No operation triggers transitions automatically; callers that want to
    /// change a topic's status pass the target state here. The only rule
    /// enforced today is that `Closed` is terminal.
    pub fn transition(self, to: Self) -> Result<Self, InvalidTransition> {
        if self == Self::Closed && to != Self::Closed {
            return Err(InvalidTransition { from: self, to });
        }
        Ok(to)
    }
}

impl fmt::Display for TopicStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for TopicStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "UNANSWERED" => Ok(Self::Unanswered),
            "ANSWERED" => Ok(Self::Answered),
            "SOLVED" => Ok(Self::Solved),
            "CLOSED" => Ok(Self::Closed),
            other => Err(format!("unknown topic status: {other}")),
        }
    }
}
