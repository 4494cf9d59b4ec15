//! Question entity and vote kinds

use std::fmt;

use serde::{Serialize, Serializer};

use super::{TagId, ValidationError};

/// Server-assigned question identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, sqlx::Type)]
#[sqlx(transparent)]
pub struct QuestionId(pub i32);

impl QuestionId {
    /// Parse a question id from a path segment.
    pub fn parse(s: &str) -> Result<Self, ValidationError> {
        s.trim()
            .parse::<i32>()
            .map(Self)
            .map_err(|_| ValidationError::InvalidFormat {
                field: "question id",
                reason: "must be numeric",
            })
    }
}

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Serialize for QuestionId {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// Question record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, sqlx::FromRow)]
#[serde(rename_all = "camelCase")]
pub struct Question {
    pub id: QuestionId,
    pub tag_id: TagId,
    pub question: String,
    pub answer: String,
    pub votes_up: i32,
    pub votes_down: i32,
}

/// Question about to be inserted
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewQuestion {
    pub tag_id: TagId,
    pub question: String,
    pub answer: String,
    pub votes_up: i32,
    pub votes_down: i32,
}

impl NewQuestion {
    /// Question with both counters at zero.
    pub fn new(tag_id: TagId, question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            tag_id,
            question: question.into(),
            answer: answer.into(),
            votes_up: 0,
            votes_down: 0,
        }
    }
}

/// Direction of a vote.
///
/// Anything other than `up`/`down` is kept as `Other` and leaves the
/// counters untouched.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum VoteType {
    Up,
    Down,
    Other(String),
}

impl VoteType {
    pub fn as_str(&self) -> &str {
        match self {
            Self::Up => "up",
            Self::Down => "down",
            Self::Other(s) => s,
        }
    }
}

impl From<&str> for VoteType {
    fn from(s: &str) -> Self {
        match s {
            "up" => Self::Up,
            "down" => Self::Down,
            other => Self::Other(other.to_owned()),
        }
    }
}
