//! Error types for task domain validation and parsing.

use thiserror::Error;

/// Errors returned while constructing or mutating task values.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum TaskDomainError {
    /// The task title is empty after trimming.
    #[error("task title must not be empty")]
    EmptyTitle,

    /// The task description is empty after trimming.
    #[error("task description must not be empty")]
    EmptyDescription,

    /// The task identifier is empty after trimming.
    #[error("task identifier must not be empty")]
    EmptyTaskId,

    /// Story points fall outside the accepted range.
    #[error("story points {0} out of range, expected 0..=20")]
    StoryPointsOutOfRange(i64),

    /// The comment author is empty after trimming.
    #[error("comment author must not be empty")]
    EmptyCommentAuthor,

    /// The comment content is empty after trimming.
    #[error("comment content must not be empty")]
    EmptyCommentContent,

    /// A textual enumeration value could not be parsed.
    #[error(transparent)]
    UnknownValue(#[from] ParseTaskEnumError),
}

/// Error returned while parsing a task enumeration from text.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
#[error("unknown {field}: {value}")]
pub struct ParseTaskEnumError {
    /// Name of the enumeration being parsed.
    pub field: &'static str,
    /// Rejected input.
    pub value: String,
}

impl ParseTaskEnumError {
    pub(crate) fn new(field: &'static str, value: &str) -> Self {
        Self {
            field,
            value: value.to_owned(),
        }
    }
}
