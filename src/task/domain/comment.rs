//! Append-only task comments.

use super::{CommentId, TaskDomainError};
use chrono::{DateTime, Utc};
use mockable::Clock;
use serde::{Deserialize, Serialize};

/// A comment attached to a task. Never edited once created.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Comment {
    id: CommentId,
    author: String,
    content: String,
    created_at: DateTime<Utc>,
}

impl Comment {
    /// Creates a comment stamped with the current clock time.
    ///
    /// # Errors
    ///
    /// Returns [`TaskDomainError::EmptyCommentAuthor`] or
    /// [`TaskDomainError::EmptyCommentContent`] when either value is blank.
    pub fn new(
        author: impl Into<String>,
        content: impl Into<String>,
        clock: &impl Clock,
    ) -> Result<Self, TaskDomainError> {
        let author_text = author.into();
        let content_text = content.into();
        if author_text.trim().is_empty() {
            return Err(TaskDomainError::EmptyCommentAuthor);
        }
        if content_text.trim().is_empty() {
            return Err(TaskDomainError::EmptyCommentContent);
        }

        Ok(Self {
            id: CommentId::new(),
            author: author_text.trim().to_owned(),
            content: content_text,
            created_at: clock.utc(),
        })
    }

    /// Returns the comment identifier.
    #[must_use]
    pub const fn id(&self) -> CommentId {
        self.id
    }

    /// Returns the comment author.
    #[must_use]
    pub fn author(&self) -> &str {
        &self.author
    }

    /// Returns the comment body.
    #[must_use]
    pub fn content(&self) -> &str {
        &self.content
    }

    /// Returns the creation timestamp.
    #[must_use]
    pub const fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }
}
