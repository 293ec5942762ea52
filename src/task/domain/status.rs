//! Enumerations describing task workflow, priority and kind.

use super::ParseTaskEnumError;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Legacy lifecycle status of a task.
///
/// Tracked independently of [`KanbanStatus`]; progress and story point
/// completion are computed from this field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    /// Work has not started.
    Pending,
    /// Work is underway.
    InProgress,
    /// Work is finished.
    Completed,
    /// Work cannot proceed.
    Blocked,
}

impl TaskStatus {
    /// Every status in declaration order.
    pub const ALL: [Self; 4] = [
        Self::Pending,
        Self::InProgress,
        Self::Completed,
        Self::Blocked,
    ];

    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::InProgress => "in_progress",
            Self::Completed => "completed",
            Self::Blocked => "blocked",
        }
    }
}

impl TryFrom<&str> for TaskStatus {
    type Error = ParseTaskEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "in_progress" => Ok(Self::InProgress),
            "completed" => Ok(Self::Completed),
            "blocked" => Ok(Self::Blocked),
            _ => Err(ParseTaskEnumError::new("task status", value)),
        }
    }
}

/// Board column a task currently occupies.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum KanbanStatus {
    /// Not yet scheduled.
    #[default]
    Backlog,
    /// Scheduled for the current iteration.
    Todo,
    /// Being worked on.
    InProgress,
    /// Awaiting review.
    InReview,
    /// Under test.
    Testing,
    /// Finished.
    Done,
    /// Side-state for work that cannot proceed.
    Blocked,
}

impl KanbanStatus {
    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Backlog => "backlog",
            Self::Todo => "todo",
            Self::InProgress => "in_progress",
            Self::InReview => "in_review",
            Self::Testing => "testing",
            Self::Done => "done",
            Self::Blocked => "blocked",
        }
    }

    /// Returns the lifecycle status conventionally associated with the column.
    ///
    /// The tracker only applies this mapping on moves when status coupling is
    /// enabled in the configuration.
    #[must_use]
    pub const fn implied_status(self) -> TaskStatus {
        match self {
            Self::Backlog | Self::Todo => TaskStatus::Pending,
            Self::InProgress | Self::InReview | Self::Testing => TaskStatus::InProgress,
            Self::Done => TaskStatus::Completed,
            Self::Blocked => TaskStatus::Blocked,
        }
    }

    /// Whether the column counts as active work.
    #[must_use]
    pub const fn is_active(self) -> bool {
        !matches!(self, Self::Done | Self::Blocked)
    }
}

impl TryFrom<&str> for KanbanStatus {
    type Error = ParseTaskEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "backlog" => Ok(Self::Backlog),
            "todo" => Ok(Self::Todo),
            "in_progress" => Ok(Self::InProgress),
            "in_review" => Ok(Self::InReview),
            "testing" => Ok(Self::Testing),
            "done" => Ok(Self::Done),
            "blocked" => Ok(Self::Blocked),
            _ => Err(ParseTaskEnumError::new("kanban status", value)),
        }
    }
}

/// Task priority.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum Priority {
    /// Can wait.
    Low,
    /// Normal priority.
    #[default]
    Medium,
    /// Needs attention soon.
    High,
    /// Needs attention now.
    Critical,
}

impl Priority {
    /// Every priority in ascending order.
    pub const ALL: [Self; 4] = [Self::Low, Self::Medium, Self::High, Self::Critical];

    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Low => "low",
            Self::Medium => "medium",
            Self::High => "high",
            Self::Critical => "critical",
        }
    }

    /// Whether the priority is `high` or `critical`.
    #[must_use]
    pub const fn is_high(self) -> bool {
        matches!(self, Self::High | Self::Critical)
    }
}

impl TryFrom<&str> for Priority {
    type Error = ParseTaskEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "low" => Ok(Self::Low),
            "medium" => Ok(Self::Medium),
            "high" => Ok(Self::High),
            "critical" => Ok(Self::Critical),
            _ => Err(ParseTaskEnumError::new("priority", value)),
        }
    }
}

/// Kind of work a task represents.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "snake_case")]
pub enum TaskType {
    /// New functionality.
    #[default]
    Feature,
    /// Defect fix.
    Bug,
    /// Documentation work.
    Documentation,
    /// Investigation.
    Research,
    /// Meeting or call.
    Meeting,
    /// Review of someone else's work.
    Review,
    /// Release or rollout.
    Deployment,
}

impl TaskType {
    /// Returns the canonical text representation.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Feature => "feature",
            Self::Bug => "bug",
            Self::Documentation => "documentation",
            Self::Research => "research",
            Self::Meeting => "meeting",
            Self::Review => "review",
            Self::Deployment => "deployment",
        }
    }
}

impl TryFrom<&str> for TaskType {
    type Error = ParseTaskEnumError;

    fn try_from(value: &str) -> Result<Self, Self::Error> {
        match value.trim().to_ascii_lowercase().as_str() {
            "feature" => Ok(Self::Feature),
            "bug" => Ok(Self::Bug),
            "documentation" => Ok(Self::Documentation),
            "research" => Ok(Self::Research),
            "meeting" => Ok(Self::Meeting),
            "review" => Ok(Self::Review),
            "deployment" => Ok(Self::Deployment),
            _ => Err(ParseTaskEnumError::new("task type", value)),
        }
    }
}

macro_rules! display_as_str {
    ($($ty:ty),+ $(,)?) => {
        $(
            impl fmt::Display for $ty {
                fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                    f.write_str(self.as_str())
                }
            }
        )+
    };
}

display_as_str!(TaskStatus, KanbanStatus, Priority, TaskType);
